//! Domain layer containing the assessment engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - The immutable question set
//! - `assessment` - Responses, proficiency and lead details
//! - `visibility` - Branching rules over prior answers
//! - `scoring` - Live and full risk scores
//! - `compliance` - Framework gap lookup
//! - `recommendations` - Segment-tailored service proposals
//! - `roi` - Investment and payback modelling
//! - `currency` - Display currencies
//! - `results` - The aggregate report
//!
//! Nothing in this layer performs I/O.

pub mod assessment;
pub mod catalog;
pub mod compliance;
pub mod currency;
pub mod foundation;
pub mod recommendations;
pub mod results;
pub mod roi;
pub mod scoring;
pub mod visibility;
