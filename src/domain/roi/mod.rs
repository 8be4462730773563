//! ROI module - investment and payback modelling.

mod model;

pub use model::{ComplianceComplexityPenalty, OrganisationTier, RoiCalculator, RoiModel};
