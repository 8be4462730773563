//! Assessment module - what the respondent has told us.

mod lead;
mod proficiency;
mod response;

pub use lead::LeadDetails;
pub use proficiency::Proficiency;
pub use response::{Response, ResponseSet};
