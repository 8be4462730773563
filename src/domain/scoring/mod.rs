//! Scoring module - weighted aggregation of answers into risk scores.
//!
//! - `contribution` - per-question primitive shared by both scorers
//! - `live` - cheap running score after every answer
//! - `risk_score` - full score with breakdown, trend and confidence

mod contribution;
mod live;
mod risk_score;

pub use contribution::{
    contribution, has_serious_incident, Contribution, SERIOUS_INCIDENTS, SERIOUS_INCIDENT_FACTOR,
};
pub use live::{LiveScore, LiveScorer, LiveTrend};
pub use risk_score::{
    BreakdownCategory, RiskBreakdown, RiskCategory, RiskScore, RiskScorer, RiskTrend,
};
