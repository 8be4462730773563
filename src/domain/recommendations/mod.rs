//! Recommendations module - which services to propose, tailored by segment.

mod generator;
mod service;

pub use generator::{RecommendationContext, RecommendationGenerator};
pub use service::{
    ImplementationPlan, PriceBand, PricingEstimate, Segment, ServicePriority,
    ServiceRecommendation,
};
