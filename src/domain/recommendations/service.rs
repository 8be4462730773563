//! Service recommendation records and the segment they are tailored to.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::ids;
use crate::domain::currency::Currency;

/// Informational priority. Output is not sorted by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServicePriority {
    Essential,
    Recommended,
    Optional,
}

/// Organisation segment that selects one of the parallel content variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Startup,
    Enterprise,
    Other,
}

impl Segment {
    pub fn from_responses(responses: &ResponseSet) -> Self {
        if responses.includes(ids::ORG_PROFILE, "startup") {
            Segment::Startup
        } else if responses.includes(ids::ORG_PROFILE, "enterprise")
            || responses.includes(ids::ORG_PROFILE, "multinational")
        {
            Segment::Enterprise
        } else {
            Segment::Other
        }
    }

    /// Picks the variant for this segment.
    pub fn pick<T>(self, startup: T, enterprise: T, other: T) -> T {
        match self {
            Segment::Startup => startup,
            Segment::Enterprise => enterprise,
            Segment::Other => other,
        }
    }
}

/// GBP price band, formatted in the display currency on output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub low: f64,
    pub high: f64,
}

impl PriceBand {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn format(&self, currency: Currency, period: &str) -> String {
        format!(
            "{} - {} {}",
            currency.format(self.low),
            currency.format(self.high),
            period
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingEstimate {
    pub range: String,
    pub model: String,
    pub factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementationPlan {
    pub phase1: String,
    pub phase2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase3: Option<String>,
}

/// One recommended service, rendered directly by the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecommendation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub priority: ServicePriority,
    pub timeframe: String,
    pub benefits: Vec<String>,
    pub technical_details: Vec<String>,
    pub pricing_estimate: PricingEstimate,
    pub hanco_advantage: Vec<String>,
    pub addressed_risks: Vec<String>,
    pub implementation: ImplementationPlan,
    pub scaling_options: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Response;

    fn org(selected: &[&str]) -> ResponseSet {
        vec![Response::selected(ids::ORG_PROFILE, selected)]
            .into_iter()
            .collect()
    }

    #[test]
    fn segment_from_org_profile() {
        assert_eq!(Segment::from_responses(&org(&["startup", "remote-first"])), Segment::Startup);
        assert_eq!(Segment::from_responses(&org(&["multinational"])), Segment::Enterprise);
        assert_eq!(Segment::from_responses(&org(&["sme"])), Segment::Other);
        assert_eq!(Segment::from_responses(&ResponseSet::new()), Segment::Other);
    }

    #[test]
    fn price_band_formats_in_display_currency() {
        let band = PriceBand::new(1_000.0, 2_000.0);
        assert_eq!(band.format(Currency::Gbp, "per month"), "£1,000 - £2,000 per month");
        assert_eq!(band.format(Currency::Usd, "per month"), "$1,270 - $2,540 per month");
    }
}
