//! ROI Model - deterministic investment, loss and payback arithmetic.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::ids;
use crate::domain::compliance::{
    is_compliance_complex, selected_framework_count, COMPLIANCE_COMPLEXITY_THRESHOLD,
};
use crate::domain::currency::Currency;
use crate::domain::foundation::Percentage;
use crate::domain::scoring::RiskScore;

const MAX_RISK_REDUCTION: f64 = 85.0;
const BASE_RISK_REDUCTION: f64 = 60.0;
/// Investment (GBP) buying one extra point of risk reduction.
const INVESTMENT_PER_POINT: f64 = 10_000.0;
const PENALTY_STEP: f64 = 0.25;
const EFFICIENCY_LOSS_STEP: u32 = 8;
const MAX_EFFICIENCY_LOSS: u32 = 30;
const MIN_PAYBACK_MONTHS: f64 = 3.0;
const RANGE_LOW: f64 = 0.8;
const RANGE_HIGH: f64 = 1.2;

/// Organisation scale the base figures are seeded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganisationTier {
    Startup,
    Sme,
    Enterprise,
    Multinational,
}

impl OrganisationTier {
    /// Largest selected scale wins.
    pub fn from_responses(responses: &ResponseSet) -> Self {
        if responses.includes(ids::ORG_PROFILE, "multinational") {
            OrganisationTier::Multinational
        } else if responses.includes(ids::ORG_PROFILE, "enterprise") {
            OrganisationTier::Enterprise
        } else if responses.includes(ids::ORG_PROFILE, "startup") {
            OrganisationTier::Startup
        } else {
            OrganisationTier::Sme
        }
    }

    /// (base investment, base loss estimate) in GBP.
    fn base_figures(&self) -> (f64, f64) {
        match self {
            OrganisationTier::Startup => (25_000.0, 150_000.0),
            OrganisationTier::Sme => (60_000.0, 500_000.0),
            OrganisationTier::Enterprise => (150_000.0, 2_000_000.0),
            OrganisationTier::Multinational => (300_000.0, 5_000_000.0),
        }
    }
}

/// (investment multiplier, loss multiplier) for the selected industry.
fn industry_multipliers(industry: Option<&str>) -> (f64, f64) {
    match industry {
        Some("financial") => (1.5, 3.0),
        Some("healthcare") => (1.4, 2.5),
        _ => (1.0, 1.0),
    }
}

/// Overhead of pursuing many frameworks at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceComplexityPenalty {
    pub is_applicable: bool,
    pub description: String,
    /// GBP.
    pub additional_cost: f64,
    /// Percentage points removed from risk reduction.
    pub efficiency_loss: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiModel {
    pub investment_range: String,
    /// GBP per year.
    pub estimated_loss_prevention: f64,
    pub payback_period: String,
    pub risk_reduction: Percentage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_complexity_penalty: Option<ComplianceComplexityPenalty>,
}

pub struct RoiCalculator;

impl RoiCalculator {
    pub fn calculate(responses: &ResponseSet, risk: &RiskScore) -> RoiModel {
        let currency = Currency::from_responses(responses);
        let (base_investment, base_loss) = OrganisationTier::from_responses(responses).base_figures();
        let (investment_factor, loss_factor) =
            industry_multipliers(responses.first_selection(ids::INDUSTRY_VERTICAL));

        let unpenalised_investment = base_investment * investment_factor;
        let loss_estimate =
            base_loss * loss_factor * (1.0 + f64::from(risk.overall.value()) / 100.0);

        let framework_count = selected_framework_count(responses);
        let mut investment = unpenalised_investment;
        let mut efficiency_loss = 0;
        let penalty = if is_compliance_complex(framework_count) {
            let excess = (framework_count - (COMPLIANCE_COMPLEXITY_THRESHOLD - 1)) as u32;
            investment *= 1.0 + f64::from(excess) * PENALTY_STEP;
            efficiency_loss = (excess * EFFICIENCY_LOSS_STEP).min(MAX_EFFICIENCY_LOSS);
            let additional_cost = investment - unpenalised_investment;
            Some(ComplianceComplexityPenalty {
                is_applicable: true,
                description: format!(
                    "Managing {framework_count} compliance frameworks at once adds around {} in overhead and reduces programme efficiency by {efficiency_loss}%",
                    currency.format(additional_cost)
                ),
                additional_cost,
                efficiency_loss,
            })
        } else {
            None
        };

        let reduction = Self::base_reduction(investment) - f64::from(efficiency_loss);
        let annual_prevention = loss_estimate * reduction / 100.0;

        RoiModel {
            investment_range: format!(
                "{} - {}",
                currency.format(investment * RANGE_LOW),
                currency.format(investment * RANGE_HIGH)
            ),
            estimated_loss_prevention: annual_prevention,
            payback_period: Self::payback(investment, annual_prevention),
            risk_reduction: Percentage::from_f64(reduction),
            compliance_complexity_penalty: penalty,
        }
    }

    /// Risk reduction bought by `investment` before any efficiency loss, capped at 85.
    pub fn base_reduction(investment: f64) -> f64 {
        f64::min(MAX_RISK_REDUCTION, BASE_RISK_REDUCTION + investment / INVESTMENT_PER_POINT)
    }

    fn payback(investment: f64, annual_prevention: f64) -> String {
        let monthly = annual_prevention / 12.0;
        if monthly <= 0.0 {
            return "Not applicable".to_string();
        }
        let months = f64::max(MIN_PAYBACK_MONTHS, (investment / monthly).round()) as u32;
        format!("{months} months")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Response;
    use crate::domain::scoring::{RiskBreakdown, RiskCategory, RiskTrend};

    fn risk(overall: u8) -> RiskScore {
        RiskScore {
            overall: Percentage::new(overall),
            category: RiskCategory::from_score(Percentage::new(overall)),
            breakdown: RiskBreakdown::default(),
            trend: RiskTrend::Stable,
            confidence: Percentage::HUNDRED,
        }
    }

    fn with_frameworks(frameworks: &[&str]) -> ResponseSet {
        vec![
            Response::selected(ids::ORG_PROFILE, &["enterprise"]),
            Response::selected(ids::INDUSTRY_VERTICAL, &["financial"]),
            Response::selected(ids::COMPLIANCE_NEEDS, frameworks),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn enterprise_financial_with_five_frameworks() {
        let responses = with_frameworks(&["gdpr", "nis2", "iso27001", "pci-dss", "sox"]);
        let roi = RoiCalculator::calculate(&responses, &risk(80));

        let penalty = roi.compliance_complexity_penalty.unwrap();
        assert!(penalty.is_applicable);
        assert_eq!(penalty.efficiency_loss, 16);
        // 225k base investment, x1.5 for two frameworks over the threshold
        assert!((penalty.additional_cost - 112_500.0).abs() < 1e-6);

        let unpenalised = RoiCalculator::base_reduction(150_000.0 * 1.5);
        assert!(f64::from(roi.risk_reduction.value()) < unpenalised);
        assert_eq!(roi.investment_range, "£270,000 - £405,000");
    }

    #[test]
    fn penalised_investment_drives_the_reduction() {
        let responses = with_frameworks(&["gdpr", "nis2", "iso27001", "pci-dss", "sox"]);
        let roi = RoiCalculator::calculate(&responses, &risk(80));

        // 337.5k penalised investment caps at 85, less 16 points of efficiency loss
        assert_eq!(roi.risk_reduction.value(), 69);
        // 2m x3 x1.8 loss estimate at 69%
        assert!((roi.estimated_loss_prevention - 7_452_000.0).abs() < 1.0);
        assert_eq!(roi.payback_period, "3 months");
    }

    #[test]
    fn three_frameworks_have_no_penalty() {
        let roi = RoiCalculator::calculate(&with_frameworks(&["gdpr", "nis2", "sox"]), &risk(50));
        assert!(roi.compliance_complexity_penalty.is_none());
    }

    #[test]
    fn four_frameworks_cost_eight_points() {
        let roi = RoiCalculator::calculate(
            &with_frameworks(&["gdpr", "nis2", "sox", "nist"]),
            &risk(50),
        );
        let penalty = roi.compliance_complexity_penalty.unwrap();
        assert_eq!(penalty.efficiency_loss, 8);
        assert!(penalty.additional_cost > 0.0);
    }

    #[test]
    fn efficiency_loss_is_capped_at_thirty() {
        let roi = RoiCalculator::calculate(
            &with_frameworks(&["gdpr", "nis2", "iso27001", "pci-dss", "sox", "hipaa", "nist"]),
            &risk(50),
        );
        assert_eq!(roi.compliance_complexity_penalty.unwrap().efficiency_loss, 30);
    }

    #[test]
    fn sme_defaults_without_answers() {
        let roi = RoiCalculator::calculate(&ResponseSet::new(), &risk(0));
        // 60k investment -> 66 points, 500k loss
        assert_eq!(roi.risk_reduction.value(), 66);
        assert!((roi.estimated_loss_prevention - 330_000.0).abs() < 1e-6);
        assert_eq!(roi.investment_range, "£48,000 - £72,000");
        assert_eq!(roi.payback_period, "3 months");
    }

    #[test]
    fn reduction_caps_at_eighty_five() {
        let responses: ResponseSet = vec![Response::selected(ids::ORG_PROFILE, &["multinational"])]
            .into_iter()
            .collect();
        let roi = RoiCalculator::calculate(&responses, &risk(40));
        assert_eq!(roi.risk_reduction.value(), 85);
    }

    #[test]
    fn payback_grows_with_investment_relative_to_loss() {
        assert_eq!(RoiCalculator::payback(120_000.0, 120_000.0), "12 months");
        assert_eq!(RoiCalculator::payback(1_000.0, 120_000.0), "3 months");
        assert_eq!(RoiCalculator::payback(1_000.0, 0.0), "Not applicable");
    }

    #[test]
    fn investment_range_uses_preferred_currency() {
        let responses: ResponseSet = vec![Response::selected(ids::CURRENCY_PREFERENCE, &["usd"])]
            .into_iter()
            .collect();
        let roi = RoiCalculator::calculate(&responses, &risk(0));
        assert_eq!(roi.investment_range, "$60,960 - $91,440");
    }

    #[test]
    fn penalty_serializes_in_camel_case() {
        let roi = RoiCalculator::calculate(
            &with_frameworks(&["gdpr", "nis2", "sox", "nist"]),
            &risk(50),
        );
        let json = serde_json::to_value(&roi).unwrap();
        assert_eq!(json["complianceComplexityPenalty"]["isApplicable"], true);
        assert_eq!(json["complianceComplexityPenalty"]["efficiencyLoss"], 8);
    }
}
