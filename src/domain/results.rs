//! Results aggregate - everything the report renders, computed in one pass.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::{ids, Catalog};
use crate::domain::compliance::{ComplianceGap, ComplianceGapAnalyzer};
use crate::domain::currency::Currency;
use crate::domain::recommendations::{RecommendationGenerator, ServiceRecommendation};
use crate::domain::roi::{RoiCalculator, RoiModel};
use crate::domain::scoring::{RiskScore, RiskScorer};
use crate::domain::visibility::VisibilityResolver;

/// Band either side of the industry average counted as "average".
const PEER_BAND: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeerComparison {
    #[serde(rename = "Above Average Risk")]
    AboveAverage,
    #[serde(rename = "Average Risk")]
    Average,
    #[serde(rename = "Below Average Risk")]
    BelowAverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkData {
    pub industry_average: u8,
    pub peer_comparison: PeerComparison,
}

impl BenchmarkData {
    pub fn industry_average(industry: Option<&str>) -> u8 {
        match industry {
            Some("financial") => 78,
            Some("healthcare") => 75,
            _ => 68,
        }
    }

    pub fn compare(overall: u8, industry: Option<&str>) -> Self {
        let average = Self::industry_average(industry);
        let peer_comparison = if overall > average.saturating_add(PEER_BAND) {
            PeerComparison::AboveAverage
        } else if overall < average.saturating_sub(PEER_BAND) {
            PeerComparison::BelowAverage
        } else {
            PeerComparison::Average
        };
        Self {
            industry_average: average,
            peer_comparison,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub risk_score: RiskScore,
    pub compliance_gaps: Vec<ComplianceGap>,
    pub service_recommendations: Vec<ServiceRecommendation>,
    pub roi_model: RoiModel,
    pub threat_profile: Vec<String>,
    pub benchmark_data: BenchmarkData,
    pub currency: Currency,
}

/// Computes the full report.
///
/// Hidden questions' answers are dropped first so stale responses never
/// reach any calculation. Callers reject empty response sets beforehand.
pub fn generate_assessment_results(catalog: &Catalog, responses: &ResponseSet) -> AssessmentResults {
    let responses = VisibilityResolver::retain_visible(catalog, responses);

    let risk_score = RiskScorer::calculate(catalog, &responses);
    let industry = responses.first_selection(ids::INDUSTRY_VERTICAL);

    let results = AssessmentResults {
        compliance_gaps: ComplianceGapAnalyzer::analyze(&responses),
        service_recommendations: RecommendationGenerator::generate(&responses, &risk_score),
        roi_model: RoiCalculator::calculate(&responses, &risk_score),
        threat_profile: responses.selected(ids::THREAT_PRIORITIES).to_vec(),
        benchmark_data: BenchmarkData::compare(risk_score.overall.value(), industry),
        currency: Currency::from_responses(&responses),
        risk_score,
    };

    trace!(
        overall = results.risk_score.overall.value(),
        recommendations = results.service_recommendations.len(),
        gaps = results.compliance_gaps.len(),
        "Assessment results generated"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Response;

    fn full_responses() -> ResponseSet {
        vec![
            Response::selected(ids::CURRENCY_PREFERENCE, &["eur"]),
            Response::selected(ids::USER_PROFICIENCY, &["expert"]),
            Response::selected(ids::ORG_PROFILE, &["enterprise"]),
            Response::selected(ids::INDUSTRY_VERTICAL, &["healthcare"]),
            Response::selected(ids::CYBER_MATURITY, &["basic"]),
            Response::selected(
                ids::THREAT_PRIORITIES,
                &["ransomware", "data-breach", "phishing", "supply-chain"],
            ),
            Response::selected(ids::COMPLIANCE_NEEDS, &["gdpr", "hipaa"]),
            Response::selected(ids::URGENCY_TIMELINE, &["board-mandate"]),
            Response::slider(ids::BUDGET_FLEXIBILITY, 50.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn benchmark_comparison_bands() {
        assert_eq!(
            BenchmarkData::compare(89, Some("financial")).peer_comparison,
            PeerComparison::AboveAverage
        );
        assert_eq!(
            BenchmarkData::compare(88, Some("financial")).peer_comparison,
            PeerComparison::Average
        );
        assert_eq!(
            BenchmarkData::compare(57, None).peer_comparison,
            PeerComparison::BelowAverage
        );
        assert_eq!(BenchmarkData::industry_average(Some("healthcare")), 75);
    }

    #[test]
    fn results_are_idempotent() {
        let responses = full_responses();
        let first = generate_assessment_results(Catalog::standard(), &responses);
        let second = generate_assessment_results(Catalog::standard(), &responses);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn results_echo_threats_gaps_and_currency() {
        let results = generate_assessment_results(Catalog::standard(), &full_responses());
        assert_eq!(
            results.threat_profile,
            vec!["ransomware", "data-breach", "phishing", "supply-chain"]
        );
        assert_eq!(results.compliance_gaps.len(), 2);
        assert_eq!(results.currency, Currency::Eur);
        assert_eq!(results.benchmark_data.industry_average, 75);
        assert!(results.roi_model.investment_range.starts_with('€'));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(generate_assessment_results(
            Catalog::standard(),
            &full_responses(),
        ))
        .unwrap();
        for key in [
            "riskScore",
            "complianceGaps",
            "serviceRecommendations",
            "roiModel",
            "threatProfile",
            "benchmarkData",
            "currency",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["currency"], "eur");
        assert_eq!(json["riskScore"]["trend"], "worsening");
    }

    #[test]
    fn stale_threats_are_not_reported() {
        let mut responses = full_responses();
        responses.upsert(Response::selected(ids::USER_PROFICIENCY, &["novice"]));
        let results = generate_assessment_results(Catalog::standard(), &responses);
        assert!(results.threat_profile.is_empty());
        assert!(results.compliance_gaps.is_empty());
    }
}
