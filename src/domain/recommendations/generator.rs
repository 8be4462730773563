//! Service Recommendation Generator - fixed-order rules over answers and score.

use super::service::{
    ImplementationPlan, PriceBand, PricingEstimate, Segment, ServicePriority,
    ServiceRecommendation,
};
use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::ids;
use crate::domain::compliance::{is_compliance_complex, selected_framework_count};
use crate::domain::currency::Currency;
use crate::domain::scoring::RiskScore;

/// Budget slider below this value triggers phased pricing.
const PHASED_BUDGET_THRESHOLD: f64 = 40.0;

/// Startups below this budget slider value get fractional advisory.
const STARTUP_ADVISORY_BUDGET: f64 = 50.0;

const MONTHLY: &str = "per month";
const PER_PROJECT: &str = "per project";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Everything a rule may read.
pub struct RecommendationContext<'a> {
    pub responses: &'a ResponseSet,
    pub risk: &'a RiskScore,
    pub segment: Segment,
    pub currency: Currency,
}

impl<'a> RecommendationContext<'a> {
    pub fn new(responses: &'a ResponseSet, risk: &'a RiskScore) -> Self {
        Self {
            responses,
            risk,
            segment: Segment::from_responses(responses),
            currency: Currency::from_responses(responses),
        }
    }

    fn maturity_in(&self, levels: &[&str]) -> bool {
        self.responses
            .first_selection(ids::CYBER_MATURITY)
            .is_some_and(|m| levels.contains(&m))
    }

    fn threat(&self, option: &str) -> bool {
        self.responses.includes(ids::THREAT_PRIORITIES, option)
    }

    fn urgency(&self, option: &str) -> bool {
        self.responses.includes(ids::URGENCY_TIMELINE, option)
    }

    fn industry(&self, option: &str) -> bool {
        self.responses.first_selection(ids::INDUSTRY_VERTICAL) == Some(option)
    }

    fn budget_below(&self, threshold: f64) -> bool {
        self.responses
            .slider_value(ids::BUDGET_FLEXIBILITY)
            .is_some_and(|v| v < threshold)
    }

    fn overall(&self) -> u8 {
        self.risk.overall.value()
    }

    /// Risks from `candidates` whose threat was selected, else the defaults.
    fn addressed(&self, candidates: &[(&str, &str)], defaults: &[&str]) -> Vec<String> {
        let selected: Vec<String> = candidates
            .iter()
            .filter(|(threat, _)| self.threat(threat))
            .map(|(_, risk)| risk.to_string())
            .collect();
        if selected.is_empty() {
            strings(defaults)
        } else {
            selected
        }
    }

    fn pricing(&self, bands: [PriceBand; 3], period: &str, model: &str, factors: &[&str]) -> PricingEstimate {
        let band = self.segment.pick(bands[0], bands[1], bands[2]);
        let mut factors = strings(factors);
        if self.budget_below(PHASED_BUDGET_THRESHOLD) {
            factors.push("Phased rollout to match investment appetite".to_string());
        }
        PricingEstimate {
            range: band.format(self.currency, period),
            model: model.to_string(),
            factors,
        }
    }

    fn scaling(&self, options: &[&str]) -> Vec<String> {
        let mut options = strings(options);
        if self.budget_below(PHASED_BUDGET_THRESHOLD) {
            options.push(
                "Start with a reduced-scope phase one and expand as ROI is demonstrated".to_string(),
            );
        }
        options
    }
}

type Rule = fn(&RecommendationContext) -> Option<ServiceRecommendation>;

/// Rule order is the output order.
const RULES: [Rule; 7] = [
    security_advisory,
    managed_soc,
    vulnerability_management,
    incident_response,
    compliance_governance,
    cloud_security,
    security_training,
];

pub struct RecommendationGenerator;

impl RecommendationGenerator {
    pub fn generate(responses: &ResponseSet, risk: &RiskScore) -> Vec<ServiceRecommendation> {
        let ctx = RecommendationContext::new(responses, risk);
        RULES.iter().filter_map(|rule| rule(&ctx)).collect()
    }
}

fn security_advisory(ctx: &RecommendationContext) -> Option<ServiceRecommendation> {
    let immature = ctx.maturity_in(&["ad-hoc", "basic", "developing", "uncertain"]);
    let lean_startup = ctx.segment == Segment::Startup && ctx.budget_below(STARTUP_ADVISORY_BUDGET);
    if !immature && !lean_startup {
        return None;
    }

    let priority = if ctx.maturity_in(&["ad-hoc", "basic"]) {
        ServicePriority::Essential
    } else {
        ServicePriority::Recommended
    };

    Some(ServiceRecommendation {
        id: "security-advisory".to_string(),
        name: ctx
            .segment
            .pick("Fractional CISO", "Virtual CISO & Security Strategy", "Virtual CISO Service")
            .to_string(),
        description: ctx
            .segment
            .pick(
                "Part-time security leadership that builds investor-ready foundations without a full-time hire.",
                "Executive security leadership to align a multi-entity programme with board risk appetite.",
                "Experienced security leadership to turn ad-hoc controls into a structured programme.",
            )
            .to_string(),
        priority,
        timeframe: ctx
            .segment
            .pick("Onboarding within 1-2 weeks", "Onboarding within 2-4 weeks", "Onboarding within 2 weeks")
            .to_string(),
        benefits: strings(&[
            "Security strategy aligned with business objectives",
            "Board-level risk reporting",
            "Prioritised 12-month security roadmap",
        ]),
        technical_details: strings(&[
            "Current-state maturity assessment against NIST CSF",
            "Policy framework and governance structure",
            "Quarterly risk register review",
        ]),
        pricing_estimate: ctx.pricing(
            [
                PriceBand::new(1_500.0, 3_000.0),
                PriceBand::new(8_000.0, 15_000.0),
                PriceBand::new(3_500.0, 6_000.0),
            ],
            MONTHLY,
            "Monthly retainer",
            &["Days per month", "Programme scope", "Reporting cadence"],
        ),
        hanco_advantage: strings(&[
            "CISOs with regulated-sector experience",
            "Fixed monthly fee with no long-term lock-in",
        ]),
        addressed_risks: ctx.addressed(
            &[
                ("regulatory-compliance", "Regulatory non-compliance"),
                ("business-disruption", "Unplanned business disruption"),
            ],
            &["Lack of security governance", "Unprioritised security spend"],
        ),
        implementation: ImplementationPlan {
            phase1: "Discovery and maturity baseline (weeks 1-2)".to_string(),
            phase2: "Roadmap, policies and quick wins (weeks 3-8)".to_string(),
            phase3: Some("Ongoing governance and board reporting".to_string()),
        },
        scaling_options: ctx.scaling(&[
            "Increase days per month as the programme grows",
            "Transition to a permanent security hire with handover support",
        ]),
    })
}

fn managed_soc(ctx: &RecommendationContext) -> Option<ServiceRecommendation> {
    let immediate = ctx.urgency("immediate-threat");
    if !(ctx.overall() > 60 || immediate || ctx.risk.breakdown.technical.value() > 70) {
        return None;
    }

    let priority = if immediate || ctx.overall() > 75 {
        ServicePriority::Essential
    } else {
        ServicePriority::Recommended
    };
    let timeframe = if immediate {
        "Emergency deployment within 24-48 hours"
    } else {
        ctx.segment
            .pick("Deployment within 2 weeks", "Deployment within 4-6 weeks", "Deployment within 2-4 weeks")
    };

    Some(ServiceRecommendation {
        id: "managed-soc".to_string(),
        name: "24/7 Managed Detection & Response (SOC)".to_string(),
        description: ctx
            .segment
            .pick(
                "Round-the-clock monitoring sized for a lean team, with analysts who act on your behalf.",
                "Enterprise SOC coverage across hybrid estates with threat hunting and SIEM integration.",
                "Continuous monitoring and response without building an in-house security operations team.",
            )
            .to_string(),
        priority,
        timeframe: timeframe.to_string(),
        benefits: strings(&[
            "24/7 threat detection and containment",
            "Reduced mean time to respond",
            "Monthly threat intelligence briefings",
        ]),
        technical_details: strings(&[
            "EDR and log source onboarding",
            "SIEM correlation rules tuned to your estate",
            "Automated containment playbooks",
        ]),
        pricing_estimate: ctx.pricing(
            [
                PriceBand::new(2_500.0, 5_000.0),
                PriceBand::new(15_000.0, 35_000.0),
                PriceBand::new(6_000.0, 12_000.0),
            ],
            MONTHLY,
            "Per-endpoint monthly subscription",
            &["Number of endpoints", "Log sources", "Response SLA"],
        ),
        hanco_advantage: strings(&[
            "UK-based analysts with 15-minute critical alert SLA",
            "Vendor-neutral tooling",
        ]),
        addressed_risks: ctx.addressed(
            &[
                ("ransomware", "Ransomware deployment"),
                ("advanced-threats", "Advanced persistent threats"),
                ("insider-threat", "Insider misuse"),
                ("data-breach", "Undetected data exfiltration"),
            ],
            &["Undetected intrusions", "Slow incident response"],
        ),
        implementation: ImplementationPlan {
            phase1: "Log source and endpoint onboarding".to_string(),
            phase2: "Detection tuning and runbook agreement".to_string(),
            phase3: Some("Full 24/7 operational handover".to_string()),
        },
        scaling_options: ctx.scaling(&[
            "Add cloud and OT log sources",
            "Upgrade to proactive threat hunting",
        ]),
    })
}

fn vulnerability_management(ctx: &RecommendationContext) -> Option<ServiceRecommendation> {
    let priority = if ctx.overall() > 50 {
        ServicePriority::Essential
    } else {
        ServicePriority::Recommended
    };

    Some(ServiceRecommendation {
        id: "vulnerability-management".to_string(),
        name: "Vulnerability Management Programme".to_string(),
        description: ctx
            .segment
            .pick(
                "Continuous scanning and prioritised fixes that keep pace with rapid releases.",
                "Risk-based vulnerability management across large, distributed and legacy estates.",
                "Regular scanning with clear, prioritised remediation guidance for your IT team.",
            )
            .to_string(),
        priority,
        timeframe: "Initial scan within 1 week".to_string(),
        benefits: strings(&[
            "Continuous visibility of exploitable weaknesses",
            "Risk-ranked remediation backlog",
            "Evidence for audits and customer questionnaires",
        ]),
        technical_details: strings(&[
            "Authenticated internal and external scanning",
            "Exploitability-based prioritisation",
            "Patch verification rescans",
        ]),
        pricing_estimate: ctx.pricing(
            [
                PriceBand::new(800.0, 1_500.0),
                PriceBand::new(5_000.0, 12_000.0),
                PriceBand::new(2_000.0, 4_500.0),
            ],
            MONTHLY,
            "Per-asset monthly subscription",
            &["Asset count", "Scan frequency", "Penetration testing add-ons"],
        ),
        hanco_advantage: strings(&[
            "CREST-accredited testers",
            "Remediation support included",
        ]),
        addressed_risks: ctx.addressed(
            &[
                ("ransomware", "Exploited unpatched systems"),
                ("supply-chain", "Vulnerable third-party components"),
                ("cloud-security", "Cloud misconfigurations"),
            ],
            &["Unpatched vulnerabilities", "Unknown attack surface"],
        ),
        implementation: ImplementationPlan {
            phase1: "Asset discovery and baseline scan".to_string(),
            phase2: "Remediation sprints and rescans".to_string(),
            phase3: None,
        },
        scaling_options: ctx.scaling(&[
            "Add annual penetration testing",
            "Extend coverage to cloud and container workloads",
        ]),
    })
}

fn incident_response(ctx: &RecommendationContext) -> Option<ServiceRecommendation> {
    let immediate = ctx.urgency("immediate-threat");
    if !(ctx.threat("ransomware") || immediate || ctx.overall() > 70) {
        return None;
    }

    let (priority, timeframe) = if immediate {
        (ServicePriority::Essential, "Retainer active within 24 hours")
    } else {
        (ServicePriority::Recommended, "Retainer active within 1 week")
    };

    Some(ServiceRecommendation {
        id: "incident-response".to_string(),
        name: "Incident Response Retainer".to_string(),
        description: ctx
            .segment
            .pick(
                "Guaranteed expert help the moment something goes wrong, sized for a small team.",
                "Pre-agreed response capacity with playbooks tested across business units.",
                "On-call incident responders with pre-agreed terms so you are never negotiating mid-crisis.",
            )
            .to_string(),
        priority,
        timeframe: timeframe.to_string(),
        benefits: strings(&[
            "Guaranteed response times",
            "Reduced downtime and recovery cost",
            "Annual tabletop exercise",
        ]),
        technical_details: strings(&[
            "Forensic triage and containment",
            "Ransomware negotiation and recovery support",
            "Post-incident root cause report",
        ]),
        pricing_estimate: ctx.pricing(
            [
                PriceBand::new(1_000.0, 2_000.0),
                PriceBand::new(6_000.0, 12_000.0),
                PriceBand::new(2_500.0, 5_000.0),
            ],
            MONTHLY,
            "Monthly retainer with pre-paid response hours",
            &["Retained hours", "Response SLA", "Exercise frequency"],
        ),
        hanco_advantage: strings(&[
            "Responders on site within 4 hours in the UK",
            "Unused hours convert to proactive services",
        ]),
        addressed_risks: ctx.addressed(
            &[
                ("ransomware", "Ransomware recovery"),
                ("data-breach", "Breach containment and notification"),
                ("business-disruption", "Prolonged outages"),
            ],
            &["Uncoordinated incident handling"],
        ),
        implementation: ImplementationPlan {
            phase1: "Onboarding and contact tree".to_string(),
            phase2: "Playbook development and tabletop exercise".to_string(),
            phase3: None,
        },
        scaling_options: ctx.scaling(&["Increase retained hours", "Add cyber insurance liaison"]),
    })
}

fn compliance_governance(ctx: &RecommendationContext) -> Option<ServiceRecommendation> {
    let frameworks = ctx.responses.selected(ids::COMPLIANCE_NEEDS);
    let has_framework = frameworks.iter().any(|f| f != "none");
    let deadline = ctx.urgency("compliance-deadline");
    if !has_framework && !deadline {
        return None;
    }

    let priority = if deadline || ctx.risk.breakdown.compliance.value() > 70 {
        ServicePriority::Essential
    } else {
        ServicePriority::Recommended
    };

    let timeframe = if deadline {
        "Accelerated programme aligned to your deadline"
    } else {
        "3-6 month programme"
    };

    let mut benefits = strings(&[
        "Audit-ready evidence and documentation",
        "Gap remediation plan per framework",
        "Reduced regulatory fine exposure",
    ]);
    let framework_count = selected_framework_count(ctx.responses);
    if is_compliance_complex(framework_count) {
        benefits.push(format!(
            "Framework rationalisation: one control set mapped across {framework_count} frameworks"
        ));
    }

    Some(ServiceRecommendation {
        id: "compliance-governance".to_string(),
        name: "Compliance & Governance Programme".to_string(),
        description: ctx
            .segment
            .pick(
                "Get certification-ready fast to unlock enterprise customers and investors.",
                "Unified governance across overlapping regulatory regimes and jurisdictions.",
                "Structured route to certification with evidence your auditors will accept.",
            )
            .to_string(),
        priority,
        timeframe: timeframe.to_string(),
        benefits,
        technical_details: strings(&[
            "Control mapping and gap assessment",
            "Policy and procedure authoring",
            "Pre-audit readiness review",
        ]),
        pricing_estimate: ctx.pricing(
            [
                PriceBand::new(10_000.0, 20_000.0),
                PriceBand::new(40_000.0, 90_000.0),
                PriceBand::new(18_000.0, 35_000.0),
            ],
            PER_PROJECT,
            "Fixed-price project",
            &["Number of frameworks", "Entities in scope", "Existing documentation"],
        ),
        hanco_advantage: strings(&[
            "Qualified ISO 27001 lead auditors",
            "Templates mapped across GDPR, NIS2 and ISO 27001",
        ]),
        addressed_risks: ctx.addressed(
            &[("regulatory-compliance", "Regulatory fines and sanctions")],
            &["Failed audits", "Lost contracts due to missing certification"],
        ),
        implementation: ImplementationPlan {
            phase1: "Gap assessment".to_string(),
            phase2: "Remediation and documentation".to_string(),
            phase3: Some("Certification audit support".to_string()),
        },
        scaling_options: ctx.scaling(&[
            "Add continuous compliance monitoring",
            "Extend to additional frameworks",
        ]),
    })
}

fn cloud_security(ctx: &RecommendationContext) -> Option<ServiceRecommendation> {
    if !(ctx.threat("cloud-security") || ctx.industry("technology") || ctx.urgency("growth-scaling")) {
        return None;
    }

    Some(ServiceRecommendation {
        id: "cloud-security".to_string(),
        name: "Cloud Security Posture Management".to_string(),
        description: ctx
            .segment
            .pick(
                "Secure-by-default cloud foundations that scale with your product.",
                "Posture management and guardrails across multi-cloud accounts and subscriptions.",
                "Continuous checks that keep your cloud services configured safely.",
            )
            .to_string(),
        priority: ServicePriority::Recommended,
        timeframe: "Assessment within 2 weeks".to_string(),
        benefits: strings(&[
            "Misconfigurations found before attackers do",
            "Identity and access hardening",
            "Continuous compliance benchmarks",
        ]),
        technical_details: strings(&[
            "CSPM across AWS, Azure and GCP",
            "Infrastructure-as-code scanning",
            "Least-privilege IAM review",
        ]),
        pricing_estimate: ctx.pricing(
            [
                PriceBand::new(1_500.0, 3_000.0),
                PriceBand::new(9_000.0, 20_000.0),
                PriceBand::new(3_500.0, 7_000.0),
            ],
            MONTHLY,
            "Per-account monthly subscription",
            &["Cloud accounts", "Workload count", "Remediation support"],
        ),
        hanco_advantage: strings(&["Certified cloud security architects"]),
        addressed_risks: ctx.addressed(
            &[
                ("cloud-security", "Cloud data exposure"),
                ("data-breach", "Publicly exposed storage"),
            ],
            &["Cloud misconfiguration", "Excessive permissions"],
        ),
        implementation: ImplementationPlan {
            phase1: "Posture assessment".to_string(),
            phase2: "Guardrails and continuous monitoring".to_string(),
            phase3: None,
        },
        scaling_options: ctx.scaling(&["Add workload protection", "Add DevSecOps pipeline integration"]),
    })
}

fn security_training(ctx: &RecommendationContext) -> Option<ServiceRecommendation> {
    let phishing = ctx.threat("phishing");
    if !(phishing || ctx.threat("insider-threat") || ctx.maturity_in(&["ad-hoc", "basic"])) {
        return None;
    }

    Some(ServiceRecommendation {
        id: "security-training".to_string(),
        name: "Security Awareness & Phishing Simulation".to_string(),
        description: ctx
            .segment
            .pick(
                "Build a security-first culture from day one.",
                "Role-based awareness at scale with reporting by department and region.",
                "Practical training and simulated phishing that measurably change behaviour.",
            )
            .to_string(),
        priority: if phishing {
            ServicePriority::Recommended
        } else {
            ServicePriority::Optional
        },
        timeframe: "Launch within 2 weeks".to_string(),
        benefits: strings(&[
            "Fewer successful phishing attacks",
            "Measurable behaviour change",
            "Evidence for compliance training requirements",
        ]),
        technical_details: strings(&[
            "Monthly phishing simulations",
            "Micro-learning modules",
            "Department-level risk dashboards",
        ]),
        pricing_estimate: ctx.pricing(
            [
                PriceBand::new(500.0, 1_200.0),
                PriceBand::new(4_000.0, 9_000.0),
                PriceBand::new(1_200.0, 2_500.0),
            ],
            MONTHLY,
            "Per-user monthly subscription",
            &["Number of users", "Simulation frequency", "Languages"],
        ),
        hanco_advantage: strings(&["Content tailored to your sector's real attacks"]),
        addressed_risks: ctx.addressed(
            &[
                ("phishing", "Credential phishing"),
                ("insider-threat", "Negligent insider behaviour"),
            ],
            &["Human error"],
        ),
        implementation: ImplementationPlan {
            phase1: "Baseline phishing test".to_string(),
            phase2: "Training rollout and monthly simulations".to_string(),
            phase3: None,
        },
        scaling_options: ctx.scaling(&["Add executive and finance-team targeted modules"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Response;
    use crate::domain::foundation::Percentage;
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

    fn set(items: Vec<Response>) -> ResponseSet {
        items.into_iter().collect()
    }

    fn ids_of(recs: &[ServiceRecommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn vulnerability_management_always_present() {
        let recs = RecommendationGenerator::generate(&ResponseSet::new(), &risk(10));
        assert_eq!(ids_of(&recs), vec!["vulnerability-management"]);
        assert_eq!(recs[0].priority, ServicePriority::Recommended);
    }

    #[test]
    fn ransomware_and_immediate_threat_make_soc_essential() {
        let responses = set(vec![
            Response::selected(ids::THREAT_PRIORITIES, &["ransomware"]),
            Response::selected(ids::URGENCY_TIMELINE, &["immediate-threat"]),
        ]);
        let recs = RecommendationGenerator::generate(&responses, &risk(40));
        let soc = recs.iter().find(|r| r.id == "managed-soc").unwrap();
        assert_eq!(soc.priority, ServicePriority::Essential);
        assert!(soc.timeframe.contains("Emergency"));
        assert!(soc.addressed_risks.contains(&"Ransomware deployment".to_string()));

        let ir = recs.iter().find(|r| r.id == "incident-response").unwrap();
        assert_eq!(ir.priority, ServicePriority::Essential);
    }

    #[test]
    fn output_follows_rule_order_not_priority() {
        let responses = set(vec![
            Response::selected(ids::CYBER_MATURITY, &["developing"]),
            Response::selected(ids::THREAT_PRIORITIES, &["phishing", "cloud-security"]),
            Response::selected(ids::COMPLIANCE_NEEDS, &["gdpr"]),
            Response::selected(ids::URGENCY_TIMELINE, &["immediate-threat"]),
        ]);
        let recs = RecommendationGenerator::generate(&responses, &risk(80));
        assert_eq!(
            ids_of(&recs),
            vec![
                "security-advisory",
                "managed-soc",
                "vulnerability-management",
                "incident-response",
                "compliance-governance",
                "cloud-security",
                "security-training",
            ]
        );
        assert_eq!(recs[0].priority, ServicePriority::Recommended);
        assert_eq!(recs[1].priority, ServicePriority::Essential);
    }

    #[test]
    fn low_maturity_makes_advisory_essential() {
        let responses = set(vec![Response::selected(ids::CYBER_MATURITY, &["ad-hoc"])]);
        let recs = RecommendationGenerator::generate(&responses, &risk(30));
        assert_eq!(recs[0].id, "security-advisory");
        assert_eq!(recs[0].priority, ServicePriority::Essential);
        let training = recs.iter().find(|r| r.id == "security-training").unwrap();
        assert_eq!(training.priority, ServicePriority::Optional);
    }

    #[test]
    fn lean_startup_gets_fractional_advisory() {
        let responses = set(vec![
            Response::selected(ids::ORG_PROFILE, &["startup"]),
            Response::slider(ids::BUDGET_FLEXIBILITY, 30.0),
        ]);
        let recs = RecommendationGenerator::generate(&responses, &risk(20));
        let advisory = recs.iter().find(|r| r.id == "security-advisory").unwrap();
        assert_eq!(advisory.name, "Fractional CISO");
        assert_eq!(advisory.pricing_estimate.range, "£1,500 - £3,000 per month");
        assert!(advisory
            .pricing_estimate
            .factors
            .iter()
            .any(|f| f.contains("Phased rollout")));
    }

    #[test]
    fn none_framework_alone_does_not_trigger_compliance() {
        let responses = set(vec![Response::selected(ids::COMPLIANCE_NEEDS, &["none"])]);
        let recs = RecommendationGenerator::generate(&responses, &risk(20));
        assert!(!ids_of(&recs).contains(&"compliance-governance"));
    }

    #[test]
    fn many_frameworks_add_rationalisation_benefit() {
        let responses = set(vec![Response::selected(
            ids::COMPLIANCE_NEEDS,
            &["gdpr", "nis2", "iso27001", "pci-dss"],
        )]);
        let recs = RecommendationGenerator::generate(&responses, &risk(20));
        let compliance = recs.iter().find(|r| r.id == "compliance-governance").unwrap();
        assert!(compliance
            .benefits
            .iter()
            .any(|b| b.contains("across 4 frameworks")));
    }

    #[test]
    fn pricing_uses_enterprise_band_and_preferred_currency() {
        let responses = set(vec![
            Response::selected(ids::CURRENCY_PREFERENCE, &["usd"]),
            Response::selected(ids::ORG_PROFILE, &["enterprise"]),
        ]);
        let recs = RecommendationGenerator::generate(&responses, &risk(20));
        assert_eq!(recs[0].pricing_estimate.range, "$6,350 - $15,240 per month");
    }

    #[test]
    fn high_technical_breakdown_triggers_soc() {
        let mut score = risk(40);
        score.breakdown.technical = Percentage::new(71);
        let recs = RecommendationGenerator::generate(&ResponseSet::new(), &score);
        let soc = recs.iter().find(|r| r.id == "managed-soc").unwrap();
        assert_eq!(soc.priority, ServicePriority::Recommended);
    }
}
