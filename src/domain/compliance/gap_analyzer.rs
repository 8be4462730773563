//! Compliance Gap Analyzer - static lookup per selected framework.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::ids;
use crate::domain::foundation::Percentage;

/// Number of selected frameworks from which a programme counts as complex.
pub const COMPLIANCE_COMPLEXITY_THRESHOLD: usize = 4;

/// Shared trigger for the questionnaire warning and the ROI penalty.
pub fn is_compliance_complex(framework_count: usize) -> bool {
    framework_count >= COMPLIANCE_COMPLEXITY_THRESHOLD
}

/// Number of frameworks selected on the compliance question.
pub fn selected_framework_count(responses: &ResponseSet) -> usize {
    responses.selected(ids::COMPLIANCE_NEEDS).len()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GapPriority {
    Low,
    Medium,
    High,
}

/// Estimated shortfall against one framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceGap {
    pub framework: String,
    pub coverage_percent: Percentage,
    pub missing_controls: Vec<String>,
    pub priority: GapPriority,
}

struct FrameworkProfile {
    id: &'static str,
    coverage: u8,
    missing: [&'static str; 3],
    priority: GapPriority,
}

const FRAMEWORKS: &[FrameworkProfile] = &[
    FrameworkProfile {
        id: "gdpr",
        coverage: 65,
        missing: [
            "Data Protection Impact Assessments",
            "Breach Notification Procedures",
            "Data Subject Rights Management",
        ],
        priority: GapPriority::High,
    },
    FrameworkProfile {
        id: "nis2",
        coverage: 45,
        missing: [
            "Supply Chain Security",
            "Incident Reporting (24h)",
            "Business Continuity Management",
        ],
        priority: GapPriority::High,
    },
    FrameworkProfile {
        id: "iso27001",
        coverage: 55,
        missing: [
            "ISMS Documentation",
            "Risk Treatment Plan",
            "Internal Audit Programme",
        ],
        priority: GapPriority::Medium,
    },
    FrameworkProfile {
        id: "pci-dss",
        coverage: 50,
        missing: [
            "Cardholder Data Encryption",
            "Network Segmentation",
            "Quarterly Vulnerability Scans",
        ],
        priority: GapPriority::High,
    },
    FrameworkProfile {
        id: "sox",
        coverage: 60,
        missing: [
            "IT General Controls",
            "Access Reviews",
            "Change Management Evidence",
        ],
        priority: GapPriority::Medium,
    },
    FrameworkProfile {
        id: "hipaa",
        coverage: 50,
        missing: [
            "PHI Access Controls",
            "Audit Logging",
            "Business Associate Agreements",
        ],
        priority: GapPriority::High,
    },
    FrameworkProfile {
        id: "cyber-essentials",
        coverage: 70,
        missing: [
            "Secure Configuration",
            "Patch Management",
            "Malware Protection",
        ],
        priority: GapPriority::Low,
    },
    FrameworkProfile {
        id: "nist",
        coverage: 55,
        missing: [
            "Asset Inventory",
            "Detection Capabilities",
            "Recovery Planning",
        ],
        priority: GapPriority::Medium,
    },
];

const FALLBACK: FrameworkProfile = FrameworkProfile {
    id: "",
    coverage: 50,
    missing: ["Security Framework", "Monitoring", "Documentation"],
    priority: GapPriority::Medium,
};

pub struct ComplianceGapAnalyzer;

impl ComplianceGapAnalyzer {
    /// One gap per selected framework, in selection order.
    pub fn analyze(responses: &ResponseSet) -> Vec<ComplianceGap> {
        responses
            .selected(ids::COMPLIANCE_NEEDS)
            .iter()
            .map(|framework| Self::gap_for(framework))
            .collect()
    }

    /// Table entry for a framework id, or the generic fallback.
    pub fn gap_for(framework: &str) -> ComplianceGap {
        let profile = FRAMEWORKS
            .iter()
            .find(|p| p.id == framework)
            .unwrap_or(&FALLBACK);
        ComplianceGap {
            framework: framework.to_string(),
            coverage_percent: Percentage::new(profile.coverage),
            missing_controls: profile.missing.iter().map(|m| m.to_string()).collect(),
            priority: profile.priority,
        }
    }
}
