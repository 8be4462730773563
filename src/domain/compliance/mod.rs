//! Compliance module - framework gaps and the complexity predicate.

mod gap_analyzer;

pub use gap_analyzer::{
    is_compliance_complex, selected_framework_count, ComplianceGap, ComplianceGapAnalyzer,
    GapPriority, COMPLIANCE_COMPLEXITY_THRESHOLD,
};
