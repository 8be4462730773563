//! Question ids the engine's rules refer to by name.

pub const CURRENCY_PREFERENCE: &str = "currency-preference";
pub const USER_PROFICIENCY: &str = "user-proficiency";
pub const CURRENT_SECURITY_CONTROLS: &str = "current-security-controls";
pub const DATA_SENSITIVITY: &str = "data-sensitivity";
pub const INFRASTRUCTURE_COMPLEXITY: &str = "infrastructure-complexity";
pub const SECURITY_INCIDENTS: &str = "security-incidents";
pub const COMPANY_SIZE_REVENUE: &str = "company-size-revenue";
pub const GEOGRAPHIC_OPERATIONS: &str = "geographic-operations";
pub const ORG_PROFILE: &str = "org-profile";
pub const TECHNOLOGY_STACK: &str = "technology-stack";
pub const INDUSTRY_VERTICAL: &str = "industry-vertical";
pub const INDUSTRY_SPECIFIC_THREATS: &str = "industry-specific-threats";
pub const CYBER_MATURITY: &str = "cyber-maturity";
pub const SECURITY_TEAM_CAPABILITY: &str = "security-team-capability";
pub const COMPLIANCE_NEEDS: &str = "compliance-needs";
pub const AUDIT_FREQUENCY: &str = "audit-frequency";
pub const BUDGET_FLEXIBILITY: &str = "budget-flexibility";
pub const ANNUAL_SECURITY_BUDGET: &str = "annual-security-budget";
pub const URGENCY_TIMELINE: &str = "urgency-timeline";
pub const THREAT_PRIORITIES: &str = "threat-priorities";
pub const DELIVERY_PREFERENCES: &str = "delivery-preferences";
pub const ENTERPRISE_COMPLEXITY: &str = "enterprise-complexity";
pub const STARTUP_PRIORITIES: &str = "startup-priorities";

/// Questions that render before any answer exists and are never filtered.
pub const BOOTSTRAP_QUESTIONS: [&str; 2] = [CURRENCY_PREFERENCE, USER_PROFICIENCY];
