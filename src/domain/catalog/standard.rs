//! The built-in question set.
//!
//! Ordering matters: the visibility resolver preserves it and the
//! questionnaire renders in it.

use super::ids::*;
use super::question::{AnswerOption, Condition, ImpactTier, Question, QuestionKind, SliderAnchor};
use ImpactTier::{Critical, High, Low, Medium};

fn opt(id: &str, label: &str, multiplier: f64, impact: ImpactTier, tooltip: &str) -> AnswerOption {
    AnswerOption::new(id, label, multiplier, impact).with_tooltip(tooltip)
}

fn anchor(id: &str, label: &str, value: f64, multiplier: f64, impact: ImpactTier, tooltip: &str) -> SliderAnchor {
    SliderAnchor {
        id: id.to_string(),
        label: label.to_string(),
        value,
        risk_multiplier: multiplier,
        risk_impact: impact,
        tooltip: Some(tooltip.to_string()),
    }
}

fn single(options: Vec<AnswerOption>) -> QuestionKind {
    QuestionKind::SingleSelect { options }
}

fn multi(options: Vec<AnswerOption>) -> QuestionKind {
    QuestionKind::MultiSelect { options }
}

fn not_for_novices() -> Vec<Condition> {
    vec![Condition::equals(USER_PROFICIENCY, "novice")]
}

/// Every question of the standard assessment, in presentation order.
pub(super) fn questions() -> Vec<Question> {
    vec![
        Question::new(
            CURRENCY_PREFERENCE,
            "What currency would you like to see pricing in?",
            "All pricing estimates will be shown in your preferred currency.",
            0.0,
            single(vec![
                opt("gbp", "British Pounds (£)", 0.0, Low, "UK Pounds Sterling"),
                opt("usd", "US Dollars ($)", 0.0, Low, "United States Dollars"),
                opt("eur", "Euros (€)", 0.0, Low, "European Union Euros"),
                opt("cad", "Canadian Dollars (C$)", 0.0, Low, "Canadian Dollars"),
                opt("aud", "Australian Dollars (A$)", 0.0, Low, "Australian Dollars"),
            ]),
        )
        .novice_friendly(),
        Question::new(
            USER_PROFICIENCY,
            "How would you describe your cyber security knowledge?",
            "This helps us tailor the assessment complexity to your expertise level.",
            0.0,
            single(vec![
                opt("novice", "I'm new to cyber security", 0.0, Low, "You'll see essential, high-level questions focused on business impact"),
                opt("intermediate", "I have some experience", 0.0, Low, "You'll see most questions, balanced between technical and business"),
                opt("expert", "I'm a cyber security professional", 0.0, Low, "You'll see all questions, including deep technical detail"),
            ]),
        )
        .novice_friendly(),
        Question::new(
            CURRENT_SECURITY_CONTROLS,
            "Current Security Controls",
            "Which security controls do you currently have in place?",
            2.0,
            multi(vec![
                opt("endpoint-protection", "Endpoint Protection (Antivirus/EDR)", -0.3, Low, "Reduces malware and endpoint threats"),
                opt("firewall-configured", "Properly Configured Firewall", -0.2, Low, "Network perimeter protection"),
                opt("mfa-enabled", "Multi-Factor Authentication", -0.4, Low, "Significantly reduces account compromise"),
                opt("backup-strategy", "Regular Backups (Tested)", -0.3, Low, "Critical for ransomware recovery"),
                opt("patch-management", "Automated Patch Management", -0.3, Low, "Reduces vulnerability exposure"),
                opt("security-monitoring", "Security Monitoring/SIEM", -0.4, Low, "Early threat detection"),
                opt("employee-training", "Regular Security Training", -0.2, Low, "Reduces human error risks"),
                opt("incident-response-plan", "Incident Response Plan", -0.2, Low, "Faster recovery from incidents"),
                opt("vulnerability-scanning", "Regular Vulnerability Scanning", -0.3, Low, "Proactive vulnerability management"),
                opt("email-security", "Advanced Email Security", -0.2, Low, "Blocks phishing and malware"),
                opt("network-segmentation", "Network Segmentation", -0.3, Low, "Limits breach impact"),
                opt("privileged-access", "Privileged Access Management", -0.4, Low, "Controls admin access"),
                opt("minimal-controls", "Minimal/Basic Controls Only", 1.5, Critical, "High risk exposure"),
            ]),
        )
        .with_tooltip("Helps us understand your existing security posture more accurately")
        .novice_friendly(),
        Question::new(
            DATA_SENSITIVITY,
            "Data Sensitivity & Volume",
            "What types of sensitive data does your organisation handle?",
            1.8,
            multi(vec![
                opt("customer-pii", "Customer Personal Data (PII)", 1.4, High, "GDPR and privacy law implications"),
                opt("payment-data", "Payment Card Data", 1.8, Critical, "PCI DSS compliance required"),
                opt("health-records", "Health/Medical Records", 1.9, Critical, "HIPAA and strict privacy laws"),
                opt("financial-records", "Financial Records", 1.6, High, "Financial regulations and SOX"),
                opt("intellectual-property", "Intellectual Property/Trade Secrets", 1.5, High, "Competitive advantage at risk"),
                opt("government-data", "Government/Classified Data", 2.0, Critical, "National security implications"),
                opt("employee-data", "Employee HR Data", 1.2, Medium, "Employment law and privacy"),
                opt("business-confidential", "Business Confidential Data", 1.1, Medium, "Competitive information"),
                opt("public-data-only", "Mostly Public Data", 0.7, Low, "Lower sensitivity profile"),
            ]),
        )
        .with_tooltip("Different data types have different risk profiles and regulatory requirements")
        .novice_friendly(),
        Question::new(
            INFRASTRUCTURE_COMPLEXITY,
            "IT Infrastructure Complexity",
            "Describe your current IT infrastructure setup",
            1.6,
            multi(vec![
                opt("cloud-native", "Cloud-Native (AWS/Azure/GCP)", 1.0, Medium, "Modern but needs cloud security expertise"),
                opt("hybrid-cloud", "Hybrid Cloud Environment", 1.3, Medium, "Complex integration challenges"),
                opt("on-premise-modern", "Modern On-Premise Infrastructure", 1.1, Medium, "Controlled but needs maintenance"),
                opt("legacy-systems", "Legacy Systems (10+ years)", 1.8, Critical, "High risk from outdated security"),
                opt("mixed-environment", "Mixed Legacy and Modern", 1.4, High, "Integration and compatibility issues"),
                opt("saas-heavy", "SaaS-Heavy Environment", 1.1, Medium, "Third-party dependency risks"),
                opt("iot-devices", "IoT/Connected Devices", 1.5, High, "Expanded attack surface"),
                opt("mobile-first", "Mobile-First Operations", 1.2, Medium, "Mobile security challenges"),
            ]),
        )
        .with_tooltip("Infrastructure complexity directly impacts security risk and implementation approach")
        .hide_if(not_for_novices()),
        Question::new(
            SECURITY_INCIDENTS,
            "Previous Security Incidents",
            "Has your organisation experienced any security incidents in the past 2 years?",
            2.2,
            multi(vec![
                opt("no-incidents", "No Known Security Incidents", 0.8, Low, "Good track record or undetected issues"),
                opt("phishing-attempts", "Phishing/Email Attacks", 1.3, Medium, "Common attack vector, needs training"),
                opt("malware-infection", "Malware/Virus Infections", 1.5, High, "Endpoint security gaps"),
                opt("data-breach", "Data Breach/Unauthorized Access", 2.0, Critical, "Serious security failure"),
                opt("ransomware-attack", "Ransomware Attack", 2.2, Critical, "Critical business disruption"),
                opt("insider-incident", "Insider Threat Incident", 1.7, High, "Internal controls needed"),
                opt("ddos-attack", "DDoS/Service Disruption", 1.4, Medium, "Availability and resilience issues"),
                opt("supply-chain-compromise", "Vendor/Supply Chain Compromise", 1.8, High, "Third-party risk management needed"),
                opt("unsure-incidents", "Unsure/No Monitoring in Place", 1.6, High, "Blind spots in security monitoring"),
            ]),
        )
        .with_tooltip("Past incidents indicate current vulnerabilities and help prioritise defenses")
        .novice_friendly(),
        Question::new(
            COMPANY_SIZE_REVENUE,
            "Company Size & Annual Revenue",
            "Help us understand your organization's scale for accurate risk assessment",
            1.3,
            single(vec![
                opt("micro", "Micro Business (<£100k revenue)", 0.7, Low, "Lower profile but limited security resources"),
                opt("small", "Small Business (£100k-£2M)", 0.9, Medium, "Growing visibility with basic security needs"),
                opt("medium", "Medium Business (£2M-£25M)", 1.2, Medium, "Attractive target with complex requirements"),
                opt("large", "Large Business (£25M-£100M)", 1.5, High, "High-value target with regulatory scrutiny"),
                opt("enterprise", "Enterprise (£100M+)", 1.8, Critical, "Prime target with complex global operations"),
            ]),
        )
        .with_tooltip("Company size affects threat exposure, regulatory requirements, and available resources")
        .novice_friendly(),
        Question::new(
            GEOGRAPHIC_OPERATIONS,
            "Geographic Operations",
            "Where does your organization operate?",
            1.2,
            multi(vec![
                opt("uk-only", "UK Only", 1.0, Medium, "UK regulations (GDPR, NIS2, Cyber Essentials)"),
                opt("eu-operations", "European Union", 1.3, Medium, "GDPR, NIS2, and country-specific requirements"),
                opt("us-operations", "United States", 1.4, High, "State privacy laws, sector regulations"),
                opt("apac-operations", "Asia-Pacific", 1.2, Medium, "Diverse regulatory landscape"),
                opt("global-operations", "Global Operations", 1.6, High, "Complex multi-jurisdictional compliance"),
                opt("emerging-markets", "Emerging Markets", 1.5, High, "Higher threat environment"),
            ]),
        )
        .with_tooltip("Different regions have different regulatory requirements and threat landscapes")
        .hide_if(not_for_novices()),
        Question::new(
            ORG_PROFILE,
            "Organisation Profile & Scale",
            "Help us understand your organisation structure and operational scale",
            1.2,
            multi(vec![
                opt("startup", "Startup (1-50 employees)", 0.8, Low, "Smaller attack surface but limited resources"),
                opt("sme", "SME (51-250 employees)", 1.0, Medium, "Growing complexity needs structure"),
                opt("enterprise", "Enterprise (250+ employees)", 1.4, High, "Complex infrastructure with many attack vectors"),
                opt("multinational", "Multinational Corporation", 1.8, Critical, "Global ops face diverse compliance requirements"),
                opt("remote-first", "Remote-first Organisation", 1.3, Medium, "Distributed workforce adds complexity"),
                opt("hybrid-model", "Hybrid Work Model", 1.1, Medium, "Mixed environments need broad controls"),
            ]),
        )
        .with_tooltip("Organisation size and complexity directly impact cyber security requirements and threat exposure")
        .novice_friendly(),
        Question::new(
            TECHNOLOGY_STACK,
            "Primary Technology Stack",
            "What technology ecosystem does your organization primarily use?",
            1.4,
            single(vec![
                opt("microsoft-stack", "Microsoft Ecosystem (Office 365, Azure, Windows)", 1.0, Medium, "Integrated security but high-value target"),
                opt("google-workspace", "Google Workspace & Cloud", 0.9, Low, "Strong built-in security features"),
                opt("aws-ecosystem", "Amazon Web Services Ecosystem", 1.1, Medium, "Powerful but complex security model"),
                opt("open-source-heavy", "Open Source Heavy", 1.3, Medium, "Flexible but requires security expertise"),
                opt("saas-first", "SaaS-First Approach", 1.2, Medium, "Third-party dependency risks"),
                opt("custom-developed", "Custom/In-House Development", 1.4, High, "Full control but security responsibility"),
                opt("legacy-proprietary", "Legacy Proprietary Systems", 1.8, Critical, "Limited security updates and support"),
            ]),
        )
        .with_tooltip("Technology choices affect security architecture and threat exposure")
        .hide_if(not_for_novices()),
        Question::new(
            INDUSTRY_VERTICAL,
            "Industry Vertical",
            "Select your primary industry sector",
            1.5,
            single(vec![
                opt("financial", "Financial Services", 2.0, Critical, "High-value target with strict regulations"),
                opt("healthcare", "Healthcare & Life Sciences", 1.9, Critical, "Patient data under GDPR & HIPAA"),
                opt("government", "Government & Public Sector", 1.8, Critical, "National security & public data"),
                opt("technology", "Technology & Software", 1.6, High, "IP protection & supply chain risks"),
                opt("manufacturing", "Manufacturing & Industrial", 1.4, High, "OT/IT convergence risks"),
                opt("retail", "Retail & E-commerce", 1.3, Medium, "Customer data & payment processing"),
                opt("education", "Education", 1.1, Medium, "Student data & research IP"),
                opt("professional", "Professional Services", 1.0, Medium, "Client confidentiality focus"),
                opt("other", "Other", 1.0, Medium, "Sector-specific risk model"),
            ]),
        )
        .with_tooltip("Different industries face unique threat profiles and regulatory requirements")
        .novice_friendly(),
        Question::new(
            INDUSTRY_SPECIFIC_THREATS,
            "Industry-Specific Security Concerns",
            "Which industry-specific threats are most concerning for your organization?",
            1.5,
            multi(vec![
                opt("financial-fraud", "Financial Fraud & Money Laundering", 2.0, Critical, "Direct financial impact and regulatory scrutiny"),
                opt("trading-systems", "Trading System Manipulation", 1.9, Critical, "Market manipulation and systemic risk"),
                opt("patient-data-breach", "Patient Data Breaches", 1.8, Critical, "HIPAA violations and patient privacy"),
                opt("medical-device-security", "Medical Device Security", 1.7, Critical, "Life-critical system vulnerabilities"),
                opt("industrial-espionage", "Industrial Espionage", 1.6, High, "Trade secret and IP theft"),
                opt("operational-disruption", "Production Line Disruption", 1.8, Critical, "Physical safety and business continuity"),
                opt("source-code-theft", "Source Code & IP Theft", 1.7, High, "Competitive advantage loss"),
                opt("supply-chain-attacks", "Software Supply Chain Attacks", 1.9, Critical, "Downstream customer impact"),
                opt("payment-fraud", "Payment Processing Fraud", 1.6, High, "PCI compliance and customer trust"),
                opt("customer-data-theft", "Customer Database Theft", 1.5, High, "GDPR fines and reputation damage"),
                opt("client-confidentiality", "Client Confidentiality Breaches", 1.4, Medium, "Professional liability and trust"),
                opt("regulatory-reporting", "Regulatory Reporting Integrity", 1.3, Medium, "Compliance and audit requirements"),
                opt("business-email-compromise", "Business Email Compromise", 1.4, High, "Financial fraud via email"),
                opt("cloud-misconfigurations", "Cloud Security Misconfigurations", 1.3, Medium, "Data exposure in cloud services"),
            ]),
        )
        .with_tooltip("Industry-specific threats require specialized security controls and expertise")
        .show_if(vec![Condition::excludes(INDUSTRY_VERTICAL, "other")]),
        Question::new(
            CYBER_MATURITY,
            "Cyber Security Programme Maturity",
            "How would you describe your organisation's current cyber security programme?",
            1.8,
            single(vec![
                opt("ad-hoc", "Ad-hoc (No formal programme)", 2.8, Critical, "Individual tools without coordination"),
                opt("basic", "Basic (Essential tools only)", 2.3, Critical, "Antivirus, firewall, basic controls"),
                opt("developing", "Developing (Policies + procedures)", 1.9, High, "Documented processes, regular updates"),
                opt("managed", "Managed (Structured programme)", 1.4, Medium, "Formal governance, monitoring, metrics"),
                opt("advanced", "Advanced (Proactive defence)", 1.0, Low, "Threat hunting, advanced analytics"),
                opt("optimized", "Optimised (Continuous improvement)", 0.7, Low, "Mature programme with automation"),
                opt("uncertain", "Uncertain / Needs assessment", 2.4, High, "Current state unknown"),
            ]),
        )
        .with_tooltip("This helps us understand your starting point and recommend appropriate next steps")
        .novice_friendly(),
        Question::new(
            SECURITY_TEAM_CAPABILITY,
            "Security Team & Expertise",
            "What internal security capability does your organization have?",
            1.4,
            single(vec![
                opt("no-security-team", "No Dedicated Security Personnel", 2.0, Critical, "Requires fully managed services"),
                opt("part-time-security", "Part-time/Shared Security Responsibility", 1.6, High, "Limited security focus and expertise"),
                opt("single-security-person", "One Dedicated Security Person", 1.3, Medium, "Single point of failure, needs support"),
                opt("small-security-team", "Small Security Team (2-5 people)", 1.0, Low, "Good foundation, may need specialization"),
                opt("mature-security-team", "Mature Security Team (5+ specialists)", 0.8, Low, "Strong internal capability"),
                opt("ciso-led-team", "CISO-Led Security Organization", 0.6, Low, "Executive-level security leadership"),
            ]),
        )
        .with_tooltip("Internal capability affects service delivery approach and support requirements")
        .hide_if(not_for_novices()),
        Question::new(
            COMPLIANCE_NEEDS,
            "Compliance requirements",
            "Select all regulatory frameworks that apply to your organisation",
            1.4,
            multi(vec![
                opt("gdpr", "GDPR", 1.6, High, "EU data law with heavy fines"),
                opt("nis2", "NIS2 Directive", 1.8, High, "Critical infrastructure requirements"),
                opt("iso27001", "ISO 27001", 1.2, Medium, "International standard"),
                opt("pci-dss", "PCI DSS", 1.7, High, "Payment card industry standard"),
                opt("sox", "SOX", 1.5, Medium, "Financial reporting controls"),
                opt("hipaa", "HIPAA", 1.8, High, "US healthcare data law"),
                opt("cyber-essentials", "Cyber Essentials", 1.1, Low, "UK government certification"),
                opt("nist", "NIST Framework", 1.3, Medium, "Widely adopted framework"),
                opt("none", "No specific requirements", 1.0, Low, "Use best practices & risk management"),
            ]),
        )
        .with_tooltip("Drives specific controls and audits")
        .hide_if(not_for_novices()),
        Question::new(
            AUDIT_FREQUENCY,
            "Audit & Compliance Frequency",
            "How often does your organization undergo security or compliance audits?",
            1.3,
            single(vec![
                opt("no-audits", "No Regular Audits", 0.9, Low, "Lower compliance overhead"),
                opt("annual-audits", "Annual Compliance Audits", 1.2, Medium, "Standard compliance requirements"),
                opt("quarterly-reviews", "Quarterly Compliance Reviews", 1.4, Medium, "High regulatory scrutiny"),
                opt("continuous-monitoring", "Continuous Regulatory Monitoring", 1.6, High, "Critical infrastructure or high-risk sector"),
                opt("multiple-regulators", "Multiple Regulatory Bodies", 1.8, High, "Complex overlapping requirements"),
            ]),
        )
        .with_tooltip("Audit frequency affects ongoing compliance overhead and documentation requirements")
        .optional()
        .show_if(vec![Condition::excludes(COMPLIANCE_NEEDS, "none")]),
        Question::new(
            BUDGET_FLEXIBILITY,
            "Investment Flexibility",
            "How flexible is your cyber security investment approach?",
            1.0,
            QuestionKind::Slider {
                anchors: vec![
                    anchor("conservative", "Conservative", 25.0, 1.4, Medium, "Gradual rollout with ROI validation each phase"),
                    anchor("balanced", "Balanced", 50.0, 1.0, Low, "Balance between cost & risk mitigation"),
                    anchor("aggressive", "Aggressive", 75.0, 0.7, Low, "Rapid deployment of comprehensive controls"),
                    anchor("unlimited", "Risk-driven", 100.0, 0.5, Low, "Budget driven by risk appetite"),
                ],
            },
        )
        .with_tooltip("Helps us recommend appropriate service levels")
        .novice_friendly(),
        Question::new(
            ANNUAL_SECURITY_BUDGET,
            "Annual Security Budget",
            "What is your approximate annual cyber security budget?",
            1.1,
            single(vec![
                opt("under-10k", "Under £10,000", 1.4, Medium, "Limited budget requires focused priorities"),
                opt("10k-50k", "£10,000 - £50,000", 1.2, Low, "Good foundation budget for SMEs"),
                opt("50k-100k", "£50,000 - £100,000", 1.0, Low, "Comprehensive security programme possible"),
                opt("100k-500k", "£100,000 - £500,000", 0.9, Low, "Enterprise-grade security capabilities"),
                opt("500k-1m", "£500,000 - £1,000,000", 0.8, Low, "Advanced security with dedicated resources"),
                opt("over-1m", "Over £1,000,000", 0.7, Low, "Mature security organization possible"),
                opt("no-budget", "No Dedicated Security Budget", 1.8, High, "High risk due to resource constraints"),
            ]),
        )
        .with_tooltip("Budget constraints help us recommend appropriate service tiers and implementation approaches")
        .novice_friendly(),
        Question::new(
            URGENCY_TIMELINE,
            "Implementation timeline",
            "What's driving your cyber security initiative timeline?",
            1.3,
            multi(vec![
                opt("immediate-threat", "Immediate threat response", 2.0, Critical, "Active incident demands urgent action"),
                opt("compliance-deadline", "Compliance deadline", 1.8, High, "Fixed audit or regulatory deadline"),
                opt("board-mandate", "Board mandate", 1.5, Medium, "Executive directive for security improvement"),
                opt("growth-scaling", "Business growth/scaling", 1.2, Medium, "Support expansion with security foundation"),
                opt("contract-requirement", "Contract requirement", 1.4, Medium, "Security clauses in client contracts"),
                opt("strategic-planning", "Strategic planning", 1.0, Low, "Planned roadmap integration"),
                opt("no-urgency", "No specific urgency", 0.8, Low, "Enhancement without time pressure"),
            ]),
        )
        .with_tooltip("Helps prioritise services and onboarding approach")
        .novice_friendly(),
        Question::new(
            THREAT_PRIORITIES,
            "Top Security Concerns",
            "Which security threats are you most concerned about? (Select up to 4 that worry you most)",
            1.6,
            multi(vec![
                opt("ransomware", "Ransomware Attacks", 2.1, Critical, "Business shutdown, data encryption, ransom demands"),
                opt("data-breach", "Data Breaches & Privacy Violations", 1.9, Critical, "Customer data theft, GDPR fines, reputation damage"),
                opt("phishing", "Phishing & Email Attacks", 1.6, High, "Employee credential theft, initial access vector"),
                opt("insider-threat", "Insider Threats", 1.7, High, "Malicious employees, negligent data handling"),
                opt("supply-chain", "Vendor/Supply Chain Attacks", 1.8, High, "Third-party compromises affecting your systems"),
                opt("cloud-security", "Cloud Security Breaches", 1.5, High, "Misconfigured cloud services, data exposure"),
                opt("regulatory-compliance", "Regulatory Non-Compliance", 1.4, Medium, "Fines, legal action, business restrictions"),
                opt("business-disruption", "Business Continuity Disruption", 1.3, Medium, "System outages, productivity loss"),
                opt("financial-fraud", "Financial Fraud & Theft", 1.6, High, "Payment fraud, financial system compromise"),
                opt("ip-theft", "Intellectual Property Theft", 1.4, Medium, "Trade secrets, competitive advantage loss"),
                opt("reputation-damage", "Brand & Reputation Damage", 1.2, Medium, "Customer trust loss, market impact"),
                opt("advanced-threats", "Advanced Persistent Threats (APTs)", 1.9, Critical, "Sophisticated, long-term attacks"),
            ]),
        )
        .with_tooltip("Helps us prioritise the most relevant security controls for your threat landscape")
        .hide_if(not_for_novices()),
        Question::new(
            DELIVERY_PREFERENCES,
            "Service Delivery Preferences",
            "How would you prefer to receive cyber security services?",
            1.1,
            multi(vec![
                opt("fully-managed", "Fully managed/outsourced", 0.8, Low, "Complete operations managed by Hanco Cyber"),
                opt("hybrid-support", "Hybrid (in-house + external)", 0.9, Low, "Mix of internal team and external expertise"),
                opt("white-label", "White-label services", 1.0, Medium, "Services delivered under your brand"),
                opt("consulting-advisory", "Consulting & advisory", 1.2, Medium, "Strategic guidance for your internal team"),
                opt("staff-augmentation", "Staff augmentation", 1.1, Low, "Embed Hanco experts within your team"),
                opt("project-based", "Project-based delivery", 1.0, Medium, "Defined deliverables and timelines"),
            ]),
        )
        .with_tooltip("Delivery model shapes implementation approach and ongoing management")
        .novice_friendly(),
        Question::new(
            ENTERPRISE_COMPLEXITY,
            "Enterprise complexity factors",
            "Select all factors that apply to your enterprise environment",
            1.4,
            multi(vec![
                opt("multi-cloud", "Multi-cloud infrastructure", 1.3, Medium, "Complex cloud security management"),
                opt("legacy-systems", "Legacy systems integration", 1.6, High, "Older systems with security limitations"),
                opt("mergers-acquisitions", "Recent M&A activity", 1.5, High, "Integration challenges and security gaps"),
                opt("global-operations", "Global operations", 1.4, Medium, "Multiple jurisdictions and regulations"),
                opt("critical-infrastructure", "Critical infrastructure", 1.8, Critical, "High-impact operational technology"),
            ]),
        )
        .with_tooltip("Enterprise environments have unique security challenges")
        .show_if(vec![
            Condition::includes(ORG_PROFILE, "enterprise"),
            Condition::includes(ORG_PROFILE, "multinational"),
        ]),
        Question::new(
            STARTUP_PRIORITIES,
            "Startup Security Priorities",
            "What are your main security concerns as a growing startup?",
            1.2,
            multi(vec![
                opt("investor-requirements", "Investor security requirements", 1.2, Medium, "Due diligence and compliance for funding"),
                opt("customer-trust", "Building customer trust", 1.1, Low, "Security as competitive advantage"),
                opt("rapid-scaling", "Rapid scaling challenges", 1.3, Medium, "Security keeping pace with growth"),
                opt("limited-budget", "Limited security budget", 1.4, Medium, "Cost-effective security solutions"),
                opt("regulatory-readiness", "Regulatory readiness", 1.2, Low, "Preparing for compliance requirements"),
            ]),
        )
        .with_tooltip("Startups have unique security needs and constraints")
        .show_if(vec![Condition::includes(ORG_PROFILE, "startup")]),
    ]
}
