//! Contact details captured before results are shown.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Lead-capture record. Stored verbatim; not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub job_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub captured_at: Timestamp,
}

impl LeadDetails {
    /// Placeholder stored when the respondent skips lead capture.
    pub fn anonymous() -> Self {
        Self {
            first_name: "Anonymous".to_string(),
            last_name: "User".to_string(),
            email: "anonymous@example.com".to_string(),
            company: "Not Provided".to_string(),
            job_title: "Not Provided".to_string(),
            phone: None,
            captured_at: Timestamp::now(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.email == "anonymous@example.com"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_placeholder_is_recognised() {
        let lead = LeadDetails::anonymous();
        assert!(lead.is_anonymous());
        assert_eq!(lead.company, "Not Provided");
    }

    #[test]
    fn phone_is_optional_on_the_wire() {
        let json = r#"{
            "firstName": "Priya",
            "lastName": "Shah",
            "email": "priya@example.org",
            "company": "Northwind",
            "jobTitle": "IT Director",
            "capturedAt": "2024-01-04T00:00:00Z"
        }"#;
        let lead: LeadDetails = serde_json::from_str(json).unwrap();
        assert!(lead.phone.is_none());
        assert!(!lead.is_anonymous());
    }
}
