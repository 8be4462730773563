//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for one assessment session.
///
/// Responses and lead data are always scoped to a single assessment id;
/// nothing recorded under one id is ever read while scoring another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(Uuid);

impl AssessmentId {
    /// Creates a new random AssessmentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an AssessmentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AssessmentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("assessment_id", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_id_new_is_unique() {
        assert_ne!(AssessmentId::new(), AssessmentId::new());
    }

    #[test]
    fn assessment_id_roundtrips_through_string() {
        let id = AssessmentId::new();
        let parsed: AssessmentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn assessment_id_rejects_garbage() {
        let result = "not-a-uuid".parse::<AssessmentId>();
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn assessment_id_serializes_as_plain_string() {
        let uuid = Uuid::parse_str("6f1c2a4e-8d2b-4c1e-9a77-0f3b5d1e2c44").unwrap();
        let id = AssessmentId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6f1c2a4e-8d2b-4c1e-9a77-0f3b5d1e2c44\"");
    }
}
