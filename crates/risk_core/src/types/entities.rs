//! Risk and treatment entities.
//!
//! Entities are owned and persisted by the backend; the client holds only
//! transient, request-scoped copies decoded from responses. Identifiers and
//! timestamps are assigned server-side, so create/update payloads carry the
//! writable fields only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::severity::Severity;
use super::status::{RiskStatus, TreatmentStatus};

/// A tracked hazard record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    /// Backend-assigned identifier.
    pub id: u64,
    /// Short display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Organisational category (e.g. "Security", "Compliance").
    pub category: String,
    /// Severity tier.
    pub severity: Severity,
    /// Lifecycle status.
    pub status: RiskStatus,
    /// Creation timestamp, assigned on first write.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Writable fields of a risk, used for create and update calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRisk {
    /// Short display title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Organisational category.
    #[serde(default)]
    pub category: String,
    /// Severity tier.
    pub severity: Severity,
    /// Lifecycle status; new risks default to open.
    #[serde(default)]
    pub status: RiskStatus,
}

/// A mitigation action associated with exactly one risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    /// Backend-assigned identifier.
    pub id: u64,
    /// Identifier of the owning risk.
    pub risk_id: u64,
    /// What the treatment does.
    pub description: String,
    /// Progress status.
    pub status: TreatmentStatus,
    /// Creation timestamp, assigned on first write.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Writable fields of a treatment, used for create and update calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTreatment {
    /// What the treatment does.
    pub description: String,
    /// Progress status; new treatments default to planned.
    #[serde(default)]
    pub status: TreatmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_json_round_trip() {
        let json = r#"{
            "id": 7,
            "title": "Data Breach",
            "description": "Customer PII exposed via misconfigured bucket",
            "category": "Security",
            "severity": "critical",
            "status": "open",
            "created_at": "2025-11-03T09:15:00Z",
            "updated_at": "2025-11-03T09:15:00Z"
        }"#;

        let risk: Risk = serde_json::from_str(json).unwrap();
        assert_eq!(risk.id, 7);
        assert_eq!(risk.severity, Severity::Critical);
        assert_eq!(risk.status, RiskStatus::Open);

        let back = serde_json::to_value(&risk).unwrap();
        assert_eq!(back["severity"], "critical");
        assert_eq!(back["status"], "open");
    }

    #[test]
    fn test_new_risk_defaults() {
        let json = r#"{"title": "Phishing campaign", "severity": "high"}"#;
        let new_risk: NewRisk = serde_json::from_str(json).unwrap();

        assert_eq!(new_risk.status, RiskStatus::Open);
        assert!(new_risk.description.is_empty());
        assert!(new_risk.category.is_empty());
    }

    #[test]
    fn test_new_treatment_defaults_to_planned() {
        let json = r#"{"description": "Rotate credentials"}"#;
        let new_treatment: NewTreatment = serde_json::from_str(json).unwrap();

        assert_eq!(new_treatment.status, TreatmentStatus::Planned);
    }
}
