//! The server-computed metrics projection.
//!
//! `RiskMetrics` is a read-only aggregate over all risks, computed by the
//! backend and consumed by the dashboard. Every top-level field is optional
//! on the wire from the consumer's perspective; the dashboard merges the
//! decoded projection with fixed fallback constants (see
//! [`crate::dashboard`]) rather than validating it.

use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// Aggregate risk counts, computed server-side.
///
/// The consumer never mutates this projection; it only merges it
/// field-by-field with fallback constants for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Total number of risks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Number of risks with open status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_risks: Option<u64>,
    /// Number of risks with closed status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_risks: Option<u64>,
    /// Number of critical-severity risks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<u64>,
    /// Number of high-severity risks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<u64>,
    /// Number of medium-severity risks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<u64>,
    /// Number of low-severity risks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<u64>,
    /// Per-status counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_counts: Option<StatusCounts>,
    /// Most recently created risks, newest first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_risks: Option<Vec<RecentRisk>>,
}

/// One count per risk status.
///
/// Counts absent from the wire decode as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Risks in the open state.
    #[serde(default)]
    pub open: u64,
    /// Risks in the mitigated state.
    #[serde(default)]
    pub mitigated: u64,
    /// Risks in the accepted state.
    #[serde(default)]
    pub accepted: u64,
    /// Risks in the transferred state.
    #[serde(default)]
    pub transferred: u64,
    /// Risks in the closed state.
    #[serde(default)]
    pub closed: u64,
}

/// A single entry in the recent-risks list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentRisk {
    /// Risk identifier, used to build the detail route.
    pub id: u64,
    /// Risk title.
    pub title: String,
    /// Severity tier.
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_decodes_to_all_absent() {
        let metrics: RiskMetrics = serde_json::from_str("{}").unwrap();
        assert_eq!(metrics, RiskMetrics::default());
        assert!(metrics.total.is_none());
        assert!(metrics.status_counts.is_none());
        assert!(metrics.recent_risks.is_none());
    }

    #[test]
    fn test_full_projection_decodes() {
        let json = r#"{
            "total": 10,
            "open_risks": 6,
            "closed_risks": 4,
            "critical": 2,
            "high": 3,
            "medium": 3,
            "low": 2,
            "status_counts": {
                "open": 4, "mitigated": 3, "accepted": 1,
                "transferred": 0, "closed": 2
            },
            "recent_risks": [
                {"id": 1, "title": "Unauthorized System Access", "severity": "critical"}
            ]
        }"#;

        let metrics: RiskMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.total, Some(10));
        assert_eq!(metrics.status_counts.unwrap().transferred, 0);

        let recent = metrics.recent_risks.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].title, "Unauthorized System Access");
        assert_eq!(recent[0].severity, Severity::Critical);
    }

    #[test]
    fn test_status_counts_missing_fields_are_zero() {
        let counts: StatusCounts = serde_json::from_str(r#"{"open": 4}"#).unwrap();
        assert_eq!(counts.open, 4);
        assert_eq!(counts.mitigated, 0);
        assert_eq!(counts.closed, 0);
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let metrics = RiskMetrics {
            total: Some(3),
            ..RiskMetrics::default()
        };
        let json = serde_json::to_string(&metrics).unwrap();
        assert_eq!(json, r#"{"total":3}"#);
    }
}
