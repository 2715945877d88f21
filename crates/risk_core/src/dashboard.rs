//! Dashboard display model and fallback merge.
//!
//! The dashboard never renders the raw [`RiskMetrics`] projection directly.
//! It resolves a [`DashboardModel`] by starting from a fixed set of fallback
//! constants and overwriting each field with the corresponding server value
//! only when that value is present and non-zero.
//!
//! Zero counts fall back as well; presence alone is not enough. Whether a
//! real zero should be allowed to win over its fallback constant is an open
//! product question (see DESIGN.md) and must not be changed without
//! sign-off, so the rule is kept exactly as shipped.
//!
//! # Examples
//!
//! ```
//! use risk_core::dashboard::DashboardModel;
//! use risk_core::types::RiskMetrics;
//!
//! let raw = RiskMetrics {
//!     total: Some(42),
//!     ..RiskMetrics::default()
//! };
//! let model = DashboardModel::resolve(&raw);
//! assert_eq!(model.total_risks, 42);
//! // Absent fields resolve to their fallback constants.
//! assert_eq!(model.critical, 2);
//! ```

use crate::types::{RecentRisk, RiskMetrics, RiskStatus, Severity, StatusCounts};

/// Fallback placeholder values used when the projection is incomplete.
pub mod fallback {
    use super::{RecentRisk, Severity, StatusCounts};

    /// Fallback total risk count.
    pub const TOTAL: u64 = 10;
    /// Fallback open risk count.
    pub const OPEN_RISKS: u64 = 6;
    /// Fallback closed risk count.
    pub const CLOSED_RISKS: u64 = 4;
    /// Fallback critical-severity count.
    pub const CRITICAL: u64 = 2;
    /// Fallback high-severity count.
    pub const HIGH: u64 = 3;
    /// Fallback medium-severity count.
    pub const MEDIUM: u64 = 3;
    /// Fallback low-severity count.
    pub const LOW: u64 = 2;

    /// Fallback per-status counts.
    pub const STATUS_COUNTS: StatusCounts = StatusCounts {
        open: 4,
        mitigated: 3,
        accepted: 1,
        transferred: 0,
        closed: 2,
    };

    /// Fallback recent-risks list.
    pub fn recent_risks() -> Vec<RecentRisk> {
        vec![
            RecentRisk {
                id: 1,
                title: "Unauthorized System Access".to_string(),
                severity: Severity::Critical,
            },
            RecentRisk {
                id: 2,
                title: "Data Breach".to_string(),
                severity: Severity::Critical,
            },
            RecentRisk {
                id: 3,
                title: "Non-compliance with GDPR".to_string(),
                severity: Severity::High,
            },
        ]
    }
}

/// Fully resolved counts ready for rendering.
///
/// Computed fresh from the raw projection on every dashboard mount and
/// discarded on unmount.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    /// Total risk count (top-line counter).
    pub total_risks: u64,
    /// Open risk count (top-line counter).
    pub open_risks: u64,
    /// Closed risk count (top-line counter).
    pub closed_risks: u64,
    /// Critical-severity card value.
    pub critical: u64,
    /// High-severity card value.
    pub high: u64,
    /// Medium-severity card value.
    pub medium: u64,
    /// Low-severity card value.
    pub low: u64,
    /// Status panel counts.
    pub status_counts: StatusCounts,
    /// Recent-risks list, newest first.
    pub recent_risks: Vec<RecentRisk>,
}

/// Server value wins only when present and non-zero.
fn or_fallback(value: Option<u64>, fallback: u64) -> u64 {
    match value {
        Some(v) if v != 0 => v,
        _ => fallback,
    }
}

impl DashboardModel {
    /// Resolve a display model from the raw projection.
    ///
    /// Each numeric field takes the server value when present and non-zero,
    /// else its fallback constant. `status_counts` and `recent_risks` are
    /// substituted wholesale when absent; counts inside a present
    /// `status_counts` already decode missing entries as zero.
    pub fn resolve(raw: &RiskMetrics) -> Self {
        Self {
            total_risks: or_fallback(raw.total, fallback::TOTAL),
            open_risks: or_fallback(raw.open_risks, fallback::OPEN_RISKS),
            closed_risks: or_fallback(raw.closed_risks, fallback::CLOSED_RISKS),
            critical: or_fallback(raw.critical, fallback::CRITICAL),
            high: or_fallback(raw.high, fallback::HIGH),
            medium: or_fallback(raw.medium, fallback::MEDIUM),
            low: or_fallback(raw.low, fallback::LOW),
            status_counts: raw.status_counts.unwrap_or(fallback::STATUS_COUNTS),
            recent_risks: raw
                .recent_risks
                .clone()
                .unwrap_or_else(fallback::recent_risks),
        }
    }

    /// Value of the combined Critical/High top-line counter.
    ///
    /// Always the sum of the two resolved card values, never the raw server
    /// sum; if either side was substituted, the substituted value is summed.
    pub fn critical_high(&self) -> u64 {
        self.critical + self.high
    }

    /// Count shown in the status panel for one state.
    pub fn status_count(&self, status: RiskStatus) -> u64 {
        match status {
            RiskStatus::Open => self.status_counts.open,
            RiskStatus::Mitigated => self.status_counts.mitigated,
            RiskStatus::Accepted => self.status_counts.accepted,
            RiskStatus::Transferred => self.status_counts.transferred,
            RiskStatus::Closed => self.status_counts.closed,
        }
    }

    /// Card value for one severity tier.
    pub fn severity_count(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}
