//! Lifecycle statuses for risks and treatments.
//!
//! # Examples
//!
//! ```
//! use risk_core::types::status::RiskStatus;
//!
//! let status: RiskStatus = "mitigated".parse().unwrap();
//! assert_eq!(status.as_str(), "mitigated");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// Lifecycle status of a risk record.
///
/// The wire encoding is the lowercase state name. The dashboard status
/// panel displays one count per state, in the order listed here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    /// Newly raised, not yet addressed.
    #[default]
    Open,

    /// A treatment has reduced the risk.
    Mitigated,

    /// The risk is consciously tolerated.
    Accepted,

    /// Responsibility moved to a third party.
    Transferred,

    /// No longer tracked.
    Closed,
}

impl RiskStatus {
    /// All states, in dashboard panel order.
    pub const ALL: [RiskStatus; 5] = [
        RiskStatus::Open,
        RiskStatus::Mitigated,
        RiskStatus::Accepted,
        RiskStatus::Transferred,
        RiskStatus::Closed,
    ];

    /// Returns the lowercase wire value for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Open => "open",
            RiskStatus::Mitigated => "mitigated",
            RiskStatus::Accepted => "accepted",
            RiskStatus::Transferred => "transferred",
            RiskStatus::Closed => "closed",
        }
    }

    /// Returns the panel label for this state.
    pub fn label(&self) -> &'static str {
        match self {
            RiskStatus::Open => "Open",
            RiskStatus::Mitigated => "Mitigated",
            RiskStatus::Accepted => "Accepted",
            RiskStatus::Transferred => "Transferred",
            RiskStatus::Closed => "Closed",
        }
    }
}

impl FromStr for RiskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(RiskStatus::Open),
            "mitigated" => Ok(RiskStatus::Mitigated),
            "accepted" => Ok(RiskStatus::Accepted),
            "transferred" => Ok(RiskStatus::Transferred),
            "closed" => Ok(RiskStatus::Closed),
            _ => Err(DomainError::UnknownRiskStatus(s.to_string())),
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a treatment action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentStatus {
    /// Defined but not started.
    #[default]
    Planned,

    /// Currently being carried out.
    InProgress,

    /// Finished.
    Completed,
}

impl TreatmentStatus {
    /// Returns the snake_case wire value for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TreatmentStatus::Planned => "planned",
            TreatmentStatus::InProgress => "in_progress",
            TreatmentStatus::Completed => "completed",
        }
    }
}

impl FromStr for TreatmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(TreatmentStatus::Planned),
            "in_progress" => Ok(TreatmentStatus::InProgress),
            "completed" => Ok(TreatmentStatus::Completed),
            _ => Err(DomainError::UnknownTreatmentStatus(s.to_string())),
        }
    }
}

impl fmt::Display for TreatmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
