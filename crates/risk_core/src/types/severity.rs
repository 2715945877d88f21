//! Severity tiers for risk records.
//!
//! This module provides the four-tier severity scale used across the
//! backend, the API client, and the dashboard, with its lowercase wire
//! encoding.
//!
//! # Examples
//!
//! ```
//! use risk_core::types::severity::Severity;
//!
//! let critical = Severity::Critical;
//! assert_eq!(critical.as_str(), "critical");
//!
//! let high: Severity = "HIGH".parse().unwrap();
//! assert_eq!(high, Severity::High);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// Four-tier severity scale for risks.
///
/// Ordered from most to least severe. The wire encoding is the lowercase
/// tier name; each tier carries a fixed visual encoding on the dashboard
/// (critical = error-strong, high = error-light, medium = warning,
/// low = success).
///
/// # Examples
///
/// ```
/// use risk_core::types::severity::Severity;
///
/// // Get the wire value
/// assert_eq!(Severity::Medium.as_str(), "medium");
///
/// // Parse from string (case-insensitive)
/// let low: Severity = "low".parse().unwrap();
/// assert_eq!(low, Severity::Low);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Most severe tier; demands immediate attention.
    Critical,

    /// Second tier; serious but not immediately threatening.
    High,

    /// Third tier; worth tracking.
    Medium,

    /// Least severe tier.
    Low,
}

impl Severity {
    /// All tiers, most severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Returns the lowercase wire value for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Returns the human-readable card label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical Risks",
            Severity::High => "High Risks",
            Severity::Medium => "Medium Risks",
            Severity::Low => "Low Risks",
        }
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(DomainError::UnknownSeverity(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
