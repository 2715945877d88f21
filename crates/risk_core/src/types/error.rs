//! Error types for structured error handling.
//!
//! This module provides:
//! - `DomainError`: Errors from parsing severity and status wire values

use thiserror::Error;

/// Categorised domain parsing errors.
///
/// Provides structured error handling for wire-value parsing with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `UnknownSeverity`: Severity value outside the four-tier scale
/// - `UnknownRiskStatus`: Risk status outside the five known states
/// - `UnknownTreatmentStatus`: Treatment status outside the known states
///
/// # Examples
/// ```
/// use risk_core::types::DomainError;
///
/// let err = DomainError::UnknownSeverity("severe".to_string());
/// assert_eq!(format!("{}", err), "Unknown severity: severe");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Severity value outside the four-tier scale.
    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),

    /// Risk status outside the five known states.
    #[error("Unknown risk status: {0}")]
    UnknownRiskStatus(String),

    /// Treatment status outside the known states.
    #[error("Unknown treatment status: {0}")]
    UnknownTreatmentStatus(String),
}
