//! # risk_core: Domain Foundation for the Riskboard Toolkit
//!
//! ## Foundation Role
//!
//! risk_core is the bottom layer of the workspace, providing:
//! - Severity and status enums with their wire encodings (`types::severity`, `types::status`)
//! - Risk and treatment entities plus their create/update payloads (`types::entities`)
//! - The server-computed metrics projection (`types::metrics`)
//! - The dashboard display model and its fallback-merge rule (`dashboard`)
//! - Error types: `DomainError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! risk_core has no dependencies on other risk_* crates, with minimal external
//! dependencies:
//! - chrono: entity timestamps
//! - serde: wire serialisation
//! - thiserror: structured parse errors
//!
//! ## Usage Examples
//!
//! ```rust
//! use risk_core::types::{RiskMetrics, Severity};
//! use risk_core::dashboard::DashboardModel;
//!
//! let severity: Severity = "critical".parse().unwrap();
//! assert_eq!(severity.as_str(), "critical");
//!
//! // An empty projection resolves entirely to the fallback constants.
//! let model = DashboardModel::resolve(&RiskMetrics::default());
//! assert_eq!(model.total_risks, 10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod dashboard;
pub mod types;
