//! REST API server for the Riskboard risk-management toolkit
//!
//! This crate exposes risk and treatment CRUD plus the aggregate metrics
//! projection over HTTP, backed by an in-memory store. Endpoints live under
//! the `/risk/` base path; `/health` and `/ready` serve load-balancer
//! integration.

pub mod config;
pub mod routes;
pub mod server;
pub mod store;

// Re-export domain types for integration
pub use risk_core;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
