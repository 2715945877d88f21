//! # Riskboard TUI
//!
//! Terminal dashboard for the risk-management backend.
//!
//! Uses ratatui for rendering and crossterm for terminal handling.
//!
//! ## Screens
//! - **Dashboard**: aggregate counters, severity cards, status panel, and
//!   the recent-risks list
//! - **Risk detail**: a single risk opened from the recent-risks list
//!
//! Each screen fetches its data once per mount through a generation-tagged
//! background task; a fetch that resolves after the screen was left is
//! discarded rather than applied to state it no longer owns.

pub mod app;
pub mod fetch;
pub mod screens;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{AppState, FetchState, Screen, TuiApp};
    pub use crate::fetch::{FetchMessage, Fetcher};
}
