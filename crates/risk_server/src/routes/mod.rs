//! Route modules for the risk server
//!
//! This module contains endpoint group-specific routers:
//! - risks: Risk CRUD and the aggregate metrics projection
//! - treatments: Treatment CRUD nested under a risk
//! - health: Health check and readiness endpoints

pub mod health;
pub mod risks;
pub mod treatments;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::store::{RiskStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Shared in-memory store
    pub store: Arc<RiskStore>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState with an empty store
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            store: Arc::new(RiskStore::new()),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Map a store lookup failure to its 404 response body
pub(crate) fn not_found(err: StoreError) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": err.to_string() }))).into_response()
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(risks::routes())
        .merge(treatments::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
