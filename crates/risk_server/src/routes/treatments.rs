//! Treatment CRUD endpoints, nested under a risk
//!
//! Every operation first resolves the owning risk; the 404 body
//! distinguishes a missing risk from a missing treatment.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use risk_core::types::NewTreatment;

use super::{not_found, AppState};

/// Build the treatment routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/risk/risks/{risk_id}/treatments/",
            get(list_treatments).post(create_treatment),
        )
        .route(
            "/risk/risks/{risk_id}/treatments/{treatment_id}/",
            get(get_treatment).put(update_treatment).delete(delete_treatment),
        )
}

/// GET /risk/risks/{risk_id}/treatments/ - List treatments of a risk
async fn list_treatments(State(state): State<AppState>, Path(risk_id): Path<u64>) -> Response {
    match state.store.list_treatments(risk_id).await {
        Ok(treatments) => (StatusCode::OK, Json(treatments)).into_response(),
        Err(err) => not_found(err),
    }
}

/// GET /risk/risks/{risk_id}/treatments/{treatment_id}/ - Fetch a treatment
async fn get_treatment(
    State(state): State<AppState>,
    Path((risk_id, treatment_id)): Path<(u64, u64)>,
) -> Response {
    match state.store.get_treatment(risk_id, treatment_id).await {
        Ok(treatment) => (StatusCode::OK, Json(treatment)).into_response(),
        Err(err) => not_found(err),
    }
}

/// POST /risk/risks/{risk_id}/treatments/ - Create a treatment
async fn create_treatment(
    State(state): State<AppState>,
    Path(risk_id): Path<u64>,
    Json(data): Json<NewTreatment>,
) -> Response {
    match state.store.create_treatment(risk_id, data).await {
        Ok(treatment) => (StatusCode::CREATED, Json(treatment)).into_response(),
        Err(err) => not_found(err),
    }
}

/// PUT /risk/risks/{risk_id}/treatments/{treatment_id}/ - Update a treatment
async fn update_treatment(
    State(state): State<AppState>,
    Path((risk_id, treatment_id)): Path<(u64, u64)>,
    Json(data): Json<NewTreatment>,
) -> Response {
    match state
        .store
        .update_treatment(risk_id, treatment_id, data)
        .await
    {
        Ok(treatment) => (StatusCode::OK, Json(treatment)).into_response(),
        Err(err) => not_found(err),
    }
}

/// DELETE /risk/risks/{risk_id}/treatments/{treatment_id}/ - Delete a treatment
async fn delete_treatment(
    State(state): State<AppState>,
    Path((risk_id, treatment_id)): Path<(u64, u64)>,
) -> Response {
    match state.store.delete_treatment(risk_id, treatment_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => not_found(err),
    }
}
