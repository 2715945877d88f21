//! Risk CRUD and metrics endpoints
//!
//! Mirrors the collection layout consumed by the dashboard client:
//! the collection and item routes carry trailing slashes, and the metrics
//! projection hangs off the collection as a static segment.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use risk_core::types::NewRisk;

use super::{not_found, AppState};

/// Build the risk routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/risk/risks/", get(list_risks).post(create_risk))
        .route("/risk/risks/metrics/", get(risk_metrics))
        .route(
            "/risk/risks/{id}/",
            get(get_risk).put(update_risk).delete(delete_risk),
        )
}

/// GET /risk/risks/ - List all risks
async fn list_risks(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_risks().await)
}

/// GET /risk/risks/{id}/ - Fetch a single risk
async fn get_risk(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.get_risk(id).await {
        Ok(risk) => (StatusCode::OK, Json(risk)).into_response(),
        Err(err) => not_found(err),
    }
}

/// POST /risk/risks/ - Create a risk
async fn create_risk(State(state): State<AppState>, Json(data): Json<NewRisk>) -> Response {
    let risk = state.store.create_risk(data).await;
    (StatusCode::CREATED, Json(risk)).into_response()
}

/// PUT /risk/risks/{id}/ - Update a risk
async fn update_risk(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(data): Json<NewRisk>,
) -> Response {
    match state.store.update_risk(id, data).await {
        Ok(risk) => (StatusCode::OK, Json(risk)).into_response(),
        Err(err) => not_found(err),
    }
}

/// DELETE /risk/risks/{id}/ - Delete a risk and its treatments
async fn delete_risk(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.delete_risk(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => not_found(err),
    }
}

/// GET /risk/risks/metrics/ - Aggregate metrics projection
async fn risk_metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.metrics().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::Request;
    use risk_core::types::{Risk, RiskMetrics};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(Arc::new(ServerConfig::default()))
    }

    fn post_risk_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/risk/risks/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_risks_empty() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/risk/risks/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let risks: Vec<Risk> = read_json(response).await;
        assert!(risks.is_empty());
    }

    #[tokio::test]
    async fn test_create_risk_returns_201_with_assigned_id() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(post_risk_request(
                r#"{"title": "Data Breach", "severity": "critical"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let risk: Risk = read_json(response).await;
        assert_eq!(risk.id, 1);
        assert_eq!(risk.title, "Data Breach");
    }

    #[tokio::test]
    async fn test_get_unknown_risk_returns_404_body() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/risk/risks/42/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["error"], "Risk not found");
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let router = routes().with_state(create_test_state());

        let response = router
            .clone()
            .oneshot(post_risk_request(
                r#"{"title": "Old", "severity": "low"}"#,
            ))
            .await
            .unwrap();
        let created: Risk = read_json(response).await;

        let response = router
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/risk/risks/{}/", created.id))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"title": "New", "severity": "high", "status": "mitigated"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: Risk = read_json(response).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "New");
    }

    #[tokio::test]
    async fn test_delete_returns_204_then_404() {
        let router = routes().with_state(create_test_state());

        let response = router
            .clone()
            .oneshot(post_risk_request(
                r#"{"title": "Ephemeral", "severity": "low"}"#,
            ))
            .await
            .unwrap();
        let created: Risk = read_json(response).await;

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/risk/risks/{}/", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/risk/risks/{}/", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_metrics_endpoint_reflects_created_risks() {
        let router = routes().with_state(create_test_state());

        for body in [
            r#"{"title": "A", "severity": "critical"}"#,
            r#"{"title": "B", "severity": "high", "status": "closed"}"#,
        ] {
            router
                .clone()
                .oneshot(post_risk_request(body))
                .await
                .unwrap();
        }

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/risk/risks/metrics/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let metrics: RiskMetrics = read_json(response).await;
        assert_eq!(metrics.total, Some(2));
        assert_eq!(metrics.critical, Some(1));
        assert_eq!(metrics.closed_risks, Some(1));
        assert_eq!(metrics.recent_risks.unwrap()[0].title, "B");
    }

    #[tokio::test]
    async fn test_metrics_route_not_shadowed_by_item_route() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/risk/risks/metrics/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Must hit the metrics handler, not parse "metrics" as an id.
        assert_eq!(response.status(), StatusCode::OK);
    }
}
