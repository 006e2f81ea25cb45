use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn handler() -> Response {
    tracing::info!("health check");
    (StatusCode::OK, Json(HealthResponse { status: "healthy" })).into_response()
}
