use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ListBucketsResponse {
    pub bucket_count: usize,
    pub buckets: Vec<String>,
}

/// List buckets and report count plus names as JSON.
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ListBucketsError> {
    let buckets = state
        .buckets()
        .list_buckets()
        .await
        .map_err(|e| ListBucketsError::Provider(e.to_string()))?;

    tracing::info!("Successfully listed {} S3 buckets", buckets.len());

    Ok((
        http::StatusCode::OK,
        Json(ListBucketsResponse {
            bucket_count: buckets.len(),
            buckets,
        }),
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum ListBucketsError {
    #[error("Provider error: {0}")]
    Provider(String),
}

impl IntoResponse for ListBucketsError {
    fn into_response(self) -> Response {
        tracing::error!("Exception thrown when listing buckets: {}", self);
        (
            http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Failed to retrieve S3 buckets" })),
        )
            .into_response()
    }
}
