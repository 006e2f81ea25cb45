use axum::extract::State;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::state::AppState;

/// List buckets and report the outcome as a plain string.
///
/// Errors are mapped to an `error: ...` body, still with a 200 status;
/// they are never retried and never kill the process.
#[tracing::instrument(skip(state))]
pub async fn handler(State(state): State<AppState>) -> Response {
    match state.buckets().list_buckets().await {
        Ok(names) => {
            tracing::info!("Logging buckets from list result:");
            for name in &names {
                tracing::info!("{}", name);
            }
            (StatusCode::OK, "done aws sdk s3 request").into_response()
        }
        Err(e) => {
            tracing::error!("Exception thrown when listing buckets: {}", e);
            (StatusCode::OK, format!("error: {}", e)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use common::testkit::{FailingBuckets, StaticBuckets};

    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_done_string() {
        let state = AppState::new(Arc::new(StaticBuckets::new(["alpha", "beta"])));
        let response = handler(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "done aws sdk s3 request");
    }

    #[tokio::test]
    async fn test_failure_returns_error_string() {
        let state = AppState::new(Arc::new(FailingBuckets::new("access denied")));
        let response = handler(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.starts_with("error: "));
        assert!(body.contains("access denied"));
    }
}
