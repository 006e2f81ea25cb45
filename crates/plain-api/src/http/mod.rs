use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod buckets;
pub mod health;
mod not_found;

use crate::state::AppState;

/// Build the app router. `/` serves the same handler as `/health`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::handler))
        .route("/health", get(health::handler))
        .route("/api/buckets", get(buckets::handler))
        .fallback(not_found::handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use common::testkit::{FailingBuckets, StaticBuckets};

    use super::*;

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_index_matches_health() {
        let state = AppState::new(Arc::new(StaticBuckets::default()));

        let index = router(state.clone())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let health = router(state)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(index.status(), StatusCode::OK);
        assert_eq!(health.status(), StatusCode::OK);
        assert_eq!(body_bytes(index).await, body_bytes(health).await);
    }

    #[tokio::test]
    async fn test_health_ok_when_source_fails() {
        let state = AppState::new(Arc::new(FailingBuckets::default()));

        let response = router(state)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"OK");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_plain_text() {
        let state = AppState::new(Arc::new(StaticBuckets::default()));

        let response = router(state)
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response
                .headers()
                .get(http::header::CONTENT_TYPE)
                .unwrap(),
            "text/plain"
        );
        assert_eq!(body_bytes(response).await, b"not found");
    }
}
