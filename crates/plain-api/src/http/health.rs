use axum::response::{IntoResponse, Response};
use http::StatusCode;

#[tracing::instrument]
pub async fn handler() -> Response {
    tracing::info!("health check");
    (StatusCode::OK, "OK").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handler_direct() {
        let response = handler().await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
