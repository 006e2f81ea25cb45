use axum::response::{IntoResponse, Response};
use http::StatusCode;

pub async fn handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(http::header::CONTENT_TYPE, "text/plain")],
        "not found",
    )
        .into_response()
}
