use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;

pub async fn handler() -> Response {
    let err_msg = serde_json::json!({"msg": "not found"});
    (StatusCode::NOT_FOUND, Json(err_msg)).into_response()
}
