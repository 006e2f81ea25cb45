use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod buckets;
pub mod health;
mod not_found;

use crate::state::AppState;

/// Build the app router. `/` serves the same handler as `/health`, so the
/// two bodies are byte-identical.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::handler))
        .route("/health", get(health::handler))
        .route("/api/buckets", get(buckets::handler))
        .fallback(not_found::handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
