use axum::{routing::get, Router};

use crate::handlers::system::{console, health_check};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Product API" }))
        .route("/health", get(health_check))
        .route("/console", get(console))
}
