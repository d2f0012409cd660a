//! Product catalog CRUD service: axum over SQLite with HTTP Basic auth.

pub mod auth;
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;

use axum::{
    http::{header, HeaderValue},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the full application: routes, access control and response headers.
pub fn build_app(state: AppState) -> Router {
    routes::create_router()
        .fallback(handlers::system::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
