use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ConsoleResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub database_healthy: bool,
    pub product_count: Option<i64>,
}

// GET /console - Diagnostics, reachable without credentials
pub async fn console(State(state): State<AppState>) -> Json<ConsoleResponse> {
    let database_healthy = sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .is_ok();

    let product_count = if database_healthy {
        state.products.count_products().await.ok()
    } else {
        None
    };

    Json(ConsoleResponse {
        status: if database_healthy { "ok" } else { "degraded" },
        database: "sqlite",
        database_healthy,
        product_count,
    })
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn not_found() -> AppError {
    AppError::not_found("Resource not found")
}
