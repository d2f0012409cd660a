#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http_body_util::BodyExt;
use tower::ServiceExt;

use product_api::auth::credentials::UserStore;
use product_api::database;
use product_api::state::AppState;

/// Lowest bcrypt cost; production uses the bcrypt default.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Fresh in-memory database with the schema applied.
pub async fn test_state() -> AppState {
    let pool = database::create_pool("sqlite::memory:").await.unwrap();
    database::run_migrations(&pool).await.unwrap();
    let users = UserStore::with_default_users(TEST_BCRYPT_COST).unwrap();
    AppState::new(pool, users)
}

/// Build the full application router, mirroring `main.rs`.
pub fn build_test_app(state: AppState) -> Router {
    product_api::build_app(state)
}

pub fn basic(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

pub fn user_auth() -> String {
    basic("user", "password")
}

pub fn admin_auth() -> String {
    basic("admin", "adminpass")
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, auth: Option<&str>) -> Response<Body> {
    send(app, Method::GET, uri, auth, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    auth: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, auth, Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    auth: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, auth, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, auth: Option<&str>) -> Response<Body> {
    send(app, Method::DELETE, uri, auth, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
