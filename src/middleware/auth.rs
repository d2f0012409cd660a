//! HTTP Basic authentication and path access rules.
//!
//! Rules are checked in order and the first matching prefix wins. Paths no
//! rule mentions require authentication. Every request is authenticated on
//! its own; there are no sessions or tokens.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    PermitAll,
}

#[derive(Debug)]
pub struct AccessRule {
    pub prefix: &'static str,
    pub access: Access,
}

pub const ACCESS_RULES: &[AccessRule] = &[
    AccessRule {
        prefix: "/api/products",
        access: Access::Authenticated,
    },
    AccessRule {
        prefix: "/console",
        access: Access::PermitAll,
    },
];

#[derive(Debug, Clone)]
pub struct AuthContext {
    pub username: String,
    pub roles: Vec<String>,
}

pub fn required_access(path: &str) -> Access {
    ACCESS_RULES
        .iter()
        .find(|rule| path_matches(path, rule.prefix))
        .map(|rule| rule.access)
        .unwrap_or(Access::Authenticated)
}

// `/api/products` matches itself and `/api/products/...`, not `/api/productsX`.
fn path_matches(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

// The token part of a `Basic` header; `None` for any other scheme.
fn basic_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    scheme.eq_ignore_ascii_case("basic").then(|| token.trim())
}

/// Decode an `Authorization: Basic <base64(user:pass)>` header value.
pub fn parse_basic_credentials(header_value: &str) -> Option<(String, String)> {
    let decoded = STANDARD.decode(basic_token(header_value)?).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Checks Basic credentials whenever they are presented, even on open paths,
/// and demands them on every path the rules do not open.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let access = required_access(req.uri().path());

    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|h| basic_token(h).is_some())
        .map(str::to_owned);

    let auth_header = match (presented, access) {
        (Some(h), _) => h,
        (None, Access::PermitAll) => return next.run(req).await,
        (None, Access::Authenticated) => {
            return AppError::unauthorized("Full authentication is required").into_response()
        }
    };

    let (username, password) = match parse_basic_credentials(&auth_header) {
        Some(c) => c,
        None => {
            return AppError::unauthorized("Invalid basic authentication token").into_response()
        }
    };

    // bcrypt verification is CPU-bound; keep it off the async workers.
    let users = state.users.clone();
    let verified = tokio::task::spawn_blocking(move || {
        users
            .authenticate(&username, &password)
            .map(|p| AuthContext {
                username: p.username.clone(),
                roles: p.roles.clone(),
            })
    })
    .await;

    let context = match verified {
        Ok(Some(ctx)) => ctx,
        Ok(None) => return AppError::unauthorized("Bad credentials").into_response(),
        Err(e) => {
            return AppError::internal(format!("Authentication task failed: {e}")).into_response()
        }
    };

    debug!(username = %context.username, roles = ?context.roles, "Authenticated request");

    // Attach context
    req.extensions_mut().insert(context);

    next.run(req).await
}
