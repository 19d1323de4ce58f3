//! Session Middleware
//!
//! Resolves the signed session cookie and stores the `SessionUser` in the
//! request extensions. The API flavour answers 401 when there is no valid
//! session; the page flavour redirects to the login page.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use std::sync::Arc;

use crate::application::config::PayrollConfig;
use crate::application::session::decode_session;
use crate::domain::entity::SessionUser;
use crate::domain::guard::require_session;

pub const LOGIN_PAGE: &str = "/login";

/// Decode the session cookie, if any; bad or expired cookies yield `None`
pub fn session_from_headers(config: &PayrollConfig, headers: &HeaderMap) -> Option<SessionUser> {
    let token = platform::cookie::extract_cookie(headers, &config.session_cookie_name)?;
    let session = decode_session(config, &token, Utc::now());

    if session.is_none() {
        tracing::debug!("Ignoring invalid session cookie");
    }

    session
}

/// Middleware for `/api/*` style routes
pub async fn require_api_session(
    State(config): State<Arc<PayrollConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let session = session_from_headers(&config, req.headers());

    match require_session(session) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

/// Middleware for HTML pages
pub async fn require_page_session(
    State(config): State<Arc<PayrollConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match session_from_headers(&config, req.headers()) {
        Some(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        None => found(LOGIN_PAGE),
    }
}

/// `302 Found` redirect
pub fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
