//! Request Gate
//!
//! Middleware over the page routes. The bearer token is the single source
//! of truth here: the legacy session cookie is never read as an auth
//! signal, matching the client-side gate. Token precedence is the
//! credential cookie, then the bearer-scheme Authorization header.

use axum::extract::Request;
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::token;

/// Cookie name carrying the bearer token, mirrored by the frontend.
pub const TOKEN_COOKIE: &str = "access_token";

/// Session cookie from an earlier version of the app. Filtered, never read.
pub const LEGACY_SESSION_COOKIE: &str = "better-auth.session_token";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a valid session.
    Protected,
    /// Login/register; pointless for an authenticated caller.
    Entry,
    /// Everything else passes through untouched.
    Public,
}

pub fn classify(path: &str) -> RouteClass {
    if path == "/tasks" || path.starts_with("/tasks/") {
        RouteClass::Protected
    } else if path == "/login" || path == "/register" {
        RouteClass::Entry
    } else {
        RouteClass::Public
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    ToLogin,
    ToTasks,
}

pub fn decide(class: RouteClass, authenticated: bool) -> GateDecision {
    match (class, authenticated) {
        (RouteClass::Protected, false) => GateDecision::ToLogin,
        (RouteClass::Entry, true) => GateDecision::ToTasks,
        _ => GateDecision::Continue,
    }
}

pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(str::to_string)
}

/// Token source precedence: credential cookie, else bearer header.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = cookie_value(headers, TOKEN_COOKIE) {
        return Some(token);
    }
    let auth = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    auth.strip_prefix("Bearer ").map(str::to_string)
}

pub async fn gate_pages(request: Request, next: Next) -> Response {
    let authenticated = bearer_token(request.headers())
        .map(|t| token::is_valid_at(&t, token::now_secs()))
        .unwrap_or(false);

    match decide(classify(request.uri().path()), authenticated) {
        GateDecision::Continue => next.run(request).await,
        GateDecision::ToLogin => Redirect::temporary("/login").into_response(),
        GateDecision::ToTasks => Redirect::temporary("/tasks").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn route_classes() {
        assert_eq!(classify("/tasks"), RouteClass::Protected);
        assert_eq!(classify("/tasks/42"), RouteClass::Protected);
        assert_eq!(classify("/login"), RouteClass::Entry);
        assert_eq!(classify("/register"), RouteClass::Entry);
        assert_eq!(classify("/"), RouteClass::Public);
        assert_eq!(classify("/forgot-password"), RouteClass::Public);
        assert_eq!(classify("/reset-password"), RouteClass::Public);
    }

    #[test]
    fn decision_table() {
        assert_eq!(
            decide(RouteClass::Protected, false),
            GateDecision::ToLogin
        );
        assert_eq!(decide(RouteClass::Protected, true), GateDecision::Continue);
        assert_eq!(decide(RouteClass::Entry, true), GateDecision::ToTasks);
        assert_eq!(decide(RouteClass::Entry, false), GateDecision::Continue);
        assert_eq!(decide(RouteClass::Public, true), GateDecision::Continue);
        assert_eq!(decide(RouteClass::Public, false), GateDecision::Continue);
    }

    #[test]
    fn cookie_wins_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; access_token=from-cookie"),
        );
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        assert_eq!(bearer_token(&headers).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn header_is_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        assert_eq!(bearer_token(&headers).as_deref(), Some("from-header"));
    }

    #[test]
    fn legacy_session_cookie_is_not_an_auth_signal() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("better-auth.session_token=legacy"),
        );
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn non_bearer_authorization_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwdw=="),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
