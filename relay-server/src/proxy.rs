//! Relay Endpoint
//!
//! Accepts `{path, method, body}` and forwards to the backend. Invalid or
//! self-referential paths are rejected with 400 before any backend
//! contact. Credential cookies are stripped from the forwarded request;
//! the backend's Set-Cookie comes back through, and hop-corrupting
//! response headers are dropped.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::gate::{LEGACY_SESSION_COOKIE, TOKEN_COOKIE};
use crate::AppState;

/// Response headers that must not be copied through verbatim.
const RESPONSE_HEADER_DENYLIST: &[&str] = &[
    "content-length",
    "transfer-encoding",
    "connection",
    "server",
    "date",
    "location",
];

/// Rejects anything that is not a non-empty absolute backend path, and
/// refuses to relay to the relay itself.
pub fn validate_path(path: Option<&str>) -> Result<&str, &'static str> {
    let path = path.filter(|p| !p.is_empty() && p.starts_with('/'));
    let Some(path) = path else {
        return Err("Invalid path parameter");
    };
    if path.contains("/api/proxy") {
        return Err("Cannot proxy to proxy endpoint");
    }
    Ok(path)
}

/// Caller cookies minus both credential cookie names.
pub fn filtered_cookie_header(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    let kept: Vec<&str> = raw
        .split(';')
        .map(str::trim)
        .filter(|cookie| {
            !cookie.is_empty()
                && !cookie.starts_with(&format!("{TOKEN_COOKIE}="))
                && !cookie.starts_with(&format!("{LEGACY_SESSION_COOKIE}="))
        })
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join("; "))
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

pub async fn relay_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    let path = payload
        .get("path")
        .and_then(Value::as_str)
        .map(str::to_string);
    let method = payload
        .get("method")
        .and_then(Value::as_str)
        .unwrap_or("POST")
        .to_string();
    let body = payload.get("body").cloned().filter(|b| !b.is_null());
    relay(state, headers, path, method, body).await
}

pub async fn relay_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    relay(state, headers, params.get("path").cloned(), "GET".to_string(), None).await
}

async fn relay(
    state: AppState,
    headers: HeaderMap,
    path: Option<String>,
    method: String,
    body: Option<Value>,
) -> Response {
    let path = match validate_path(path.as_deref()) {
        Ok(path) => path.to_string(),
        Err(message) => return bad_request(message),
    };

    let url = format!("{}{}", state.backend_base_url, path);
    let method =
        reqwest::Method::from_bytes(method.as_bytes()).unwrap_or(reqwest::Method::POST);

    let mut outbound = state
        .http
        .request(method.clone(), &url)
        .header("content-type", "application/json");
    if let Some(cookies) = filtered_cookie_header(&headers) {
        outbound = outbound.header("cookie", cookies);
    }
    if let Some(auth) = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        outbound = outbound.header("authorization", auth);
    }
    if let Some(body) = &body {
        outbound = outbound.json(body);
    }

    let upstream = match outbound.send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, %url, "backend unreachable");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to connect to backend service" })),
            )
                .into_response();
        }
    };

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let upstream_headers = upstream.headers().clone();
    let text = upstream.text().await.unwrap_or_default();
    tracing::debug!(%method, %path, status = status.as_u16(), "relayed");

    // A backend body that is not JSON comes back wrapped instead of
    // crashing the relay.
    let payload = match serde_json::from_str::<Value>(&text) {
        Ok(value) => value,
        Err(_) if text.is_empty() => Value::Null,
        Err(_) => json!({ "error": "Invalid JSON response", "raw": text }),
    };

    let mut response = (status, Json(payload)).into_response();
    copy_response_headers(&upstream_headers, response.headers_mut());
    response
}

fn copy_response_headers(upstream: &reqwest::header::HeaderMap, out: &mut HeaderMap) {
    for (name, value) in upstream {
        let name_str = name.as_str();
        // Json already set the content type.
        if name_str == "content-type" || RESPONSE_HEADER_DENYLIST.contains(&name_str) {
            continue;
        }
        let Ok(value_str) = value.to_str() else {
            continue;
        };
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name_str),
            HeaderValue::try_from(value_str),
        ) {
            out.append(name, value);
        }
    }
}
