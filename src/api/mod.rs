//! API Gateway Client
//!
//! Single chokepoint for backend traffic. Every call is funnelled through
//! the relay endpoint as `{path, method, body}` with the bearer token
//! attached, and every outcome is normalized into one tagged error type at
//! this boundary so callers never re-sniff response shapes.

mod auth;
mod tasks;

pub use auth::*;
pub use tasks::*;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::session;

/// Relay endpoint. All backend paths ride inside the request body.
pub const PROXY_URL: &str = "/api/proxy";

/// Outcome of a gateway call that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP 401. The local credential has already been cleared.
    Unauthorized,
    /// Any other non-2xx backend status, message extracted from the body.
    Backend { status: u16, message: String },
    /// The relay itself was unreachable.
    Network(String),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Unauthorized => 401,
            ApiError::Backend { status, .. } => *status,
            ApiError::Network(_) => 0,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Unauthorized: Session expired".to_string(),
            ApiError::Backend { message, .. } => message.clone(),
            ApiError::Network(message) => message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Serialize)]
struct RelayEnvelope<'a> {
    path: &'a str,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a Value>,
}

/// Pulls a human-readable message out of an error body. JSON `message`
/// wins, then `error`, then the raw text, then a status fallback.
pub(crate) fn extract_error_message(status: u16, body: Option<&Value>, raw: &str) -> String {
    if let Some(value) = body {
        match value {
            Value::String(text) => return text.clone(),
            Value::Object(map) => {
                for key in ["message", "error", "detail"] {
                    if let Some(Value::String(text)) = map.get(key) {
                        return text.clone();
                    }
                }
            }
            _ => {}
        }
    }
    if !raw.trim().is_empty() {
        return raw.to_string();
    }
    format!("Request failed with status {status}")
}

/// Thin handle over the relay; all verb helpers share one request path.
#[derive(Clone, Copy, Default)]
pub struct ApiClient;

impl ApiClient {
    async fn request_value(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<(u16, Value), ApiError> {
        let envelope = RelayEnvelope {
            path,
            method,
            body: body.as_ref(),
        };

        let mut builder = Request::post(PROXY_URL).header("Content-Type", "application/json");
        if let Some(token) = session::get_token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let request = builder
            .json(&envelope)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let parsed: Option<Value> = serde_json::from_str(&text).ok();

        if status == 401 {
            // Any 401 means the session is dead; stop sending the token.
            session::clear_token();
            return Err(ApiError::Unauthorized);
        }

        if (200..300).contains(&status) {
            let value = match parsed {
                Some(value) => value,
                None if text.is_empty() => Value::Null,
                None => Value::String(text),
            };
            Ok((status, value))
        } else {
            Err(ApiError::Backend {
                status,
                message: extract_error_message(status, parsed.as_ref(), &text),
            })
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let (status, value) = self.request_value(method, path, body).await?;
        serde_json::from_value(value).map_err(|err| ApiError::Backend {
            status,
            message: format!("Unexpected response shape: {err}"),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request("GET", path, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        self.request("POST", path, body).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<T, ApiError> {
        self.request("PUT", path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request("DELETE", path, None).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<T, ApiError> {
        self.request("PATCH", path, Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_field_wins() {
        let body = json!({"message": "title is required", "error": "other"});
        assert_eq!(
            extract_error_message(422, Some(&body), "raw"),
            "title is required"
        );
    }

    #[test]
    fn error_field_is_second_choice() {
        let body = json!({"error": "no such task"});
        assert_eq!(extract_error_message(404, Some(&body), ""), "no such task");
    }

    #[test]
    fn string_body_is_used_verbatim() {
        let body = json!("plain failure");
        assert_eq!(extract_error_message(500, Some(&body), ""), "plain failure");
    }

    #[test]
    fn raw_text_fallback() {
        assert_eq!(extract_error_message(502, None, "bad gateway"), "bad gateway");
    }

    #[test]
    fn status_fallback_when_nothing_usable() {
        assert_eq!(
            extract_error_message(503, None, "  "),
            "Request failed with status 503"
        );
        let body = json!({"unrelated": 1});
        assert_eq!(
            extract_error_message(500, Some(&body), ""),
            "Request failed with status 500"
        );
    }

    #[test]
    fn unauthorized_error_surface() {
        let err = ApiError::Unauthorized;
        assert_eq!(err.status(), 401);
        assert_eq!(err.message(), "Unauthorized: Session expired");
    }

    #[test]
    fn network_error_has_status_zero() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.status(), 0);
        assert_eq!(err.message(), "connection refused");
    }
}
