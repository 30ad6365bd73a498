//! Bearer Token Inspection
//!
//! Request-time twin of the frontend's token check. The two run in
//! different environments and cannot share a module instance, so the
//! decode logic is deliberately reimplemented here against the same rules:
//! base64url JSON payload, `exp` in seconds, any decode failure degrades
//! to "not authenticated".

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub exp: i64,
}

pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload.as_bytes()).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn is_valid_at(token: &str, now_secs: i64) -> bool {
    decode_claims(token).map(|c| c.exp > now_secs).unwrap_or(false)
}

pub fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn token_with_exp(exp: i64) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!("{{\"exp\":{exp}}}").as_bytes());
        format!("header.{payload}.signature")
    }

    #[test]
    fn expiry_is_exclusive() {
        let token = token_with_exp(1_000);
        assert!(!is_valid_at(&token, 1_000));
        assert!(is_valid_at(&token, 999));
    }

    #[test]
    fn malformed_tokens_never_validate() {
        assert!(!is_valid_at("", 0));
        assert!(!is_valid_at("a.b", 0));
        assert!(!is_valid_at("a.b.c.d", 0));
        assert!(!is_valid_at("a.%%%.c", 0));
        let text_payload = URL_SAFE_NO_PAD.encode(b"not json");
        assert!(!is_valid_at(&format!("a.{text_payload}.c"), 0));
    }
}
