//! Session State
//!
//! The bearer token is the single source of truth for authentication. It
//! lives in localStorage under one key and is mirrored into a cookie of the
//! same name so the relay server can gate page routes. Both are cleared
//! together on logout.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use wasm_bindgen::JsCast;

/// localStorage key and cookie name for the bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// Session cookie written by an earlier version of the app. Never read,
/// only expired on logout so no stale credential survives.
pub const LEGACY_SESSION_COOKIE: &str = "better-auth.session_token";

/// Claims carried in the token payload segment. Only `exp` matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub exp: i64,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn write_cookie(cookie: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(html_document) = document.dyn_ref::<web_sys::HtmlDocument>() {
        let _ = html_document.set_cookie(cookie);
    }
}

/// Persists the token. No-op outside a browser environment.
pub fn set_token(token: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, token);
    write_cookie(&format!("{TOKEN_KEY}={token}; path=/; SameSite=Strict"));
}

pub fn get_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Removes the token from localStorage and expires both cookie names ever
/// used for auth.
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
    for name in [TOKEN_KEY, LEGACY_SESSION_COOKIE] {
        write_cookie(&format!(
            "{name}=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/; SameSite=Strict"
        ));
    }
}

/// Decodes the middle token segment as base64url JSON. Any structural
/// problem (wrong segment count, bad base64, non-JSON payload) yields
/// `None`; a malformed token is never an error the caller sees.
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

/// Token freshness against an explicit clock, in seconds since epoch.
pub fn is_valid_at(token: &str, now_secs: i64) -> bool {
    decode_claims(token).map(|c| c.exp > now_secs).unwrap_or(false)
}

/// Whether the stored token exists and its `exp` claim is in the future.
pub fn token_is_valid() -> bool {
    match get_token() {
        Some(token) => is_valid_at(&token, (js_sys::Date::now() / 1000.0) as i64),
        None => false,
    }
}

/// Client-side session gate. Pure and synchronous; drives in-app redirects.
pub fn is_authenticated() -> bool {
    match get_token() {
        Some(token) => !token.is_empty() && token_is_valid(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let encoded = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("header.{encoded}.signature")
    }

    fn token_with_exp(exp: i64) -> String {
        token_with_payload(&format!("{{\"exp\":{exp}}}"))
    }

    #[test]
    fn expired_token_is_invalid() {
        let token = token_with_exp(1_000);
        assert!(!is_valid_at(&token, 1_000));
        assert!(!is_valid_at(&token, 2_000));
    }

    #[test]
    fn future_expiry_is_valid() {
        let token = token_with_exp(10_000);
        assert!(is_valid_at(&token, 9_999));
    }

    #[test]
    fn wrong_segment_count_is_invalid() {
        assert!(!is_valid_at("", 0));
        assert!(!is_valid_at("only-one-segment", 0));
        assert!(!is_valid_at("two.segments", 0));
        let four = format!("{}.extra", token_with_exp(10_000));
        assert!(!is_valid_at(&four, 0));
    }

    #[test]
    fn non_base64_payload_is_invalid() {
        assert!(!is_valid_at("header.!!!not-base64!!!.signature", 0));
    }

    #[test]
    fn non_json_payload_is_invalid() {
        assert!(!is_valid_at(&token_with_payload("plain text"), 0));
    }

    #[test]
    fn payload_without_exp_is_invalid() {
        assert!(!is_valid_at(&token_with_payload("{\"sub\":\"u1\"}"), 0));
    }
}

// Storage round-trips need a real browser; run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn cookies() -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn set_then_get_roundtrips() {
        set_token("a.b.c");
        assert_eq!(get_token().as_deref(), Some("a.b.c"));
        assert!(cookies().contains("access_token=a.b.c"));
        clear_token();
    }

    #[wasm_bindgen_test]
    fn clear_then_get_is_none() {
        set_token("a.b.c");
        clear_token();
        assert_eq!(get_token(), None);
        assert!(!cookies().contains("access_token=a.b.c"));
    }
}
