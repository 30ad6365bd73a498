//! Auth Flows
//!
//! Login, registration, session probe, logout and password reset, all via
//! the relay client. Successful login/registration persists the bearer
//! token; any failed session probe clears it.

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ApiError};
use crate::models::{AuthResponse, LoginCredentials, RegistrationData, SessionUser};
use crate::session;

#[derive(Serialize)]
struct RegisterPayload<'a> {
    email: &'a str,
    username: &'a str,
    password: &'a str,
    // Backend requires explicit confirmation even though the form collects
    // the password once.
    password_confirm: &'a str,
    name: &'a str,
}

pub async fn sign_in(credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
    let body = serde_json::to_value(credentials)
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let auth: AuthResponse = ApiClient
        .post("/api/v1/auth/login", Some(body))
        .await?;
    if !auth.access_token.is_empty() {
        session::set_token(&auth.access_token);
    }
    Ok(auth)
}

pub async fn sign_up(data: &RegistrationData) -> Result<AuthResponse, ApiError> {
    let payload = RegisterPayload {
        email: &data.email,
        username: &data.username,
        password: &data.password,
        password_confirm: &data.password,
        name: &data.name,
    };
    let body = serde_json::to_value(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let auth: AuthResponse = ApiClient
        .post("/api/v1/auth/register", Some(body))
        .await?;
    if !auth.access_token.is_empty() {
        session::set_token(&auth.access_token);
    }
    Ok(auth)
}

/// Probes the backend session. A failed probe means the stored token is no
/// longer good for anything, so it is cleared.
pub async fn get_session() -> Option<SessionUser> {
    match ApiClient.get::<SessionUser>("/api/v1/auth/me").await {
        Ok(user) => Some(user),
        Err(_) => {
            session::clear_token();
            None
        }
    }
}

/// Logs out. The local token is cleared even when the backend call fails;
/// the session is dead either way.
pub async fn sign_out() {
    let _ = ApiClient
        .post::<Value>("/api/v1/auth/logout", None)
        .await;
    session::clear_token();
}

pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    ApiClient
        .post::<Value>(
            "/api/v1/auth/password-reset/request",
            Some(serde_json::json!({ "email": email })),
        )
        .await
        .map(|_| ())
}

/// Second half of the reset flow: the token arrives by email link and rides
/// the query string of the confirm page.
pub async fn confirm_password_reset(token: &str, new_password: &str) -> Result<(), ApiError> {
    ApiClient
        .post::<Value>(
            "/api/v1/auth/password-reset/confirm",
            Some(serde_json::json!({ "token": token, "new_password": new_password })),
        )
        .await
        .map(|_| ())
}
