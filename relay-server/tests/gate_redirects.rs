//! Route-gating behavior over a real router, one request per table row.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::{middleware, Router};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use tower::ServiceExt;

use taskdeck_relay::gate;

fn page_router() -> Router {
    Router::new()
        .route("/", get(|| async { "home" }))
        .route("/login", get(|| async { "login" }))
        .route("/register", get(|| async { "register" }))
        .route("/tasks", get(|| async { "tasks" }))
        .layer(middleware::from_fn(gate::gate_pages))
}

fn token_with_exp(exp: i64) -> String {
    let payload = URL_SAFE_NO_PAD.encode(format!("{{\"exp\":{exp}}}").as_bytes());
    format!("header.{payload}.signature")
}

fn fresh_token() -> String {
    token_with_exp(4_102_444_800) // 2100-01-01
}

async fn send(router: Router, uri: &str, cookie: Option<String>) -> axum::response::Response {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    router
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn protected_without_credential_redirects_to_login() {
    let response = send(page_router(), "/tasks", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn protected_with_valid_cookie_continues() {
    let cookie = format!("access_token={}", fresh_token());
    let response = send(page_router(), "/tasks", Some(cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_with_expired_cookie_redirects_to_login() {
    let cookie = format!("access_token={}", token_with_exp(1_000));
    let response = send(page_router(), "/tasks", Some(cookie)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn protected_with_bearer_header_continues() {
    let request = Request::builder()
        .uri("/tasks")
        .header(header::AUTHORIZATION, format!("Bearer {}", fresh_token()))
        .body(Body::empty())
        .unwrap();
    let response = page_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_with_valid_credential_redirects_to_tasks() {
    let cookie = format!("access_token={}", fresh_token());
    let response = send(page_router(), "/login", Some(cookie)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/tasks");
}

#[tokio::test]
async fn login_without_credential_continues() {
    let response = send(page_router(), "/login", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn legacy_session_cookie_alone_does_not_authenticate() {
    let response = send(
        page_router(),
        "/tasks",
        Some("better-auth.session_token=legacy-session".to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn public_routes_pass_either_way() {
    let response = send(page_router(), "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = format!("access_token={}", fresh_token());
    let response = send(page_router(), "/", Some(cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
}
