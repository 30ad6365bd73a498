//! Taskdeck Relay Server
//!
//! Serves the built frontend, gates page routes on the bearer token, and
//! relays API calls to the backend so the browser never talks to it
//! directly. Credential cookies are filtered in both directions.

use std::path::Path;

use axum::middleware;
use axum::routing::post;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

pub mod gate;
pub mod proxy;
pub mod token;

#[derive(Clone)]
pub struct AppState {
    pub backend_base_url: String,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(backend_base_url: impl Into<String>) -> Self {
        Self {
            backend_base_url: backend_base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

/// Full application router: relay endpoint plus gated static pages.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");
    let pages = Router::new()
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(gate::gate_pages));

    Router::new()
        .route("/api/proxy", post(proxy::relay_post).get(proxy::relay_get))
        .with_state(state)
        .merge(pages)
}
