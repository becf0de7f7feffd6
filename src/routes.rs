//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Front-end page (`index.html` from the static dir)
//! - `GET  /static/*`    - Static assets
//! - `GET  /health`      - Health check
//! - `GET  /shortened`   - Query-string shorten endpoint used by the page
//! - `/api/*`            - JSON API
//! - `GET  /{code}`      - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, legacy_shorten_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`; its `index.html` is served at `/`
pub fn app_router(state: AppState, static_dir: &Path) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/health", get(health_handler))
        .route("/shortened", get(legacy_shorten_handler))
        .nest("/api", api::routes::api_routes())
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
