//! JSON API route configuration.

use crate::api::handlers::{delete_link_handler, list_links_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`       - Create (or reuse) a short code for a URL
/// - `GET    /links`         - List every mapping
/// - `DELETE /links/{code}`  - Delete a mapping
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(list_links_handler))
        .route("/links/{code}", delete(delete_link_handler))
}
