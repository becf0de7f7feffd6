//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `302 Found` and a `Location` header. The mapping is read
/// from storage on every request; there is no cache.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 if the store cannot be read.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state
        .link_service
        .resolve(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

    let location = HeaderValue::from_str(&target).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid redirect target",
            json!({ "code": code }),
        )
    })?;

    debug!(code = %code, target = %target, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
