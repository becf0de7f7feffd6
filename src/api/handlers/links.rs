//! Handlers for mapping management endpoints (list, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::domain::entities::MappingSet;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every mapping.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// The full `code -> target` object, in the order codes were created:
///
/// ```json
/// { "c327bc": "https://www.google.com", "abc123": "https://y.com" }
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<MappingSet>, AppError> {
    Ok(Json(state.link_service.list().await?))
}

/// Deletes a mapping.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// The code becomes free for reuse immediately.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let removed = state.link_service.remove(&code).await?;

    if !removed {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
