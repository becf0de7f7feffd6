//! Handlers for link shortening endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenQuery, ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_custom_code;
use crate::utils::short_url::{short_url, short_url_base};

/// Shortens a URL, optionally under a custom code.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "customCode": "my-link" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortCode": "my-link", "shortUrl": "http://localhost:3000/my-link" }
/// ```
///
/// If the URL was shortened before, the existing code is returned and any
/// requested custom code is ignored.
///
/// # Errors
///
/// - 400 Bad Request if the URL or custom code is invalid
/// - 409 Conflict if the custom code is already taken
/// - 500 Internal Server Error on storage failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    shorten(&state, &headers, &payload.url, payload.custom_code.as_deref())
        .await
        .map(Json)
}

/// Query-string variant kept for the bundled front-end page.
///
/// # Endpoint
///
/// `GET /shortened?url=<url>[&code=<custom>]`
///
/// Same semantics and response body as [`shorten_handler`].
pub async fn legacy_shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ShortenQuery>,
) -> Result<Json<ShortenResponse>, AppError> {
    query.validate()?;

    shorten(&state, &headers, &query.url, query.code.as_deref())
        .await
        .map(Json)
}

async fn shorten(
    state: &AppState,
    headers: &HeaderMap,
    url: &str,
    custom_code: Option<&str>,
) -> Result<ShortenResponse, AppError> {
    let custom_code = custom_code.map(str::trim).filter(|c| !c.is_empty());
    if let Some(code) = custom_code {
        validate_custom_code(code)?;
    }

    let base = short_url_base(headers, state.base_url.as_deref())?;

    let code = state.link_service.assign(url, custom_code).await?;

    Ok(ShortenResponse {
        short_url: short_url(&base, &code),
        short_code: code,
    })
}
