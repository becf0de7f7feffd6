//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The mapping store loads
/// - **503 Service Unavailable**: The store is unreadable or corrupt
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "12 mappings" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the mapping store by loading a snapshot.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.link_service.list().await {
        Ok(mappings) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} mappings", mappings.len())),
        },
        Err(e) => {
            // Paths and OS errors stay in the logs.
            tracing::error!(error = %e, "Health check: mapping store failed to load");
            CheckStatus {
                status: "error".to_string(),
                message: Some(format!("Store error: {}", e.kind())),
            }
        }
    }
}
