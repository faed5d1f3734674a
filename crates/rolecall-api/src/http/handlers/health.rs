//! Health check endpoint.

use axum::Json;
use axum::extract::State;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /health - Liveness check including database reachability.
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    sqlx::query("SELECT 1")
        .fetch_one(&state.db_pool.reader)
        .await
        .map_err(|e| AppError::Internal(format!("database unavailable: {e}")))?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
