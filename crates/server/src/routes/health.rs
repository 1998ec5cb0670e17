//! Health check.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db;
use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
}

/// `GET /health` - verifies database connectivity.
///
/// # Errors
///
/// 500 `Database connection error` if the database does not answer.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    db::ping(state.pool())
        .await
        .map_err(AppError::DatabaseUnavailable)?;

    Ok(Json(HealthResponse {
        success: true,
        message: "Server and database are running",
    }))
}
