//! Store initialization endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::schema::{self, InitReport};
use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(flatten)]
    pub report: InitReport,
}

/// `POST /init-db` - create tables and seed the catalog. Safe to repeat.
///
/// # Errors
///
/// 500 `Database initialization failed` if any statement fails.
pub async fn init_db(State(state): State<AppState>) -> Result<Json<InitResponse>> {
    let report = schema::initialize(state.pool())
        .await
        .map_err(AppError::InitFailed)?;

    tracing::info!(
        sample_data_inserted = report.sample_data_inserted,
        "Database initialized"
    );

    Ok(Json(InitResponse {
        success: true,
        message: "Database initialized successfully",
        report,
    }))
}
