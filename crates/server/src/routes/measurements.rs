//! Measurement submission, history and simulated capture.

use axum::{Json, extract::State};
use serde::Serialize;

use tailor_core::simulator::simulate_measurements;
use tailor_core::{BodyMeasurements, SizeLabel};

use crate::db::measurements::MeasurementRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::middleware::RequireUser;
use crate::models::Measurement;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MeasurementResponse {
    pub success: bool,
    pub measurement: Measurement,
}

#[derive(Debug, Serialize)]
pub struct MeasurementListResponse {
    pub success: bool,
    pub measurements: Vec<Measurement>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedMeasurementResponse {
    pub success: bool,
    pub measurement: BodyMeasurements,
    pub recommended_size: SizeLabel,
}

/// `POST /measurements` - store a measurement set for the caller.
///
/// # Errors
///
/// 401/403 without a valid token, 400 if a value is missing or cannot be
/// stored, 500 if the insert fails.
pub async fn create(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    ApiJson(values): ApiJson<BodyMeasurements>,
) -> Result<Json<MeasurementResponse>> {
    values.validate()?;

    let measurement = MeasurementRepository::new(state.pool())
        .create(user.id, &values)
        .await?;

    tracing::info!(user_id = %user.id, measurement_id = %measurement.id, "Measurement saved");
    Ok(Json(MeasurementResponse {
        success: true,
        measurement,
    }))
}

/// `GET /measurements` - the caller's measurements, newest first.
///
/// # Errors
///
/// 401/403 without a valid token, 500 if the query fails.
pub async fn list(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<MeasurementListResponse>> {
    let measurements = MeasurementRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    Ok(Json(MeasurementListResponse {
        success: true,
        measurements,
    }))
}

/// `POST /measurements/simulate` - fake a camera scan.
///
/// Waits for the configured scan delay, then returns random plausible
/// measurements with their recommended size. Nothing is stored.
///
/// # Errors
///
/// 401/403 without a valid token.
pub async fn simulate(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<SimulatedMeasurementResponse>> {
    tokio::time::sleep(state.config().simulation_delay).await;

    let measurement = simulate_measurements(&mut rand::rng());
    tracing::debug!(user_id = %user.id, "Simulated measurement capture");

    Ok(Json(SimulatedMeasurementResponse {
        success: true,
        recommended_size: measurement.recommended_size(),
        measurement,
    }))
}
