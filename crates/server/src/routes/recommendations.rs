//! Size recommendations.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use tailor_core::classify_size;

use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::middleware::RequireUser;
use crate::models::Recommendation;
use crate::services::recommendations::RecommendationService;
use crate::state::AppState;

/// Only chest and waist drive the classifier; other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub chest: Option<f64>,
    pub waist: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
}

/// `POST /recommendations` - annotate the catalog for the submitted body.
///
/// # Errors
///
/// 401/403 without a valid token, 400 without chest and waist, 500 if the
/// catalog cannot be read.
pub async fn recommend(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>> {
    let (Some(chest), Some(waist)) = (request.chest, request.waist) else {
        return Err(AppError::BadRequest(
            "chest and waist are required".to_string(),
        ));
    };

    let size = classify_size(chest, waist);
    let recommendations = RecommendationService::new(state.pool())
        .for_size(size)
        .await?;

    tracing::info!(user_id = %user.id, size = %size, "Recommendations generated");
    Ok(Json(RecommendationResponse {
        success: true,
        recommendations,
    }))
}
