//! Catalog listing.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::clothing::ClothingRepository;
use crate::error::Result;
use crate::models::ClothingItem;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ClothingResponse {
    pub success: bool,
    pub clothing: Vec<ClothingItem>,
}

/// `GET /clothing` - every catalog item, ordered by name.
///
/// # Errors
///
/// 500 if the catalog cannot be read.
pub async fn list(State(state): State<AppState>) -> Result<Json<ClothingResponse>> {
    let clothing = ClothingRepository::new(state.pool()).list().await?;
    Ok(Json(ClothingResponse {
        success: true,
        clothing,
    }))
}
