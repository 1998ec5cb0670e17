//! Registration and login.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::{User, UserProfile};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration form. Absent fields deserialize as empty and are rejected.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login form.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful registration or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: Uuid,
    pub user: UserProfile,
}

impl From<User> for AuthResponse {
    fn from(user: User) -> Self {
        Self {
            success: true,
            token: user.token,
            user: UserProfile::from(&user),
        }
    }
}

/// `POST /auth/register`
///
/// # Errors
///
/// 400 when a field is missing or the email is malformed; `success: false`
/// with HTTP 200 when the email is already registered.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    if [&form.username, &form.email, &form.password]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    let user = AuthService::new(state.pool())
        .register(&form.username, &form.email, &form.password)
        .await?;

    Ok(Json(user.into()))
}

/// `POST /auth/login`
///
/// # Errors
///
/// 400 when email or password is missing; `success: false` with HTTP 200
/// when the credentials do not match.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return Err(AppError::BadRequest(
            "Missing email or password".to_string(),
        ));
    }

    let user = AuthService::new(state.pool())
        .login(&form.email, &form.password)
        .await?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(user.into()))
}
