//! Bearer token authentication.
//!
//! Clients send `Authorization: Bearer <token>` where the token is the UUID
//! issued at registration. Only the second word of the header is read, so
//! the scheme name is not checked. The lookup is an equality match on the
//! stored token; nothing expires.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

use crate::error::{AppError, set_sentry_user};
use crate::models::User;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// Rejects with 401 when no token is presented and 403 when the token is
/// malformed or unknown.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireUser(user): RequireUser) -> String {
///     format!("Hello, {}!", user.username)
/// }
/// ```
pub struct RequireUser(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("Access token required".to_string()))?;

        let user = AuthService::new(state.pool()).authenticate(token).await?;
        set_sentry_user(&user.id);

        Ok(Self(user))
    }
}

/// Extract the token from an `Authorization: <scheme> <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    value.split_whitespace().nth(1)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(value) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let h = headers("Bearer 9f1c7a4e-0000-4000-8000-000000000000");
        assert_eq!(
            bearer_token(&h),
            Some("9f1c7a4e-0000-4000-8000-000000000000")
        );
        assert_eq!(bearer_token(&headers("bearer abc")), Some("abc"));
    }

    #[test]
    fn test_missing_or_empty_token() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&headers("Bearer   ")), None);
        assert_eq!(bearer_token(&headers("abc")), None);
    }

    #[test]
    fn test_scheme_name_is_not_checked() {
        let h = headers("Token 9f1c7a4e-0000-4000-8000-000000000000");
        assert_eq!(
            bearer_token(&h),
            Some("9f1c7a4e-0000-4000-8000-000000000000")
        );
        // Trailing words are ignored
        assert_eq!(bearer_token(&headers("Bearer abc def")), Some("abc"));
    }
}
