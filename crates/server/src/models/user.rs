//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use tailor_core::{Email, UserId};

/// A registered user.
///
/// The password hash is deliberately absent; only the auth service sees it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Email,
    /// Bearer token issued at registration. Never rotated.
    pub token: Uuid,
    pub created_at: DateTime<Utc>,
}

/// The public view of a user returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: Email,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_has_exactly_three_fields() {
        let user = User {
            id: UserId::new(),
            username: "ada".to_string(),
            email: Email::parse("ada@example.com").unwrap(),
            token: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(UserProfile::from(&user)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["username"], "ada");
        assert_eq!(object["email"], "ada@example.com");
        assert_eq!(object["id"], user.id.to_string());
    }
}
