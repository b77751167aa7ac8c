use chrono::{DateTime, Utc};
/// User model
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User entity - account identity
///
/// No `Serialize` impl: the password hash must not leave the crate.
/// External callers get [`PublicUser`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub is_active: bool,
}

impl User {
    /// Narrow this account to its externally visible fields
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "luke".to_string(),
            first_name: "Luke".to_string(),
            last_name: "Skywalker".to_string(),
            email: "luke@rebellion.org".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_public_projection_fields() {
        let user = sample_user();
        let json = serde_json::to_value(user.to_public()).unwrap();

        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), 4);
        for key in ["id", "email", "username", "is_active"] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
    }

    #[test]
    fn test_public_projection_never_carries_password() {
        let user = sample_user();
        let rendered = serde_json::to_string(&user.to_public()).unwrap();

        assert!(!rendered.contains("password"));
        assert!(!rendered.contains("argon2id"));
    }
}
