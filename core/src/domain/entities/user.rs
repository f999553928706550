//! User entity representing a registered account in the TechFlow system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// The password is stored as a bcrypt hash and is never serialized into
/// API responses; presentation-layer DTOs carry the public fields only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique across the system)
    pub email: String,

    /// Bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a freshly generated identifier
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_unique_id() {
        let a = User::new("Ada".into(), "ada@example.com".into(), "hash".into());
        let b = User::new("Ada".into(), "ada@example.com".into(), "hash".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let user = User::new("Ada".into(), "ada@example.com".into(), "secret-hash".into());
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("ada@example.com"));
    }
}
