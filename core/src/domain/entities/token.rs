//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the JWT access token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Subject email
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Creates claims for an access token
    ///
    /// Issuer, audience and lifetime come from static configuration held by
    /// the codec; nothing here reads ambient state.
    pub fn new_access_token(
        user_id: Uuid,
        email: &str,
        issuer: &str,
        audience: &str,
        lifetime_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(lifetime_minutes);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
        }
    }

    /// Checks if the claims have expired
    ///
    /// A token is expired at exactly its expiry instant.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token record persisted in the database
///
/// Only the SHA-256 hash of the opaque token value is stored. A record is
/// deleted outright when rotated, revoked, or purged; no tombstones are
/// kept, so terminal states are indistinguishable from "never existed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the record
    pub id: Uuid,

    /// User this token belongs to
    pub user_id: Uuid,

    /// SHA-256 hash of the opaque token value
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token record
    pub fn new(user_id: Uuid, token_hash: String, lifetime_days: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + Duration::days(lifetime_days),
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Token pair returned to the client after issuance or rotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// Opaque refresh token value
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, access_lifetime_minutes: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in: access_lifetime_minutes * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, "ada@example.com", "techflow", "techflow-api", 15);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.iss, "techflow");
        assert_eq!(claims.aud, "techflow-api");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert!(!claims.is_expired());
    }

    #[test]
    fn claims_expired_at_exact_instant() {
        let mut claims =
            Claims::new_access_token(Uuid::new_v4(), "a@b.c", "techflow", "techflow-api", 15);
        claims.exp = Utc::now().timestamp();
        assert!(claims.is_expired());
    }

    #[test]
    fn claims_user_id_parsing() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, "a@b.c", "techflow", "techflow-api", 15);
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn refresh_token_lifetime() {
        let token = RefreshToken::new(Uuid::new_v4(), "hash".into(), 7);
        assert!(!token.is_expired());
        assert_eq!((token.expires_at - token.created_at).num_days(), 7);
    }

    #[test]
    fn refresh_token_expiration() {
        let mut token = RefreshToken::new(Uuid::new_v4(), "hash".into(), 7);
        token.expires_at = Utc::now() - Duration::days(1);
        assert!(token.is_expired());
    }

    #[test]
    fn token_pair_expires_in_seconds() {
        let pair = TokenPair::new("access".into(), "refresh".into(), 15);
        assert_eq!(pair.expires_in, 900);
    }
}
