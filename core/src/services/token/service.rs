//! Token lifecycle service
//!
//! Owns issuance, verification, rotation and revocation of the access/refresh
//! token pair. Refresh tokens are opaque random strings; only their SHA-256
//! hash touches storage, and a consumed record is deleted, never flagged.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{TokenRepository, UserRepository};

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Length of the opaque refresh token value
const REFRESH_TOKEN_LENGTH: usize = 32;

/// Verifies bearer tokens on behalf of the request gate
///
/// The HTTP middleware holds this as a trait object so it stays decoupled
/// from the concrete repository types behind the service.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify an access token and resolve the user it identifies
    async fn verify(&self, access_token: &str) -> Result<User, DomainError>;
}

/// Service for managing the JWT access / refresh token lifecycle
pub struct TokenService<T: TokenRepository, U: UserRepository> {
    tokens: Arc<T>,
    users: Arc<U>,
    config: TokenServiceConfig,
    codec: TokenCodec,
}

impl<T: TokenRepository, U: UserRepository> TokenService<T, U> {
    /// Creates a new token service
    pub fn new(tokens: Arc<T>, users: Arc<U>, config: TokenServiceConfig) -> Self {
        let codec = TokenCodec::new(&config.jwt_secret, &config.issuer, &config.audience);
        Self {
            tokens,
            users,
            config,
            codec,
        }
    }

    /// Issues a fresh access/refresh token pair for the user
    ///
    /// The user's expired refresh records are swept first, best-effort, so
    /// every issuance path cleans up after itself. The returned refresh token
    /// is the only copy of the opaque value; the store keeps its hash.
    pub async fn issue_tokens(&self, user: &User) -> Result<TokenPair, DomainError> {
        self.purge_expired_for_user(user.id).await;

        let claims = Claims::new_access_token(
            user.id,
            &user.email,
            &self.config.issuer,
            &self.config.audience,
            self.config.access_token_lifetime_minutes,
        );
        let access_token = self.codec.encode(&claims)?;

        let refresh_value = generate_refresh_value();
        let record = RefreshToken::new(
            user.id,
            hash_token(&refresh_value),
            self.config.refresh_token_lifetime_days,
        );
        self.tokens
            .save(record)
            .await
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(TokenPair::new(
            access_token,
            refresh_value,
            self.config.access_token_lifetime_minutes,
        ))
    }

    /// Verifies an access token and resolves the user it identifies
    ///
    /// A validly-signed token whose subject no longer exists is reported as
    /// invalid, the same as a malformed one, so verification is not a
    /// user-existence oracle.
    ///
    /// # Returns
    /// * `Ok(User)` - Token is valid and the user still exists
    /// * `Err(DomainError::Token(TokenExpired))` - Past its expiry instant
    /// * `Err(DomainError::Token(_))` - Malformed, bad signature or dead subject
    pub async fn verify_access_token(&self, access_token: &str) -> Result<User, DomainError> {
        let claims = self.codec.decode(access_token)?;
        let user_id = claims
            .user_id()
            .map_err(|_| TokenError::InvalidTokenFormat)?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| TokenError::InvalidTokenFormat.into())
    }

    /// Rotates a refresh token, consuming it and issuing a new pair
    ///
    /// The conditional delete is the serialization point: of two concurrent
    /// rotations with the same value, exactly one observes rows-affected > 0
    /// and proceeds; the other gets `Ok(None)`. Unknown, expired and
    /// already-consumed values are all `Ok(None)` as well, so a caller
    /// cannot distinguish them.
    pub async fn rotate_tokens(&self, refresh_value: &str) -> Result<Option<TokenPair>, DomainError> {
        let token_hash = hash_token(refresh_value);

        let record = match self.tokens.find_active_by_hash(&token_hash).await? {
            Some(record) => record,
            None => return Ok(None),
        };

        if self.tokens.delete_by_hash(&token_hash).await? == 0 {
            // Lost the race to a concurrent rotation of the same value.
            return Ok(None);
        }

        let user = match self.users.find_by_id(record.user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        self.issue_tokens(&user).await.map(Some)
    }

    /// Revokes a single refresh token (logout)
    ///
    /// Best-effort: store failures are logged and reported as `false`, never
    /// propagated, so logout cannot fail from the client's perspective.
    pub async fn revoke_token(&self, refresh_value: &str) -> bool {
        let token_hash = hash_token(refresh_value);
        match self.tokens.delete_by_hash(&token_hash).await {
            Ok(rows) => rows > 0,
            Err(e) => {
                tracing::warn!(error = %e, "refresh token revocation failed");
                false
            }
        }
    }

    /// Revokes every refresh token the user holds (logout everywhere)
    ///
    /// Best-effort, like [`revoke_token`](Self::revoke_token).
    pub async fn revoke_all_user_tokens(&self, user_id: Uuid) -> bool {
        match self.tokens.delete_all_for_user(user_id).await {
            Ok(rows) => rows > 0,
            Err(e) => {
                tracing::warn!(error = %e, %user_id, "bulk token revocation failed");
                false
            }
        }
    }

    /// Deletes all expired refresh token records
    pub async fn purge_expired_tokens(&self) -> Result<u64, DomainError> {
        self.tokens.delete_expired().await
    }

    /// Deletes the user's expired records, invoked on every issuance
    ///
    /// Best-effort: a store failure is logged and reported as zero rows.
    pub async fn purge_expired_for_user(&self, user_id: Uuid) -> u64 {
        match self.tokens.delete_expired_for_user(user_id).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(error = %e, %user_id, "per-user expired token purge failed");
                0
            }
        }
    }
}

#[async_trait]
impl<T: TokenRepository, U: UserRepository> TokenVerifier for TokenService<T, U> {
    async fn verify(&self, access_token: &str) -> Result<User, DomainError> {
        self.verify_access_token(access_token).await
    }
}

/// Hashes an opaque refresh token value for storage and lookup
pub(crate) fn hash_token(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generates a random alphanumeric refresh token value
fn generate_refresh_value() -> String {
    let mut rng = rand::thread_rng();
    (0..REFRESH_TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..62);
            match idx {
                0..10 => (b'0' + idx) as char,
                10..36 => (b'a' + idx - 10) as char,
                36..62 => (b'A' + idx - 36) as char,
                _ => unreachable!(),
            }
        })
        .collect()
}
