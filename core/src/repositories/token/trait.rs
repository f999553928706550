//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for refresh token records
///
/// This is the credential store consumed exclusively by the token service;
/// no other component writes refresh-token state. Records are deleted, not
/// flagged: rotation, revocation and expiry purging all remove rows, so a
/// consumed token is indistinguishable from one that never existed.
///
/// # Concurrency
/// `delete_by_hash` must be atomic from the store's perspective and report
/// the number of rows it removed. The token service relies on this as the
/// serialization point for rotation: of two concurrent deletes for the same
/// hash, exactly one observes a non-zero count.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a new refresh token record
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved record
    /// * `Err(DomainError)` - Save failed (e.g., duplicate token hash)
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a non-expired record by its hashed token value
    ///
    /// Expired rows must be excluded: a matching-but-expired record is
    /// reported as absent.
    async fn find_active_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Delete the record with the given hash
    ///
    /// # Returns
    /// * `Ok(n)` - Number of rows removed (0 when no record matched)
    async fn delete_by_hash(&self, token_hash: &str) -> Result<u64, DomainError>;

    /// Delete every record owned by the user (logout-everywhere)
    ///
    /// # Returns
    /// * `Ok(n)` - Number of rows removed
    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<u64, DomainError>;

    /// Delete the user's already-expired records (best-effort cleanup)
    async fn delete_expired_for_user(&self, user_id: Uuid) -> Result<u64, DomainError>;

    /// Delete all expired records regardless of owner (periodic sweep)
    async fn delete_expired(&self) -> Result<u64, DomainError>;
}
