//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Doubles as the identity resolver consumed by the token service during
/// verification: a token whose subject no longer resolves is invalid.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check if a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
