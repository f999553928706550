//! User account service: registration and credential verification

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;

/// Service for user account management
pub struct UserService<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Creates a new user service
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Registers a new user with a bcrypt-hashed password
    ///
    /// # Returns
    /// * `Err(AuthError::UserAlreadyExists)` - Email is taken
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        if self.users.exists_by_email(email).await? {
            return Err(AuthError::UserAlreadyExists {
                email: email.to_string(),
            }
            .into());
        }

        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
                message: format!("password hashing failed: {}", e),
            })?;

        self.users
            .create(User::new(
                name.to_string(),
                email.to_string(),
                password_hash,
            ))
            .await
    }

    /// Verifies login credentials and returns the matching user
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`, so
    /// the response does not reveal which accounts exist.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("password verification failed: {}", e),
            })?;

        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Finds a user by id
    pub async fn find_by_id(&self, id: uuid::Uuid) -> Result<Option<User>, DomainError> {
        self.users.find_by_id(id).await
    }
}
