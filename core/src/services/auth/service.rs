//! Authentication service orchestrating registration, login and the
//! refresh/logout flows.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;
use crate::services::user::UserService;

/// Authentication service
///
/// Thin orchestration over [`UserService`] and [`TokenService`]; it holds no
/// state of its own.
pub struct AuthService<T: TokenRepository, U: UserRepository> {
    users: Arc<UserService<U>>,
    tokens: Arc<TokenService<T, U>>,
}

impl<T: TokenRepository, U: UserRepository> AuthService<T, U> {
    /// Creates a new auth service
    pub fn new(users: Arc<UserService<U>>, tokens: Arc<TokenService<T, U>>) -> Self {
        Self { users, tokens }
    }

    /// Registers a new account and issues its first token pair
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(User, TokenPair), DomainError> {
        let user = self.users.create_user(name, email, password).await?;
        let pair = self.tokens.issue_tokens(&user).await?;
        Ok((user, pair))
    }

    /// Verifies credentials and issues a fresh token pair
    ///
    /// Issuance itself sweeps the account's stale refresh records.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, TokenPair), DomainError> {
        let user = self.users.verify_credentials(email, password).await?;
        let pair = self.tokens.issue_tokens(&user).await?;
        Ok((user, pair))
    }

    /// Rotates a refresh token into a new pair
    ///
    /// Unknown, expired and already-consumed values all surface as
    /// `InvalidRefreshToken`.
    pub async fn refresh(&self, refresh_value: &str) -> Result<TokenPair, DomainError> {
        self.tokens
            .rotate_tokens(refresh_value)
            .await?
            .ok_or_else(|| TokenError::InvalidRefreshToken.into())
    }

    /// Logs out one session by revoking its refresh token
    ///
    /// Returns whether a live token was actually revoked; the HTTP layer
    /// reports success either way.
    pub async fn logout(&self, refresh_value: &str) -> bool {
        self.tokens.revoke_token(refresh_value).await
    }

    /// Logs the user out everywhere
    pub async fn logout_all(&self, user_id: Uuid) -> bool {
        self.tokens.revoke_all_user_tokens(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AuthError;
    use crate::repositories::{MockTokenRepository, MockUserRepository};
    use crate::services::token::TokenServiceConfig;

    fn service() -> AuthService<MockTokenRepository, MockUserRepository> {
        let user_repo = Arc::new(MockUserRepository::new());
        let token_repo = Arc::new(MockTokenRepository::new());
        let users = Arc::new(UserService::new(Arc::clone(&user_repo)));
        let tokens = Arc::new(TokenService::new(
            token_repo,
            user_repo,
            TokenServiceConfig::default(),
        ));
        AuthService::new(users, tokens)
    }

    #[tokio::test]
    async fn register_login_refresh_logout_flow() {
        let auth = service();

        let (user, first) = auth.register("Ada", "ada@example.com", "s3cret-pw").await.unwrap();
        let (_, second) = auth.login("ada@example.com", "s3cret-pw").await.unwrap();

        let rotated = auth.refresh(&second.refresh_token).await.unwrap();
        assert_ne!(rotated.refresh_token, second.refresh_token);

        // The consumed value is dead.
        assert!(matches!(
            auth.refresh(&second.refresh_token).await.unwrap_err(),
            DomainError::Token(TokenError::InvalidRefreshToken)
        ));

        assert!(auth.logout(&rotated.refresh_token).await);
        assert!(auth.logout_all(user.id).await);
        assert!(!auth.logout(&first.refresh_token).await);
    }

    #[tokio::test]
    async fn login_with_wrong_password_fails() {
        let auth = service();
        auth.register("Ada", "ada@example.com", "s3cret-pw").await.unwrap();

        assert!(matches!(
            auth.login("ada@example.com", "wrong").await.unwrap_err(),
            DomainError::Auth(AuthError::InvalidCredentials)
        ));
    }
}
