//! In-memory implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// In-memory token repository
///
/// Deletes run under a single write lock, giving the same atomicity the
/// MySQL implementation gets from a conditional DELETE: concurrent deletes
/// of one hash see exactly one non-zero rows-affected result.
#[derive(Default)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MockTokenRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records (expired included), for test assertions
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the repository holds no records
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token_hash) {
            return Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            });
        }

        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_active_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .get(token_hash)
            .filter(|token| !token.is_expired())
            .cloned())
    }

    async fn delete_by_hash(&self, token_hash: &str) -> Result<u64, DomainError> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(token_hash).map_or(0, |_| 1))
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, token| token.user_id != user_id);
        Ok((before - tokens.len()) as u64)
    }

    async fn delete_expired_for_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, token| token.user_id != user_id || !token.is_expired());
        Ok((before - tokens.len()) as u64)
    }

    async fn delete_expired(&self) -> Result<u64, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, token| !token.is_expired());
        Ok((before - tokens.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn expired_token(user_id: Uuid) -> RefreshToken {
        let mut token = RefreshToken::new(user_id, format!("hash-{}", Uuid::new_v4()), 7);
        token.expires_at = Utc::now() - Duration::hours(1);
        token
    }

    #[tokio::test]
    async fn save_rejects_duplicate_hash() {
        let repo = MockTokenRepository::new();
        let token = RefreshToken::new(Uuid::new_v4(), "h1".into(), 7);
        repo.save(token.clone()).await.unwrap();
        assert!(repo.save(token).await.is_err());
    }

    #[tokio::test]
    async fn find_active_excludes_expired_rows() {
        let repo = MockTokenRepository::new();
        let token = expired_token(Uuid::new_v4());
        let hash = token.token_hash.clone();
        repo.save(token).await.unwrap();

        assert!(repo.find_active_by_hash(&hash).await.unwrap().is_none());
        // The row still exists; it is only invisible to active lookups.
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn delete_reports_rows_affected() {
        let repo = MockTokenRepository::new();
        let token = RefreshToken::new(Uuid::new_v4(), "h1".into(), 7);
        repo.save(token).await.unwrap();

        assert_eq!(repo.delete_by_hash("h1").await.unwrap(), 1);
        assert_eq!(repo.delete_by_hash("h1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn expired_purge_is_scoped_to_user() {
        let repo = MockTokenRepository::new();
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();
        repo.save(expired_token(user_a)).await.unwrap();
        repo.save(expired_token(user_b)).await.unwrap();

        assert_eq!(repo.delete_expired_for_user(user_a).await.unwrap(), 1);
        assert_eq!(repo.len().await, 1);

        assert_eq!(repo.delete_expired().await.unwrap(), 1);
        assert!(repo.is_empty().await);
    }
}
