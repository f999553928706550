//! MySQL implementation of the TokenRepository trait
//!
//! Refresh token records are hard-deleted on rotation, revocation and
//! purging; the table never carries tombstone flags. `delete_by_hash` maps
//! straight onto a single conditional DELETE, whose rows-affected count is
//! the atomicity guarantee the token service builds rotation on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tf_core::domain::entities::token::RefreshToken;
use tf_core::errors::DomainError;
use tf_core::repositories::TokenRepository;

use super::uuid_column;

/// MySQL-backed refresh token store
pub struct MySqlTokenRepository {
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Creates a new repository over the given pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        Ok(RefreshToken {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| DomainError::database("read token_hash", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database("read created_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::database("read expires_at", e))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (id, user_id, token_hash, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token_hash)
            .bind(token.created_at)
            .bind(token.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("save refresh token", e))?;

        Ok(token)
    }

    async fn find_active_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at
            FROM refresh_tokens
            WHERE token_hash = ? AND expires_at > NOW()
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("find refresh token", e))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn delete_by_hash(&self, token_hash: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete refresh token", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete user refresh tokens", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_expired_for_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let result =
            sqlx::query("DELETE FROM refresh_tokens WHERE user_id = ? AND expires_at <= NOW()")
                .bind(user_id.to_string())
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::database("delete expired user tokens", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_expired(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete expired tokens", e))?;

        Ok(result.rows_affected())
    }
}
