//! MySQL implementation of the UserRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tf_core::domain::entities::user::User;
use tf_core::errors::{AuthError, DomainError};
use tf_core::repositories::UserRepository;

use super::uuid_column;

/// MySQL-backed user store
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Creates a new repository over the given pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: uuid_column(row, "id")?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::database("read name", e))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database("read email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::database("read password_hash", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database("read created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database("read updated_at", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            // The unique index on email is the last line of defense against
            // concurrent registrations with the same address.
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AuthError::UserAlreadyExists { email: user.email }.into())
            }
            Err(e) => Err(DomainError::database("create user", e)),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("find user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("find user by email", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}
