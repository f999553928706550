//! MySQL implementations of the core repository traits
//!
//! UUIDs are stored as CHAR(36) strings and enums as their uppercase string
//! representation, matching the migration schema.

pub mod project_repository_impl;
pub mod task_repository_impl;
pub mod token_repository_impl;
pub mod user_repository_impl;

pub use project_repository_impl::MySqlProjectRepository;
pub use task_repository_impl::MySqlTaskRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use sqlx::mysql::MySqlRow;
use sqlx::Row;
use tf_core::errors::DomainError;
use uuid::Uuid;

/// Reads a CHAR(36) column as a Uuid
pub(crate) fn uuid_column(row: &MySqlRow, column: &str) -> Result<Uuid, DomainError> {
    let value: String = row
        .try_get(column)
        .map_err(|e| DomainError::database("read uuid column", e))?;
    Uuid::parse_str(&value).map_err(|e| DomainError::Internal {
        message: format!("invalid UUID in column {}: {}", column, e),
    })
}
