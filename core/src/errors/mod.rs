//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, GithubError, TokenError};

use thiserror::Error;

/// Core domain errors
///
/// Verification and issuance failures are represented as data (typed
/// variants) so callers branch on the variant instead of catching by
/// exception type. The HTTP layer translates these into the uniform API
/// error envelope.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Github(#[from] GithubError),
}

impl DomainError {
    /// Shorthand for a database failure with context
    pub fn database(operation: &str, source: impl std::fmt::Display) -> Self {
        DomainError::Database {
            message: format!("{}: {}", operation, source),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
