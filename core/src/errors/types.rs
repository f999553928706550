//! Authentication, token and GitHub error taxonomies
//!
//! Error messages here are the server-side detail; user-facing wording and
//! status codes are assigned in the presentation layer.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no usable credential; the message states which of
    /// the bearer preconditions failed
    #[error("{message}")]
    Unauthorized { message: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with email '{email}' already exists")]
    UserAlreadyExists { email: String },
}

impl AuthError {
    /// Unauthorized with a specific reason
    pub fn unauthorized(message: impl Into<String>) -> Self {
        AuthError::Unauthorized {
            message: message.into(),
        }
    }
}

/// Token-related errors
///
/// `TokenExpired` is deliberately distinct from the invalid kinds: the two
/// map to different user-facing messages. Malformed and bad-signature stay
/// distinguishable internally but are surfaced identically.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// GitHub API errors
#[derive(Error, Debug)]
pub enum GithubError {
    #[error("GitHub user '{username}' not found")]
    UserNotFound { username: String },

    #[error("No public repositories found for user '{username}'")]
    NoPublicRepositories { username: String },

    #[error("GitHub API rate limit exceeded")]
    RateLimitExceeded,

    #[error("GitHub API returned status {status}")]
    ApiError { status: u16 },

    #[error("GitHub request failed: {message}")]
    RequestFailed { message: String },
}
