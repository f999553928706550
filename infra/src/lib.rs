//! # TechFlow Infrastructure
//!
//! Concrete implementations of the persistence and external-service seams
//! declared in `tf_core`: MySQL repositories via SQLx, a Redis-backed cache,
//! and the GitHub REST API client.

pub mod cache;
pub mod database;
pub mod github;

/// Infrastructure-specific error types
///
/// Used for construction and health-check failures; once a component is
/// built, its operations report `tf_core::errors::DomainError` like every
/// other seam implementation.
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
