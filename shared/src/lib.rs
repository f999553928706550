//! Shared configuration and common types for the TechFlow backend
//!
//! This crate provides functionality used across all server crates:
//! - Typed configuration loaded from the environment
//! - The uniform API response envelope

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, Environment, GithubConfig, JwtConfig, ServerConfig,
};
pub use types::response::{ApiResponse, ErrorBody};
