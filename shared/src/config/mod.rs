//! Configuration module with business-specific sub-modules
//!
//! Configuration is organized into logical areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `cache` - Redis connection and cache TTL configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `github` - GitHub REST API configuration
//! - `server` - HTTP server bind configuration
//!
//! All values are read once at process start; nothing is hot-reloaded.

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod github;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use github::GithubConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Redis cache configuration
    pub cache: CacheConfig,

    /// GitHub API configuration
    pub github: GithubConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            cache: CacheConfig::default(),
            github: GithubConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            cache: CacheConfig::from_env(),
            github: GithubConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_development() {
        let config = AppConfig::default();
        assert!(config.environment.is_development());
        assert_eq!(config.server.port, 3001);
    }
}
