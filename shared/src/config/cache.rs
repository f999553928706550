//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Default TTL for cache entries in seconds
    pub default_ttl: u64,

    /// TTL for cached GitHub repository listings in seconds
    pub github_repos_ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            default_ttl: 300,
            github_repos_ttl: 600,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            default_ttl: std::env::var("CACHE_DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl),
            github_repos_ttl: std::env::var("CACHE_GITHUB_REPOS_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.github_repos_ttl),
        }
    }

    /// Cache key for a GitHub user's repository listing
    pub fn github_repos_key(username: &str) -> String {
        format!("github:repos:{}", username.to_lowercase())
    }
}
