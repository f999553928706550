//! GitHub REST API configuration

use serde::{Deserialize, Serialize};

/// GitHub API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    /// Base URL of the GitHub REST API
    pub base_url: String,

    /// Number of repositories fetched per user (most recently updated first)
    pub per_page: u8,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://api.github.com"),
            per_page: 5,
        }
    }
}

impl GithubConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("GITHUB_BASE_URL").unwrap_or(defaults.base_url),
            per_page: std::env::var("GITHUB_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.per_page),
        }
    }
}
