//! HTTP implementation of the GithubClient trait
//!
//! Fetches a user's public repositories from the GitHub REST API with a
//! cache-aside layer in front: listings are served from the cache when
//! present and written back with a TTL after a successful fetch. Cache
//! failures degrade to a plain API call.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

use tf_core::domain::entities::github_repository::GithubRepoData;
use tf_core::errors::{DomainError, GithubError};
use tf_core::services::{CacheService, GithubClient};
use tf_shared::config::{CacheConfig, GithubConfig};

/// GitHub requires a User-Agent header on every API request
const USER_AGENT: &str = "techflow";

/// Repository entry as returned by `GET /users/{username}/repos`
#[derive(Debug, Deserialize)]
struct ApiRepository {
    id: i64,
    name: String,
    full_name: String,
    description: Option<String>,
    html_url: String,
    language: Option<String>,
    stargazers_count: i64,
    private: bool,
}

/// GitHub REST API client with cache-aside repository listings
pub struct GithubHttpClient {
    http: reqwest::Client,
    cache: Arc<dyn CacheService>,
    base_url: String,
    per_page: u8,
    cache_ttl: u64,
}

impl GithubHttpClient {
    /// Creates a new client
    pub fn new(
        github_config: &GithubConfig,
        cache_config: &CacheConfig,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            cache,
            base_url: github_config.base_url.trim_end_matches('/').to_string(),
            per_page: github_config.per_page,
            cache_ttl: cache_config.github_repos_ttl,
        }
    }

    async fn fetch_from_api(&self, username: &str) -> Result<Vec<GithubRepoData>, DomainError> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&direction=desc&per_page={}",
            self.base_url, username, self.per_page
        );

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| GithubError::RequestFailed {
                message: e.to_string(),
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(GithubError::UserNotFound {
                    username: username.to_string(),
                }
                .into())
            }
            StatusCode::FORBIDDEN => return Err(GithubError::RateLimitExceeded.into()),
            status if !status.is_success() => {
                return Err(GithubError::ApiError {
                    status: status.as_u16(),
                }
                .into())
            }
            _ => {}
        }

        let repositories: Vec<ApiRepository> =
            response.json().await.map_err(|e| GithubError::RequestFailed {
                message: format!("invalid response body: {}", e),
            })?;

        Ok(repositories
            .into_iter()
            .filter(|repo| !repo.private)
            .map(|repo| GithubRepoData {
                github_id: repo.id,
                name: repo.name,
                full_name: repo.full_name,
                description: repo.description,
                html_url: repo.html_url,
                language: repo.language,
                stargazers: repo.stargazers_count,
            })
            .take(self.per_page as usize)
            .collect())
    }
}

#[async_trait]
impl GithubClient for GithubHttpClient {
    async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<GithubRepoData>, DomainError> {
        let cache_key = CacheConfig::github_repos_key(username);

        if let Some(cached) = self.cache.get(&cache_key).await {
            match serde_json::from_str::<Vec<GithubRepoData>>(&cached) {
                Ok(repos) => {
                    tracing::debug!(username, "github listing served from cache");
                    return Ok(repos);
                }
                Err(e) => {
                    // Stale or corrupt entry; drop it and refetch.
                    tracing::warn!(error = %e, username, "discarding bad cache entry");
                    self.cache.delete(&cache_key).await;
                }
            }
        }

        let repos = self.fetch_from_api(username).await?;

        if let Ok(serialized) = serde_json::to_string(&repos) {
            self.cache.set(&cache_key, &serialized, self.cache_ttl).await;
        }

        Ok(repos)
    }
}
