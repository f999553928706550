//! GitHub API abstraction
//!
//! The concrete HTTP client lives in the infrastructure crate; services see
//! only this trait, so tests can substitute canned repository lists.

use async_trait::async_trait;

use crate::domain::entities::github_repository::GithubRepoData;
use crate::errors::DomainError;

/// Client for fetching a user's public GitHub repositories
#[async_trait]
pub trait GithubClient: Send + Sync {
    /// Fetch the user's most popular public repositories
    ///
    /// # Returns
    /// * `Err(GithubError::UserNotFound)` - No such GitHub user
    /// * `Err(GithubError::RateLimitExceeded)` - API quota exhausted
    async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<GithubRepoData>, DomainError>;
}
