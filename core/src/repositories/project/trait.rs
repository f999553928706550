//! Project repository trait, including GitHub repository link management.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::github_repository::{GithubRepoData, GithubRepository};
use crate::domain::entities::project::Project;
use crate::errors::DomainError;

/// Repository trait for Project entity persistence operations
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Create a new project
    async fn create(&self, project: Project) -> Result<Project, DomainError>;

    /// Find a project by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DomainError>;

    /// Update an existing project
    async fn update(&self, project: Project) -> Result<Project, DomainError>;

    /// Delete a project (cascades to its tasks and repository links)
    ///
    /// # Returns
    /// * `Ok(true)` - Project was deleted
    /// * `Ok(false)` - Project not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List the GitHub repositories linked to a project
    async fn find_linked_repositories(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<GithubRepository>, DomainError>;

    /// Replace the project's linked repositories with the given set
    async fn link_repositories(
        &self,
        project_id: Uuid,
        repos: Vec<GithubRepoData>,
    ) -> Result<Vec<GithubRepository>, DomainError>;

    /// Remove every repository link from the project
    async fn unlink_repositories(&self, project_id: Uuid) -> Result<(), DomainError>;
}
