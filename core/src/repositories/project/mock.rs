//! In-memory implementation of ProjectRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::github_repository::{GithubRepoData, GithubRepository};
use crate::domain::entities::project::Project;
use crate::errors::DomainError;

use super::r#trait::ProjectRepository;

/// In-memory project repository
#[derive(Default)]
pub struct MockProjectRepository {
    projects: Arc<RwLock<HashMap<Uuid, Project>>>,
    links: Arc<RwLock<HashMap<Uuid, Vec<GithubRepository>>>>,
}

impl MockProjectRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn create(&self, project: Project) -> Result<Project, DomainError> {
        let mut projects = self.projects.write().await;
        projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id).cloned())
    }

    async fn update(&self, project: Project) -> Result<Project, DomainError> {
        let mut projects = self.projects.write().await;
        projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut projects = self.projects.write().await;
        self.links.write().await.remove(&id);
        Ok(projects.remove(&id).is_some())
    }

    async fn find_linked_repositories(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<GithubRepository>, DomainError> {
        let links = self.links.read().await;
        Ok(links.get(&project_id).cloned().unwrap_or_default())
    }

    async fn link_repositories(
        &self,
        project_id: Uuid,
        repos: Vec<GithubRepoData>,
    ) -> Result<Vec<GithubRepository>, DomainError> {
        let linked: Vec<GithubRepository> = repos
            .into_iter()
            .map(|data| GithubRepository::new(data, project_id))
            .collect();

        let mut links = self.links.write().await;
        links.insert(project_id, linked.clone());
        Ok(linked)
    }

    async fn unlink_repositories(&self, project_id: Uuid) -> Result<(), DomainError> {
        let mut links = self.links.write().await;
        links.remove(&project_id);
        Ok(())
    }
}
