//! Project service: CRUD plus GitHub repository linking
//!
//! Ownership is enforced here, not in the HTTP layer. A project that exists
//! but belongs to someone else is reported as not found, so responses do not
//! reveal which ids exist.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::github_repository::GithubRepository;
use crate::domain::entities::project::Project;
use crate::errors::{DomainError, GithubError};
use crate::repositories::ProjectRepository;
use crate::services::github::GithubClient;

/// A project together with its linked GitHub repositories
#[derive(Debug, Clone)]
pub struct ProjectDetails {
    pub project: Project,
    pub github_repositories: Vec<GithubRepository>,
}

/// Service for project management
pub struct ProjectService<P: ProjectRepository> {
    projects: Arc<P>,
    github: Arc<dyn GithubClient>,
}

impl<P: ProjectRepository> ProjectService<P> {
    /// Creates a new project service
    pub fn new(projects: Arc<P>, github: Arc<dyn GithubClient>) -> Self {
        Self { projects, github }
    }

    /// Creates a project owned by the user
    pub async fn create_project(
        &self,
        user_id: Uuid,
        name: &str,
        description: Option<String>,
    ) -> Result<Project, DomainError> {
        self.projects
            .create(Project::new(name.to_string(), description, user_id))
            .await
    }

    /// Fetches a project the user owns, with its linked repositories
    pub async fn get_project(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<ProjectDetails, DomainError> {
        let project = self.owned_project(project_id, user_id).await?;
        let github_repositories = self.projects.find_linked_repositories(project_id).await?;
        Ok(ProjectDetails {
            project,
            github_repositories,
        })
    }

    /// Applies a partial update to a project the user owns
    pub async fn update_project(
        &self,
        project_id: Uuid,
        user_id: Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Project, DomainError> {
        let mut project = self.owned_project(project_id, user_id).await?;
        project.apply_update(name, description);
        self.projects.update(project).await
    }

    /// Deletes a project the user owns, along with its tasks and links
    pub async fn delete_project(&self, project_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        self.owned_project(project_id, user_id).await?;
        self.projects.delete(project_id).await?;
        Ok(())
    }

    /// Links the GitHub user's public repositories to the project
    ///
    /// Fetches the most popular public repositories for `username` and
    /// replaces any existing links with them.
    pub async fn link_github_repositories(
        &self,
        project_id: Uuid,
        user_id: Uuid,
        username: &str,
    ) -> Result<ProjectDetails, DomainError> {
        let project = self.owned_project(project_id, user_id).await?;

        let repos = self.github.fetch_user_repositories(username).await?;
        if repos.is_empty() {
            return Err(GithubError::NoPublicRepositories {
                username: username.to_string(),
            }
            .into());
        }

        let github_repositories = self.projects.link_repositories(project_id, repos).await?;
        Ok(ProjectDetails {
            project,
            github_repositories,
        })
    }

    /// Removes every GitHub repository link from the project
    pub async fn unlink_github_repositories(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), DomainError> {
        self.owned_project(project_id, user_id).await?;
        self.projects.unlink_repositories(project_id).await
    }

    /// Loads a project and checks ownership
    pub(crate) async fn owned_project(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<Project, DomainError> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Project",
                id: project_id.to_string(),
            })?;

        if !project.is_owned_by(user_id) {
            return Err(DomainError::NotFound {
                entity: "Project",
                id: project_id.to_string(),
            });
        }

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::domain::entities::github_repository::GithubRepoData;
    use crate::repositories::MockProjectRepository;

    struct FakeGithub {
        repos: Vec<GithubRepoData>,
    }

    #[async_trait]
    impl GithubClient for FakeGithub {
        async fn fetch_user_repositories(
            &self,
            username: &str,
        ) -> Result<Vec<GithubRepoData>, DomainError> {
            if username == "ghost" {
                return Err(GithubError::UserNotFound {
                    username: username.to_string(),
                }
                .into());
            }
            Ok(self.repos.clone())
        }
    }

    fn repo_data(name: &str, stars: i64) -> GithubRepoData {
        GithubRepoData {
            github_id: stars,
            name: name.to_string(),
            full_name: format!("octocat/{}", name),
            description: None,
            html_url: format!("https://github.com/octocat/{}", name),
            language: Some("Rust".into()),
            stargazers: stars,
        }
    }

    fn service(repos: Vec<GithubRepoData>) -> ProjectService<MockProjectRepository> {
        ProjectService::new(
            Arc::new(MockProjectRepository::new()),
            Arc::new(FakeGithub { repos }),
        )
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let service = service(vec![]);
        let owner = Uuid::new_v4();

        let project = service
            .create_project(owner, "backend", Some("api rewrite".into()))
            .await
            .unwrap();

        let details = service.get_project(project.id, owner).await.unwrap();
        assert_eq!(details.project.name, "backend");
        assert!(details.github_repositories.is_empty());

        let updated = service
            .update_project(project.id, owner, Some("backend-v2".into()), None)
            .await
            .unwrap();
        assert_eq!(updated.name, "backend-v2");
        assert_eq!(updated.description.as_deref(), Some("api rewrite"));

        service.delete_project(project.id, owner).await.unwrap();
        assert!(service.get_project(project.id, owner).await.is_err());
    }

    #[tokio::test]
    async fn other_users_projects_look_absent() {
        let service = service(vec![]);
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let project = service.create_project(owner, "backend", None).await.unwrap();

        assert!(matches!(
            service.get_project(project.id, stranger).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
        assert!(service.delete_project(project.id, stranger).await.is_err());
        // Still there for the owner.
        service.get_project(project.id, owner).await.unwrap();
    }

    #[tokio::test]
    async fn linking_replaces_previous_links() {
        let service = service(vec![repo_data("alpha", 10), repo_data("beta", 5)]);
        let owner = Uuid::new_v4();
        let project = service.create_project(owner, "backend", None).await.unwrap();

        let details = service
            .link_github_repositories(project.id, owner, "octocat")
            .await
            .unwrap();
        assert_eq!(details.github_repositories.len(), 2);

        let relinked = service
            .link_github_repositories(project.id, owner, "octocat")
            .await
            .unwrap();
        assert_eq!(relinked.github_repositories.len(), 2);

        service
            .unlink_github_repositories(project.id, owner)
            .await
            .unwrap();
        let after = service.get_project(project.id, owner).await.unwrap();
        assert!(after.github_repositories.is_empty());
    }

    #[tokio::test]
    async fn linking_unknown_github_user_fails() {
        let service = service(vec![]);
        let owner = Uuid::new_v4();
        let project = service.create_project(owner, "backend", None).await.unwrap();

        assert!(matches!(
            service
                .link_github_repositories(project.id, owner, "ghost")
                .await
                .unwrap_err(),
            DomainError::Github(GithubError::UserNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn linking_with_no_public_repos_fails() {
        let service = service(vec![]);
        let owner = Uuid::new_v4();
        let project = service.create_project(owner, "backend", None).await.unwrap();

        assert!(matches!(
            service
                .link_github_repositories(project.id, owner, "octocat")
                .await
                .unwrap_err(),
            DomainError::Github(GithubError::NoPublicRepositories { .. })
        ));
    }
}
