//! Project request and response DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use tf_core::domain::entities::github_repository::GithubRepository;
use tf_core::domain::entities::project::Project;
use tf_core::services::ProjectDetails;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// Project with its linked GitHub repositories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    #[serde(flatten)]
    pub project: Project,
    pub github_repositories: Vec<GithubRepository>,
}

impl From<ProjectDetails> for ProjectResponse {
    fn from(details: ProjectDetails) -> Self {
        Self {
            project: details.project,
            github_repositories: details.github_repositories,
        }
    }
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            project,
            github_repositories: Vec::new(),
        }
    }
}
