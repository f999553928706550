//! GitHub repository entity: a public repository linked to a project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A GitHub repository linked to a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubRepository {
    /// Unique identifier for the link record
    pub id: Uuid,

    /// Numeric repository ID assigned by GitHub
    pub github_id: i64,

    /// Repository name
    pub name: String,

    /// Repository full name (`owner/name`)
    pub full_name: String,

    /// Repository description
    pub description: Option<String>,

    /// Web URL of the repository
    pub html_url: String,

    /// Primary language, if detected by GitHub
    pub language: Option<String>,

    /// Stargazer count at link time
    pub stargazers: i64,

    /// Project this repository is linked to
    pub project_id: Uuid,

    /// Timestamp when the link was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the link was last updated
    pub updated_at: DateTime<Utc>,
}

impl GithubRepository {
    /// Creates a link record from fetched repository data
    pub fn new(data: GithubRepoData, project_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            github_id: data.github_id,
            name: data.name,
            full_name: data.full_name,
            description: data.description,
            html_url: data.html_url,
            language: data.language,
            stargazers: data.stargazers,
            project_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository data as fetched from the GitHub API, before it is linked
/// to any project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubRepoData {
    pub github_id: i64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_record_carries_fetched_fields() {
        let data = GithubRepoData {
            github_id: 42,
            name: "techflow".into(),
            full_name: "octocat/techflow".into(),
            description: None,
            html_url: "https://github.com/octocat/techflow".into(),
            language: Some("Rust".into()),
            stargazers: 7,
        };
        let project_id = Uuid::new_v4();
        let repo = GithubRepository::new(data, project_id);
        assert_eq!(repo.github_id, 42);
        assert_eq!(repo.project_id, project_id);
        assert_eq!(repo.language.as_deref(), Some("Rust"));
    }
}
