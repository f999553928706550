//! MySQL implementation of the ProjectRepository trait
//!
//! Repository links live in the `github_repositories` table. Relinking is a
//! delete-then-insert inside one transaction, so readers never observe a
//! half-replaced set. Tasks and links cascade on project deletion via the
//! schema's foreign keys.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tf_core::domain::entities::github_repository::{GithubRepoData, GithubRepository};
use tf_core::domain::entities::project::Project;
use tf_core::errors::DomainError;
use tf_core::repositories::ProjectRepository;

use super::uuid_column;

/// MySQL-backed project store
pub struct MySqlProjectRepository {
    pool: MySqlPool,
}

impl MySqlProjectRepository {
    /// Creates a new repository over the given pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_project(row: &sqlx::mysql::MySqlRow) -> Result<Project, DomainError> {
        Ok(Project {
            id: uuid_column(row, "id")?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::database("read name", e))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::database("read description", e))?,
            user_id: uuid_column(row, "user_id")?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database("read created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database("read updated_at", e))?,
        })
    }

    fn row_to_repository(row: &sqlx::mysql::MySqlRow) -> Result<GithubRepository, DomainError> {
        Ok(GithubRepository {
            id: uuid_column(row, "id")?,
            github_id: row
                .try_get("github_id")
                .map_err(|e| DomainError::database("read github_id", e))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::database("read name", e))?,
            full_name: row
                .try_get("full_name")
                .map_err(|e| DomainError::database("read full_name", e))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::database("read description", e))?,
            html_url: row
                .try_get("html_url")
                .map_err(|e| DomainError::database("read html_url", e))?,
            language: row
                .try_get("language")
                .map_err(|e| DomainError::database("read language", e))?,
            stargazers: row
                .try_get("stargazers")
                .map_err(|e| DomainError::database("read stargazers", e))?,
            project_id: uuid_column(row, "project_id")?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database("read created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database("read updated_at", e))?,
        })
    }
}

#[async_trait]
impl ProjectRepository for MySqlProjectRepository {
    async fn create(&self, project: Project) -> Result<Project, DomainError> {
        let query = r#"
            INSERT INTO projects (id, name, description, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(project.id.to_string())
            .bind(&project.name)
            .bind(&project.description)
            .bind(project.user_id.to_string())
            .bind(project.created_at)
            .bind(project.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("create project", e))?;

        Ok(project)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        let query = r#"
            SELECT id, name, description, user_id, created_at, updated_at
            FROM projects
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("find project", e))?;

        row.as_ref().map(Self::row_to_project).transpose()
    }

    async fn update(&self, project: Project) -> Result<Project, DomainError> {
        let query = r#"
            UPDATE projects
            SET name = ?, description = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&project.name)
            .bind(&project.description)
            .bind(project.updated_at)
            .bind(project.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("update project", e))?;

        Ok(project)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete project", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_linked_repositories(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<GithubRepository>, DomainError> {
        let query = r#"
            SELECT id, github_id, name, full_name, description, html_url,
                   language, stargazers, project_id, created_at, updated_at
            FROM github_repositories
            WHERE project_id = ?
            ORDER BY stargazers DESC
        "#;

        let rows = sqlx::query(query)
            .bind(project_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("find linked repositories", e))?;

        rows.iter().map(Self::row_to_repository).collect()
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

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin link transaction", e))?;

        sqlx::query("DELETE FROM github_repositories WHERE project_id = ?")
            .bind(project_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("clear repository links", e))?;

        for repo in &linked {
            let query = r#"
                INSERT INTO github_repositories (
                    id, github_id, name, full_name, description, html_url,
                    language, stargazers, project_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#;

            sqlx::query(query)
                .bind(repo.id.to_string())
                .bind(repo.github_id)
                .bind(&repo.name)
                .bind(&repo.full_name)
                .bind(&repo.description)
                .bind(&repo.html_url)
                .bind(&repo.language)
                .bind(repo.stargazers)
                .bind(repo.project_id.to_string())
                .bind(repo.created_at)
                .bind(repo.updated_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| DomainError::database("insert repository link", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit link transaction", e))?;

        Ok(linked)
    }

    async fn unlink_repositories(&self, project_id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM github_repositories WHERE project_id = ?")
            .bind(project_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("unlink repositories", e))?;

        Ok(())
    }
}
