//! MySQL implementation of the TaskRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tf_core::domain::entities::task::{Task, TaskPriority, TaskStatus};
use tf_core::errors::DomainError;
use tf_core::repositories::TaskRepository;

use super::uuid_column;

/// MySQL-backed task store
pub struct MySqlTaskRepository {
    pool: MySqlPool,
}

impl MySqlTaskRepository {
    /// Creates a new repository over the given pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: &sqlx::mysql::MySqlRow) -> Result<Task, DomainError> {
        let status: String = row
            .try_get("status")
            .map_err(|e| DomainError::database("read status", e))?;
        let priority: String = row
            .try_get("priority")
            .map_err(|e| DomainError::database("read priority", e))?;

        Ok(Task {
            id: uuid_column(row, "id")?,
            title: row
                .try_get("title")
                .map_err(|e| DomainError::database("read title", e))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::database("read description", e))?,
            status: TaskStatus::parse(&status).ok_or_else(|| DomainError::Internal {
                message: format!("unknown task status: {}", status),
            })?,
            priority: TaskPriority::parse(&priority).ok_or_else(|| DomainError::Internal {
                message: format!("unknown task priority: {}", priority),
            })?,
            project_id: uuid_column(row, "project_id")?,
            user_id: uuid_column(row, "user_id")?,
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
impl TaskRepository for MySqlTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, DomainError> {
        let query = r#"
            INSERT INTO tasks (
                id, title, description, status, priority,
                project_id, user_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(task.id.to_string())
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.status.as_str())
            .bind(task.priority.as_str())
            .bind(task.project_id.to_string())
            .bind(task.user_id.to_string())
            .bind(task.created_at)
            .bind(task.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("create task", e))?;

        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, DomainError> {
        let query = r#"
            SELECT id, title, description, status, priority,
                   project_id, user_id, created_at, updated_at
            FROM tasks
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("find task", e))?;

        row.as_ref().map(Self::row_to_task).transpose()
    }

    async fn find_by_project(&self, project_id: Uuid) -> Result<Vec<Task>, DomainError> {
        let query = r#"
            SELECT id, title, description, status, priority,
                   project_id, user_id, created_at, updated_at
            FROM tasks
            WHERE project_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(project_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list project tasks", e))?;

        rows.iter().map(Self::row_to_task).collect()
    }

    async fn update(&self, task: Task) -> Result<Task, DomainError> {
        let query = r#"
            UPDATE tasks
            SET title = ?, description = ?, status = ?, priority = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.status.as_str())
            .bind(task.priority.as_str())
            .bind(task.updated_at)
            .bind(task.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("update task", e))?;

        Ok(task)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete task", e))?;

        Ok(result.rows_affected() > 0)
    }
}
