//! Task repository trait defining the interface for task persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::task::Task;
use crate::errors::DomainError;

/// Repository trait for Task entity persistence operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task
    async fn create(&self, task: Task) -> Result<Task, DomainError>;

    /// Find a task by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, DomainError>;

    /// List all tasks belonging to a project, newest first
    async fn find_by_project(&self, project_id: Uuid) -> Result<Vec<Task>, DomainError>;

    /// Update an existing task
    async fn update(&self, task: Task) -> Result<Task, DomainError>;

    /// Delete a task
    ///
    /// # Returns
    /// * `Ok(true)` - Task was deleted
    /// * `Ok(false)` - Task not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
