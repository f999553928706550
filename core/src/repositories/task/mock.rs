//! In-memory implementation of TaskRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::task::Task;
use crate::errors::DomainError;

use super::r#trait::TaskRepository;

/// In-memory task repository
#[derive(Default)]
pub struct MockTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl MockTaskRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, DomainError> {
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn find_by_project(&self, project_id: Uuid) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        let mut found: Vec<Task> = tasks
            .values()
            .filter(|task| task.project_id == project_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn update(&self, task: Task) -> Result<Task, DomainError> {
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tasks = self.tasks.write().await;
        Ok(tasks.remove(&id).is_some())
    }
}
