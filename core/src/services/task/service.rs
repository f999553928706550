//! Task service: CRUD scoped to a project the user owns
//!
//! Like projects, tasks that exist but belong to someone else are reported
//! as not found.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::task::{Task, TaskPriority, TaskStatus};
use crate::errors::DomainError;
use crate::repositories::{ProjectRepository, TaskRepository};

/// Service for task management
pub struct TaskService<T: TaskRepository, P: ProjectRepository> {
    tasks: Arc<T>,
    projects: Arc<P>,
}

impl<T: TaskRepository, P: ProjectRepository> TaskService<T, P> {
    /// Creates a new task service
    pub fn new(tasks: Arc<T>, projects: Arc<P>) -> Self {
        Self { tasks, projects }
    }

    /// Creates a task inside a project the user owns
    pub async fn create_task(
        &self,
        project_id: Uuid,
        user_id: Uuid,
        title: &str,
        description: Option<String>,
        priority: Option<TaskPriority>,
    ) -> Result<Task, DomainError> {
        self.owned_project(project_id, user_id).await?;
        self.tasks
            .create(Task::new(
                title.to_string(),
                description,
                priority.unwrap_or_default(),
                project_id,
                user_id,
            ))
            .await
    }

    /// Lists the tasks of a project the user owns, newest first
    pub async fn list_tasks(&self, project_id: Uuid, user_id: Uuid) -> Result<Vec<Task>, DomainError> {
        self.owned_project(project_id, user_id).await?;
        self.tasks.find_by_project(project_id).await
    }

    /// Fetches a single task the user owns
    pub async fn get_task(&self, task_id: Uuid, user_id: Uuid) -> Result<Task, DomainError> {
        self.owned_task(task_id, user_id).await
    }

    /// Applies a partial update to a task the user owns
    pub async fn update_task(
        &self,
        task_id: Uuid,
        user_id: Uuid,
        title: Option<String>,
        description: Option<String>,
        status: Option<TaskStatus>,
        priority: Option<TaskPriority>,
    ) -> Result<Task, DomainError> {
        let mut task = self.owned_task(task_id, user_id).await?;
        task.apply_update(title, description, status, priority);
        self.tasks.update(task).await
    }

    /// Deletes a task the user owns
    pub async fn delete_task(&self, task_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        self.owned_task(task_id, user_id).await?;
        self.tasks.delete(task_id).await?;
        Ok(())
    }

    async fn owned_project(&self, project_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
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

        Ok(())
    }

    async fn owned_task(&self, task_id: Uuid, user_id: Uuid) -> Result<Task, DomainError> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Task",
                id: task_id.to_string(),
            })?;

        if !task.is_owned_by(user_id) {
            return Err(DomainError::NotFound {
                entity: "Task",
                id: task_id.to_string(),
            });
        }

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::project::Project;
    use crate::repositories::{MockProjectRepository, MockTaskRepository};

    struct Harness {
        service: TaskService<MockTaskRepository, MockProjectRepository>,
        projects: Arc<MockProjectRepository>,
    }

    fn harness() -> Harness {
        let tasks = Arc::new(MockTaskRepository::new());
        let projects = Arc::new(MockProjectRepository::new());
        Harness {
            service: TaskService::new(tasks, Arc::clone(&projects)),
            projects,
        }
    }

    async fn seeded_project(projects: &MockProjectRepository, owner: Uuid) -> Project {
        projects
            .create(Project::new("backend".into(), None, owner))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let h = harness();
        let owner = Uuid::new_v4();
        let project = seeded_project(&h.projects, owner).await;

        let task = h
            .service
            .create_task(project.id, owner, "write docs", None, None)
            .await
            .unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::Medium);

        let listed = h.service.list_tasks(project.id, owner).await.unwrap();
        assert_eq!(listed.len(), 1);

        let updated = h
            .service
            .update_task(
                task.id,
                owner,
                None,
                None,
                Some(TaskStatus::Completed),
                Some(TaskPriority::High),
            )
            .await
            .unwrap();
        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(updated.priority, TaskPriority::High);
        assert_eq!(updated.title, "write docs");

        h.service.delete_task(task.id, owner).await.unwrap();
        assert!(h.service.get_task(task.id, owner).await.is_err());
    }

    #[tokio::test]
    async fn tasks_require_an_owned_project() {
        let h = harness();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let project = seeded_project(&h.projects, owner).await;

        assert!(h
            .service
            .create_task(project.id, stranger, "sneaky", None, None)
            .await
            .is_err());
        assert!(h.service.list_tasks(project.id, stranger).await.is_err());
        assert!(h
            .service
            .create_task(Uuid::new_v4(), owner, "orphan", None, None)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn other_users_tasks_look_absent() {
        let h = harness();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let project = seeded_project(&h.projects, owner).await;
        let task = h
            .service
            .create_task(project.id, owner, "write docs", None, None)
            .await
            .unwrap();

        assert!(matches!(
            h.service.get_task(task.id, stranger).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
        assert!(h.service.delete_task(task.id, stranger).await.is_err());
        h.service.get_task(task.id, owner).await.unwrap();
    }
}
