//! Task entity: a unit of work inside a project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Priority of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskStatus {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Cancelled => "CANCELLED",
        }
    }

    /// Parse from the database string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(TaskStatus::Pending),
            "IN_PROGRESS" => Some(TaskStatus::InProgress),
            "COMPLETED" => Some(TaskStatus::Completed),
            "CANCELLED" => Some(TaskStatus::Cancelled),
            _ => None,
        }
    }
}

impl TaskPriority {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
            TaskPriority::Urgent => "URGENT",
        }
    }

    /// Parse from the database string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LOW" => Some(TaskPriority::Low),
            "MEDIUM" => Some(TaskPriority::Medium),
            "HIGH" => Some(TaskPriority::High),
            "URGENT" => Some(TaskPriority::Urgent),
            _ => None,
        }
    }
}

/// Task entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task
    pub id: Uuid,

    /// Task title
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Workflow state
    pub status: TaskStatus,

    /// Priority
    pub priority: TaskPriority,

    /// Project the task belongs to
    pub project_id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Timestamp when the task was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the task was last updated
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task
    pub fn new(
        title: String,
        description: Option<String>,
        priority: TaskPriority,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: TaskStatus::default(),
            priority,
            project_id,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the task is owned by the given user
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Applies a partial update, bumping the updated timestamp
    pub fn apply_update(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        status: Option<TaskStatus>,
        priority: Option<TaskPriority>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(priority) = priority {
            self.priority = priority;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_defaults() {
        let task = Task::new(
            "write docs".into(),
            None,
            TaskPriority::default(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::Medium);
    }

    #[test]
    fn status_round_trips_through_db_representation() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Cancelled,
        ] {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::parse("UNKNOWN"), None);
    }

    #[test]
    fn priority_serializes_screaming_snake() {
        let json = serde_json::to_string(&TaskPriority::Urgent).unwrap();
        assert_eq!(json, "\"URGENT\"");
    }
}
