//! Task request DTOs
//!
//! Task responses serialize the entity directly; status and priority use
//! their uppercase wire representation.

use serde::Deserialize;
use validator::Validate;

use tf_core::domain::entities::task::{TaskPriority, TaskStatus};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 2, max = 100))]
    pub title: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 2, max = 100))]
    pub title: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_priority_parse_wire_format() {
        let request: CreateTaskRequest = serde_json::from_str(
            r#"{ "title": "write docs", "priority": "URGENT" }"#,
        )
        .unwrap();
        assert_eq!(request.priority, Some(TaskPriority::Urgent));

        let update: UpdateTaskRequest =
            serde_json::from_str(r#"{ "status": "IN_PROGRESS" }"#).unwrap();
        assert_eq!(update.status, Some(TaskStatus::InProgress));
    }
}
