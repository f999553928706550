//! Project entity: a tracked project owned by a single user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Project entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project
    pub id: Uuid,

    /// Project name
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Owning user
    pub user_id: Uuid,

    /// Timestamp when the project was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the project was last updated
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project owned by the given user
    pub fn new(name: String, description: Option<String>, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the project is owned by the given user
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Applies a partial update, bumping the updated timestamp
    pub fn apply_update(&mut self, name: Option<String>, description: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_check() {
        let owner = Uuid::new_v4();
        let project = Project::new("backend".into(), None, owner);
        assert!(project.is_owned_by(owner));
        assert!(!project.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn partial_update_keeps_unset_fields() {
        let mut project = Project::new("backend".into(), Some("api".into()), Uuid::new_v4());
        project.apply_update(Some("backend-v2".into()), None);
        assert_eq!(project.name, "backend-v2");
        assert_eq!(project.description.as_deref(), Some("api"));
    }
}
