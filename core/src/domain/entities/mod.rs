//! Domain entities

pub mod github_repository;
pub mod project;
pub mod task;
pub mod token;
pub mod user;

pub use github_repository::GithubRepository;
pub use project::Project;
pub use task::{Task, TaskPriority, TaskStatus};
pub use token::{Claims, RefreshToken, TokenPair};
pub use user::User;
