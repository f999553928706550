//! Project persistence: trait and in-memory mock

pub mod mock;
mod r#trait;

pub use mock::MockProjectRepository;
pub use r#trait::ProjectRepository;
