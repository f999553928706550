//! Task persistence: trait and in-memory mock

pub mod mock;
mod r#trait;

pub use mock::MockTaskRepository;
pub use r#trait::TaskRepository;
