//! Repository traits and their in-memory test doubles
//!
//! The traits are the persistence seams of the domain layer; SQLx-backed
//! implementations live in the infra crate. The in-memory mocks mirror the
//! database semantics (including atomic conditional deletes) and are used
//! by service and HTTP tests.

pub mod project;
pub mod task;
pub mod token;
pub mod user;

pub use project::{MockProjectRepository, ProjectRepository};
pub use task::{MockTaskRepository, TaskRepository};
pub use token::{MockTokenRepository, TokenRepository};
pub use user::{MockUserRepository, UserRepository};
