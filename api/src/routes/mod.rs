//! Route handlers, one file per endpoint

pub mod auth;
pub mod projects;
pub mod tasks;

use std::sync::Arc;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_core::services::{AuthService, ProjectService, TaskService};

/// Shared application state handed to every handler
///
/// Generic over the repository implementations so production wires the
/// MySQL-backed types and tests wire the in-memory mocks through the same
/// code path.
pub struct AppState<T, U, P, K>
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    K: TaskRepository + 'static,
{
    pub auth: Arc<AuthService<T, U>>,
    pub projects: Arc<ProjectService<P>>,
    pub tasks: Arc<TaskService<K, P>>,
}
