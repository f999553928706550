//! Business logic services
//!
//! Services own the domain rules; repositories and external clients are
//! injected behind traits so the HTTP layer and the tests wire them the
//! same way.

pub mod auth;
pub mod cache;
pub mod github;
pub mod project;
pub mod task;
pub mod token;
pub mod user;

pub use auth::AuthService;
pub use cache::{CacheService, NoopCache};
pub use github::GithubClient;
pub use project::{ProjectDetails, ProjectService};
pub use task::TaskService;
pub use token::{spawn_purge_task, TokenService, TokenServiceConfig, TokenVerifier};
pub use user::UserService;
