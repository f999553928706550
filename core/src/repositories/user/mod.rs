//! User persistence: trait and in-memory mock

pub mod mock;
mod r#trait;

pub use mock::MockUserRepository;
pub use r#trait::UserRepository;
