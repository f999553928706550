//! Refresh token persistence: trait and in-memory mock

pub mod mock;
mod r#trait;

pub use mock::MockTokenRepository;
pub use r#trait::TokenRepository;
