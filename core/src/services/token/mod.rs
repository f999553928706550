//! JWT access / refresh token lifecycle
//!
//! Split into a stateless codec (signing and validation) and a stateful
//! service (issuance, rotation, revocation against the credential store).

pub mod cleanup;
pub mod codec;
pub mod config;
pub mod service;

#[cfg(test)]
mod tests;

pub use cleanup::spawn_purge_task;
pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use service::{TokenService, TokenVerifier};
