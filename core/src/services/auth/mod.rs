//! Authentication flows built on the user and token services

pub mod service;

pub use service::AuthService;
