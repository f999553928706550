//! Project endpoints, all behind the authorization gate

pub mod create;
pub mod delete;
pub mod get;
pub mod link_github;
pub mod unlink_github;
pub mod update;
