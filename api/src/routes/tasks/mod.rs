//! Task endpoints, all behind the authorization gate
//!
//! Creation and listing are nested under the owning project; single-task
//! operations address tasks directly.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
