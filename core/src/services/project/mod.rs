//! Project management and GitHub repository linking

pub mod service;

pub use service::{ProjectDetails, ProjectService};
