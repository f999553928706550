//! Task management within projects

pub mod service;

pub use service::TaskService;
