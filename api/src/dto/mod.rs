//! Request and response DTOs

pub mod auth_dto;
pub mod project_dto;
pub mod task_dto;
