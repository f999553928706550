//! # TechFlow API
//!
//! HTTP layer for the TechFlow backend: actix-web application factory,
//! bearer-token middleware, request/response DTOs and the route handlers.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
