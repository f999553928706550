//! Application factory
//!
//! Builds the actix-web `App` with middleware, routes and shared state.
//! The factory is generic over the repository implementations so the binary
//! and the integration tests assemble the exact same route tree.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpResponse};
use tracing_actix_web::TracingLogger;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_core::services::TokenVerifier;
use tf_shared::types::ApiResponse;

use crate::middleware::{create_cors, AuthGate};
use crate::routes::{auth, projects, tasks, AppState};

/// Create and configure the application with all dependencies
///
/// The token verifier travels in app data separately from [`AppState`] so the
/// authorization gate can reach it without knowing the repository generics.
pub fn create_app<T, U, P, K>(
    app_state: web::Data<AppState<T, U, P, K>>,
    verifier: web::Data<Arc<dyn TokenVerifier>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    K: TaskRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(verifier)
        .wrap(TracingLogger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::register::<T, U, P, K>))
                        .route("/login", web::post().to(auth::login::login::<T, U, P, K>))
                        .route("/refresh", web::post().to(auth::refresh::refresh::<T, U, P, K>))
                        .service(
                            web::scope("")
                                .wrap(AuthGate::new())
                                .route("/logout", web::post().to(auth::logout::logout::<T, U, P, K>))
                                .route(
                                    "/logout-all",
                                    web::post().to(auth::logout_all::logout_all::<T, U, P, K>),
                                ),
                        ),
                )
                .service(
                    web::scope("/projects")
                        .wrap(AuthGate::new())
                        .route("", web::post().to(projects::create::create_project::<T, U, P, K>))
                        .route("/{id}", web::get().to(projects::get::get_project::<T, U, P, K>))
                        .route("/{id}", web::put().to(projects::update::update_project::<T, U, P, K>))
                        .route(
                            "/{id}",
                            web::delete().to(projects::delete::delete_project::<T, U, P, K>),
                        )
                        .route(
                            "/{id}/github/{username}",
                            web::get().to(projects::link_github::link_github::<T, U, P, K>),
                        )
                        .route(
                            "/{id}/github",
                            web::delete().to(projects::unlink_github::unlink_github::<T, U, P, K>),
                        )
                        .route("/{id}/tasks", web::post().to(tasks::create::create_task::<T, U, P, K>))
                        .route("/{id}/tasks", web::get().to(tasks::list::list_tasks::<T, U, P, K>)),
                )
                .service(
                    web::scope("/tasks")
                        .wrap(AuthGate::new())
                        .route("/{id}", web::get().to(tasks::get::get_task::<T, U, P, K>))
                        .route("/{id}", web::put().to(tasks::update::update_task::<T, U, P, K>))
                        .route("/{id}", web::delete().to(tasks::delete::delete_task::<T, U, P, K>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "techflow-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
