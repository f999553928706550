//! Handler for GET /api/v1/projects/{id}/tasks

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Lists a project's tasks, newest first
pub async fn list_tasks<T, U, P, K>(
    state: web::Data<AppState<T, U, P, K>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    K: TaskRepository + 'static,
{
    match state.tasks.list_tasks(path.into_inner(), auth.user_id).await {
        Ok(tasks) => HttpResponse::Ok().json(ApiResponse::success(tasks)),
        Err(error) => handle_domain_error(error),
    }
}
