//! Handler for GET /api/v1/projects/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::dto::project_dto::ProjectResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Fetches a project with its linked GitHub repositories
///
/// Projects owned by other users answer 404.
pub async fn get_project<T, U, P, K>(
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
    match state.projects.get_project(path.into_inner(), auth.user_id).await {
        Ok(details) => HttpResponse::Ok().json(ApiResponse::success(ProjectResponse::from(details))),
        Err(error) => handle_domain_error(error),
    }
}
