//! Handler for POST /api/v1/projects

use actix_web::{web, HttpResponse};
use validator::Validate;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::dto::project_dto::{CreateProjectRequest, ProjectResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Creates a project owned by the authenticated user
pub async fn create_project<T, U, P, K>(
    state: web::Data<AppState<T, U, P, K>>,
    auth: AuthContext,
    request: web::Json<CreateProjectRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    K: TaskRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .projects
        .create_project(auth.user_id, &request.name, request.description.clone())
        .await
    {
        Ok(project) => HttpResponse::Created().json(ApiResponse::success_with_message(
            ProjectResponse::from(project),
            "Project created successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
