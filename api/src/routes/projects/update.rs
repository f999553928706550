//! Handler for PUT /api/v1/projects/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::dto::project_dto::{ProjectResponse, UpdateProjectRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Applies a partial update to a project
pub async fn update_project<T, U, P, K>(
    state: web::Data<AppState<T, U, P, K>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateProjectRequest>,
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
        .update_project(
            path.into_inner(),
            auth.user_id,
            request.name.clone(),
            request.description.clone(),
        )
        .await
    {
        Ok(project) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            ProjectResponse::from(project),
            "Project updated successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
