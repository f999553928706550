//! Handler for POST /api/v1/projects/{id}/tasks

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::dto::task_dto::CreateTaskRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Creates a task inside a project the user owns
pub async fn create_task<T, U, P, K>(
    state: web::Data<AppState<T, U, P, K>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<CreateTaskRequest>,
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
        .tasks
        .create_task(
            path.into_inner(),
            auth.user_id,
            &request.title,
            request.description.clone(),
            request.priority,
        )
        .await
    {
        Ok(task) => HttpResponse::Created().json(ApiResponse::success_with_message(
            task,
            "Task created successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
