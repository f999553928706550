//! Handler for PUT /api/v1/tasks/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::dto::task_dto::UpdateTaskRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Applies a partial update to a task
pub async fn update_task<T, U, P, K>(
    state: web::Data<AppState<T, U, P, K>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateTaskRequest>,
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
        .update_task(
            path.into_inner(),
            auth.user_id,
            request.title.clone(),
            request.description.clone(),
            request.status,
            request.priority,
        )
        .await
    {
        Ok(task) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            task,
            "Task updated successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
