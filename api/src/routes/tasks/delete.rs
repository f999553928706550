//! Handler for DELETE /api/v1/tasks/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Deletes a task the user owns
pub async fn delete_task<T, U, P, K>(
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
    match state.tasks.delete_task(path.into_inner(), auth.user_id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            (),
            "Task deleted successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
