//! Handler for GET /api/v1/tasks/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Fetches a single task the user owns
pub async fn get_task<T, U, P, K>(
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
    match state.tasks.get_task(path.into_inner(), auth.user_id).await {
        Ok(task) => HttpResponse::Ok().json(ApiResponse::success(task)),
        Err(error) => handle_domain_error(error),
    }
}
