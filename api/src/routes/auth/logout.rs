//! Handler for POST /api/v1/auth/logout

use actix_web::{web, HttpResponse};

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::dto::auth_dto::LogoutRequest;
use crate::routes::AppState;

/// Revokes one refresh token
///
/// Requires a valid access token. Always answers 200: logout is idempotent,
/// and an unknown refresh token reveals nothing about whether it ever
/// existed.
pub async fn logout<T, U, P, K>(
    state: web::Data<AppState<T, U, P, K>>,
    request: web::Json<LogoutRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    K: TaskRepository + 'static,
{
    state.auth.logout(&request.refresh_token).await;
    HttpResponse::Ok().json(ApiResponse::success_with_message((), "Logged out successfully"))
}
