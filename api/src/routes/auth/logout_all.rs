//! Handler for POST /api/v1/auth/logout-all

use actix_web::{web, HttpResponse};

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Revokes every refresh token of the authenticated user
///
/// Requires a valid access token; answers 200 regardless of how many
/// sessions were live.
pub async fn logout_all<T, U, P, K>(
    state: web::Data<AppState<T, U, P, K>>,
    auth: AuthContext,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    K: TaskRepository + 'static,
{
    state.auth.logout_all(auth.user_id).await;
    HttpResponse::Ok().json(ApiResponse::success_with_message(
        (),
        "Logged out from all sessions",
    ))
}
