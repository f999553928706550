//! Handler for POST /api/v1/auth/refresh

use actix_web::{web, HttpResponse};

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::dto::auth_dto::{RefreshTokenRequest, TokenResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Rotates a refresh token into a new access/refresh pair
///
/// The submitted token is consumed whether or not rotation succeeds for it;
/// replaying it yields 401.
///
/// # Responses
/// - 200 OK: new token pair in the body
/// - 401 Unauthorized: unknown, expired or already-used refresh token
pub async fn refresh<T, U, P, K>(
    state: web::Data<AppState<T, U, P, K>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    K: TaskRepository + 'static,
{
    match state.auth.refresh(&request.refresh_token).await {
        Ok(pair) => HttpResponse::Ok().json(ApiResponse::success(TokenResponse::from(pair))),
        Err(error) => handle_domain_error(error),
    }
}
