//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::dto::auth_dto::{AuthResponse, LoginRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Verifies credentials and issues a fresh token pair
///
/// # Responses
/// - 200 OK: authenticated, tokens in the body
/// - 401 Unauthorized: wrong email or password
pub async fn login<T, U, P, K>(
    state: web::Data<AppState<T, U, P, K>>,
    request: web::Json<LoginRequest>,
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

    match state.auth.login(&request.email, &request.password).await {
        Ok((user, pair)) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            AuthResponse::new(&user, pair),
            "Login successful",
        )),
        Err(error) => handle_domain_error(error),
    }
}
