//! Handler for POST /api/v1/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::dto::auth_dto::{AuthResponse, RegisterRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Creates an account and issues the first token pair
///
/// # Responses
/// - 201 Created: account created, tokens in the body
/// - 400 Bad Request: validation failure
/// - 409 Conflict: email already registered
pub async fn register<T, U, P, K>(
    state: web::Data<AppState<T, U, P, K>>,
    request: web::Json<RegisterRequest>,
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
        .auth
        .register(&request.name, &request.email, &request.password)
        .await
    {
        Ok((user, pair)) => HttpResponse::Created().json(ApiResponse::success_with_message(
            AuthResponse::new(&user, pair),
            "User registered successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
