//! Bearer-token authorization gate
//!
//! Wrapped around protected scopes. The gate peels the `Authorization`
//! header apart in three distinct steps, each with its own 401 message, then
//! hands the token to the [`TokenVerifier`] held in app data. On success an
//! [`AuthContext`] is injected into request extensions for handlers to
//! extract.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use tf_core::domain::entities::user::User;
use tf_core::services::TokenVerifier;
use tf_shared::types::ApiResponse;

use crate::handlers::error::handle_domain_error;

/// Authenticated user identity injected into request extensions
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
}

impl From<&User> for AuthContext {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
        }
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                actix_web::error::ErrorUnauthorized("Authorization header is required")
            });
        ready(result)
    }
}

/// Authorization middleware factory
#[derive(Default)]
pub struct AuthGate;

impl AuthGate {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Authorization middleware service
pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Ok(token) => token,
                Err(message) => {
                    let response = HttpResponse::Unauthorized()
                        .json(ApiResponse::<()>::error("UNAUTHORIZED", message));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let verifier = match req.app_data::<web::Data<Arc<dyn TokenVerifier>>>() {
                Some(verifier) => verifier.clone(),
                None => {
                    tracing::error!("token verifier missing from app data");
                    let response = HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error("INTERNAL_ERROR", "An internal error occurred"),
                    );
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            match verifier.verify(&token).await {
                Ok(user) => {
                    req.extensions_mut().insert(AuthContext::from(&user));
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(error) => {
                    let response = handle_domain_error(error);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Peels the bearer token out of the Authorization header
///
/// Each failure mode carries its own message so clients can tell a missing
/// header from a wrong scheme from an empty token.
fn extract_bearer_token(req: &ServiceRequest) -> Result<String, &'static str> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or("Authorization header is required")?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or("Authorization header must start with 'Bearer '")?;

    if token.is_empty() {
        return Err("Access token is required");
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn request_with_auth(value: &str) -> ServiceRequest {
        TestRequest::default()
            .insert_header((AUTHORIZATION, value))
            .to_srv_request()
    }

    #[test]
    fn bearer_token_is_extracted() {
        let req = request_with_auth("Bearer abc123");
        assert_eq!(extract_bearer_token(&req).unwrap(), "abc123");
    }

    #[test]
    fn missing_header_has_its_own_message() {
        let req = TestRequest::default().to_srv_request();
        assert_eq!(
            extract_bearer_token(&req).unwrap_err(),
            "Authorization header is required"
        );
    }

    #[test]
    fn wrong_scheme_has_its_own_message() {
        let req = request_with_auth("Basic dXNlcjpwdw==");
        assert_eq!(
            extract_bearer_token(&req).unwrap_err(),
            "Authorization header must start with 'Bearer '"
        );
    }

    #[test]
    fn empty_token_has_its_own_message() {
        let req = request_with_auth("Bearer ");
        assert_eq!(extract_bearer_token(&req).unwrap_err(), "Access token is required");
    }
}
