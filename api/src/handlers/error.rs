//! Translation of domain errors into HTTP responses
//!
//! Every error leaves through the uniform `ApiResponse` envelope. Expired
//! access tokens get a code of their own so clients know to refresh instead
//! of re-authenticating; internals are logged server-side and surfaced as a
//! generic 500.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use tf_core::errors::{AuthError, DomainError, GithubError, TokenError};
use tf_shared::types::ApiResponse;

/// Maps a domain error to its HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error("VALIDATION_ERROR", message))
        }

        DomainError::NotFound { entity, id } => HttpResponse::NotFound().json(
            ApiResponse::<()>::error("NOT_FOUND", format!("{} with id '{}' not found", entity, id)),
        ),

        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::Github(github_error) => handle_github_error(github_error),

        DomainError::Database { message } | DomainError::Internal { message } => {
            tracing::error!(error = %message, "internal error");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("INTERNAL_ERROR", "An internal error occurred"))
        }
    }
}

fn handle_auth_error(error: AuthError) -> HttpResponse {
    match error {
        AuthError::Unauthorized { message } => {
            HttpResponse::Unauthorized().json(ApiResponse::<()>::error("UNAUTHORIZED", message))
        }
        AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(
            ApiResponse::<()>::error("INVALID_CREDENTIALS", "Invalid email or password"),
        ),
        AuthError::UserAlreadyExists { email } => HttpResponse::Conflict().json(
            ApiResponse::<()>::error(
                "USER_ALREADY_EXISTS",
                format!("User with email '{}' already exists", email),
            ),
        ),
    }
}

fn handle_token_error(error: TokenError) -> HttpResponse {
    match error {
        TokenError::TokenExpired => HttpResponse::Unauthorized().json(
            ApiResponse::<()>::error("TOKEN_EXPIRED", "Access token has expired"),
        ),
        // Malformed and bad-signature tokens are indistinguishable to the
        // client on purpose.
        TokenError::InvalidTokenFormat | TokenError::InvalidSignature => {
            HttpResponse::Unauthorized()
                .json(ApiResponse::<()>::error("INVALID_TOKEN", "Invalid access token"))
        }
        TokenError::InvalidRefreshToken => HttpResponse::Unauthorized().json(
            ApiResponse::<()>::error("INVALID_REFRESH_TOKEN", "Invalid refresh token"),
        ),
        TokenError::TokenGenerationFailed => {
            tracing::error!("token generation failed");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("INTERNAL_ERROR", "An internal error occurred"))
        }
    }
}

fn handle_github_error(error: GithubError) -> HttpResponse {
    match error {
        GithubError::UserNotFound { username } => HttpResponse::NotFound().json(
            ApiResponse::<()>::error(
                "GITHUB_USER_NOT_FOUND",
                format!("GitHub user '{}' not found", username),
            ),
        ),
        GithubError::NoPublicRepositories { username } => HttpResponse::NotFound().json(
            ApiResponse::<()>::error(
                "GITHUB_NO_PUBLIC_REPOSITORIES",
                format!("No public repositories found for user '{}'", username),
            ),
        ),
        GithubError::RateLimitExceeded => HttpResponse::ServiceUnavailable().json(
            ApiResponse::<()>::error("GITHUB_RATE_LIMIT", "GitHub API rate limit exceeded"),
        ),
        GithubError::ApiError { .. } | GithubError::RequestFailed { .. } => {
            tracing::error!(error = %error, "github request failed");
            HttpResponse::ServiceUnavailable().json(ApiResponse::<()>::error(
                "GITHUB_UNAVAILABLE",
                "GitHub API is temporarily unavailable",
            ))
        }
    }
}

/// Maps validator failures to a 400 with per-field details
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let details = serde_json::to_value(errors.field_errors())
        .unwrap_or(serde_json::Value::Null);

    HttpResponse::BadRequest().json(
        ApiResponse::<()>::error("VALIDATION_ERROR", "Request validation failed")
            .with_details(details),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn expired_and_invalid_tokens_get_distinct_codes() {
        let expired = handle_domain_error(TokenError::TokenExpired.into());
        let invalid = handle_domain_error(TokenError::InvalidSignature.into());

        assert_eq!(expired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        let response = handle_domain_error(
            AuthError::UserAlreadyExists {
                email: "ada@example.com".into(),
            }
            .into(),
        );
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn internals_never_leak_details() {
        let response = handle_domain_error(DomainError::Database {
            message: "mysql gone".into(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
