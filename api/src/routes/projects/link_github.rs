//! Handler for GET /api/v1/projects/{id}/github/{username}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tf_core::repositories::{ProjectRepository, TaskRepository, TokenRepository, UserRepository};
use tf_shared::types::ApiResponse;

use crate::dto::project_dto::ProjectResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Fetches the GitHub user's public repositories and links them to the
/// project, replacing any previous links
///
/// # Responses
/// - 200 OK: project with the freshly linked repositories
/// - 404 Not Found: project or GitHub user does not exist, or the GitHub
///   user has no public repositories
/// - 503 Service Unavailable: GitHub rate limit or outage
pub async fn link_github<T, U, P, K>(
    state: web::Data<AppState<T, U, P, K>>,
    auth: AuthContext,
    path: web::Path<(Uuid, String)>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    K: TaskRepository + 'static,
{
    let (project_id, username) = path.into_inner();

    match state
        .projects
        .link_github_repositories(project_id, auth.user_id, &username)
        .await
    {
        Ok(details) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            ProjectResponse::from(details),
            "GitHub repositories linked successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
