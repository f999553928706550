//! Shared fixtures for the HTTP integration tests
//!
//! Builds the real application factory on top of the in-memory repository
//! mocks, so requests exercise routing, middleware, handlers and services
//! end to end without a database.

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use tf_api::routes::AppState;
use tf_core::domain::entities::github_repository::GithubRepoData;
use tf_core::errors::{DomainError, GithubError};
use tf_core::repositories::{
    MockProjectRepository, MockTaskRepository, MockTokenRepository, MockUserRepository,
};
use tf_core::services::{
    AuthService, GithubClient, ProjectService, TaskService, TokenService, TokenServiceConfig,
    TokenVerifier, UserService,
};

pub type TestState =
    AppState<MockTokenRepository, MockUserRepository, MockProjectRepository, MockTaskRepository>;

/// GitHub stand-in: `ghost` is unknown, everyone else owns two repositories
pub struct FakeGithub;

#[async_trait]
impl GithubClient for FakeGithub {
    async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<GithubRepoData>, DomainError> {
        if username == "ghost" {
            return Err(GithubError::UserNotFound {
                username: username.to_string(),
            }
            .into());
        }
        Ok(vec![repo_data("alpha", 42), repo_data("beta", 7)])
    }
}

fn repo_data(name: &str, stars: i64) -> GithubRepoData {
    GithubRepoData {
        github_id: stars,
        name: name.to_string(),
        full_name: format!("{}/{}", "octocat", name),
        description: None,
        html_url: format!("https://github.com/octocat/{}", name),
        language: Some("Rust".into()),
        stargazers: stars,
    }
}

/// Assemble app data backed entirely by in-memory mocks
pub fn test_app_data() -> (web::Data<TestState>, web::Data<Arc<dyn TokenVerifier>>) {
    let token_repo = Arc::new(MockTokenRepository::new());
    let user_repo = Arc::new(MockUserRepository::new());
    let project_repo = Arc::new(MockProjectRepository::new());
    let task_repo = Arc::new(MockTaskRepository::new());

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
    let token_service = Arc::new(TokenService::new(
        token_repo,
        user_repo,
        TokenServiceConfig::default(),
    ));
    let auth_service = Arc::new(AuthService::new(user_service, Arc::clone(&token_service)));
    let project_service = Arc::new(ProjectService::new(
        Arc::clone(&project_repo),
        Arc::new(FakeGithub),
    ));
    let task_service = Arc::new(TaskService::new(task_repo, project_repo));

    let verifier: Arc<dyn TokenVerifier> = token_service;

    (
        web::Data::new(AppState {
            auth: auth_service,
            projects: project_service,
            tasks: task_service,
        }),
        web::Data::new(verifier),
    )
}
