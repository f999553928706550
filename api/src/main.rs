//! TechFlow API server binary
//!
//! Wires the MySQL repositories, Redis cache and GitHub client into the
//! domain services, then serves the actix-web application.

use std::sync::Arc;
use std::time::Duration;

use actix_web::HttpServer;
use tracing_subscriber::EnvFilter;

use tf_api::app::create_app;
use tf_api::routes::AppState;
use tf_core::services::{
    spawn_purge_task, AuthService, CacheService, NoopCache, ProjectService, TaskService,
    TokenService, TokenServiceConfig, TokenVerifier, UserService,
};
use tf_infra::cache::RedisCache;
use tf_infra::database::mysql::{
    MySqlProjectRepository, MySqlTaskRepository, MySqlTokenRepository, MySqlUserRepository,
};
use tf_infra::database::DatabasePool;
use tf_infra::github::GithubHttpClient;
use tf_shared::config::AppConfig;

const TOKEN_PURGE_PERIOD: Duration = Duration::from_secs(3600);

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(environment = %config.environment, "starting techflow api");

    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        tracing::warn!("using the default JWT secret; set JWT_SECRET before deploying");
    }

    let database = DatabasePool::new(&config.database).await?;
    database.health_check().await?;

    let token_repo = Arc::new(MySqlTokenRepository::new(database.pool().clone()));
    let user_repo = Arc::new(MySqlUserRepository::new(database.pool().clone()));
    let project_repo = Arc::new(MySqlProjectRepository::new(database.pool().clone()));
    let task_repo = Arc::new(MySqlTaskRepository::new(database.pool().clone()));

    let cache: Arc<dyn CacheService> = match RedisCache::new(&config.cache).await {
        Ok(redis) => Arc::new(redis),
        Err(error) => {
            tracing::warn!(error = %error, "redis unavailable, caching disabled");
            Arc::new(NoopCache)
        }
    };

    let github = Arc::new(GithubHttpClient::new(
        &config.github,
        &config.cache,
        Arc::clone(&cache),
    ));

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
    let token_service = Arc::new(TokenService::new(
        token_repo,
        user_repo,
        TokenServiceConfig::from(&config.jwt),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_service),
        Arc::clone(&token_service),
    ));
    let project_service = Arc::new(ProjectService::new(Arc::clone(&project_repo), github));
    let task_service = Arc::new(TaskService::new(task_repo, project_repo));

    spawn_purge_task(Arc::clone(&token_service), TOKEN_PURGE_PERIOD);

    let verifier: Arc<dyn TokenVerifier> = token_service;
    let verifier_data = actix_web::web::Data::new(verifier);
    let app_state = actix_web::web::Data::new(AppState {
        auth: auth_service,
        projects: project_service,
        tasks: task_service,
    });

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "binding http server");

    HttpServer::new(move || create_app(app_state.clone(), verifier_data.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
