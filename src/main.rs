pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::todo;

use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::session_store_redis::RedisSessionStore;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{PasswordHasher, SessionStore, TokenProvider};
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    resolve_session::{IResolveSessionUseCase, ResolveSessionUseCase},
};
use crate::config::{AppConfig, PasswordHasherKind};
use crate::modules::todo::adapter::outgoing::{TodoQueryPostgres, TodoRepositoryPostgres};
use crate::modules::todo::application::service::{
    ChangeCompletionService, CreateTodoService, DeleteTodoService, GetTodoService,
    ListOverdueTodosService, ListTodosService, TodoStatisticsService, UpdateTodoService,
};
use crate::modules::todo::application::todo_use_cases::TodoUseCases;
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::web::{custom_form_config, TemplateRenderer};

use actix_web::{web, App, HttpServer};
use anyhow::Context as _;
use deadpool_redis::{Config as RedisConfig, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub resolve_session_use_case: Arc<dyn IResolveSessionUseCase + Send + Sync>,
    pub todo: TodoUseCases,
    pub templates: Arc<TemplateRenderer>,
    pub clock: Arc<dyn Clock>,
    pub session_cookie: SessionCookieConfig,
}

fn build_password_hasher(
    config: &AppConfig,
) -> anyhow::Result<Arc<dyn PasswordHasher + Send + Sync>> {
    let hasher: Arc<dyn PasswordHasher + Send + Sync> = match config.password_hasher {
        PasswordHasherKind::Argon2 => Arc::new(
            Argon2Hasher::with_settings(&config.argon2)
                .map_err(|e| anyhow::anyhow!("invalid Argon2 settings: {e}"))?,
        ),
        PasswordHasherKind::Bcrypt => Arc::new(BcryptHasher::new()),
    };
    Ok(hasher)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::warn!("rustls crypto provider was already installed");
    }

    let config = AppConfig::load().context("invalid configuration")?;
    info!(env = %config.rust_env, hasher = ?config.password_hasher, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("failed to run migrations")?;
    info!("Database migrations applied");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = RedisConfig::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    // Auth
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let password_hasher = build_password_hasher(&config)?;
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let session_store: Arc<dyn SessionStore + Send + Sync> =
        Arc::new(RedisSessionStore::new(Arc::clone(&redis_arc)));

    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo,
        Arc::clone(&password_hasher),
        Arc::new(BasicPasswordPolicy),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        password_hasher,
        Arc::clone(&token_provider),
        Arc::clone(&session_store),
    );
    let logout_user_use_case =
        LogoutUseCase::new(Arc::clone(&token_provider), Arc::clone(&session_store));
    let resolve_session_use_case =
        ResolveSessionUseCase::new(user_query, token_provider, session_store);

    // Todo
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let todo_query = TodoQueryPostgres::new(Arc::clone(&db_arc));
    let todo_repo = TodoRepositoryPostgres::new(Arc::clone(&db_arc));

    let todo = TodoUseCases {
        create: Arc::new(CreateTodoService::new(todo_repo.clone(), clock.clone())),
        get_single: Arc::new(GetTodoService::new(todo_query.clone())),
        get_list: Arc::new(ListTodosService::new(todo_query.clone(), clock.clone())),
        get_overdue: Arc::new(ListOverdueTodosService::new(
            todo_query.clone(),
            clock.clone(),
        )),
        statistics: Arc::new(TodoStatisticsService::new(todo_query.clone(), clock.clone())),
        update: Arc::new(UpdateTodoService::new(
            todo_repo.clone(),
            todo_query,
            clock.clone(),
        )),
        change_completion: Arc::new(ChangeCompletionService::new(
            todo_repo.clone(),
            clock.clone(),
        )),
        delete: Arc::new(DeleteTodoService::new(todo_repo)),
    };

    let templates = TemplateRenderer::new().context("failed to compile templates")?;

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        resolve_session_use_case: Arc::new(resolve_session_use_case),
        todo,
        templates: Arc::new(templates),
        clock,
        session_cookie: SessionCookieConfig {
            secure: config.cookie_secure,
        },
    };

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_form_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await
    .context("server stopped with an error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health & API docs
    cfg.service(crate::health::simple_health);
    cfg.service(crate::health::detailed_health);
    cfg.service(crate::api::openapi::openapi_json);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::home_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_page_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::register_page_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Todo: literal segments before `/todos/{id}`
    cfg.service(crate::todo::adapter::incoming::web::routes::list_todos_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::new_todo_page_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::list_overdue_todos_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::create_todo_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::todo_detail_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::edit_todo_page_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::update_todo_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::delete_todo_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::toggle_todo_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::complete_todo_handler);
    cfg.service(crate::todo::adapter::incoming::web::routes::reopen_todo_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
