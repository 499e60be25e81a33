use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::todo::adapter::outgoing::sea_orm_entity::todos;

const APPLICATION: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize, ToSchema)]
pub struct SimpleHealthResponse {
    #[schema(example = "UP")]
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub application: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailedHealthResponse {
    #[schema(example = "UP")]
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub application: &'static str,
    pub version: &'static str,
    #[schema(example = "UP")]
    pub database: &'static str,
    pub user_count: Option<u64>,
    pub todo_count: Option<u64>,
    pub message: String,
}

/// LIVENESS PROBE
/// - No I/O
#[utoipa::path(
    get,
    path = "/api/health/simple",
    tag = "health",
    responses((status = 200, description = "Application is running", body = SimpleHealthResponse))
)]
#[get("/api/health/simple")]
pub async fn simple_health() -> impl Responder {
    HttpResponse::Ok().json(SimpleHealthResponse {
        status: "UP",
        timestamp: Utc::now(),
        application: APPLICATION,
        version: VERSION,
    })
}

async fn count_rows(db: &DatabaseConnection) -> Result<(u64, u64), DbErr> {
    let users = users::Entity::find().count(db).await?;
    let todos = todos::Entity::find().count(db).await?;
    Ok((users, todos))
}

/// READINESS PROBE
/// - Counts users and todos to prove the datastore answers
#[utoipa::path(
    get,
    path = "/api/health/detailed",
    tag = "health",
    responses(
        (status = 200, description = "Datastore reachable", body = DetailedHealthResponse),
        (status = 503, description = "Datastore unreachable", body = DetailedHealthResponse)
    )
)]
#[get("/api/health/detailed")]
pub async fn detailed_health(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    match count_rows(db.get_ref()).await {
        Ok((user_count, todo_count)) => HttpResponse::Ok().json(DetailedHealthResponse {
            status: "UP",
            timestamp: Utc::now(),
            application: APPLICATION,
            version: VERSION,
            database: "UP",
            user_count: Some(user_count),
            todo_count: Some(todo_count),
            message: "All systems operational".to_string(),
        }),
        Err(e) => {
            tracing::error!(error = %e, "Health check could not reach the database");
            HttpResponse::ServiceUnavailable().json(DetailedHealthResponse {
                status: "DOWN",
                timestamp: Utc::now(),
                application: APPLICATION,
                version: VERSION,
                database: "DOWN",
                user_count: None,
                todo_count: None,
                message: "Database is not reachable".to_string(),
            })
        }
    }
}
