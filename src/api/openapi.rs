use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::health::{DetailedHealthResponse, SimpleHealthResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo App API",
        version = "1.0.0",
        description = "JSON endpoints of the todo application. Pages under /todos are HTML."
    ),
    paths(
        crate::health::simple_health,
        crate::health::detailed_health,
    ),
    components(schemas(SimpleHealthResponse, DetailedHealthResponse)),
    tags((name = "health", description = "Liveness and readiness probes"))
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
