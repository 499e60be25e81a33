use crate::shared::web::render_page;
use crate::AppState;
use actix_web::{get, web, HttpRequest, Responder};
use tera::Context;

#[get("/")]
pub async fn home_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    render_page(&req, &data.templates, "home.html", Context::new())
}
