use actix_web::{http::header, HttpRequest, HttpResponse};
use tera::Context;

use super::flash::{consumed_flash_cookie, FlashMessage};
use super::templates::TemplateRenderer;

/// 303 so the browser follows up with a GET.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn see_other_with_flash(location: &str, flash: FlashMessage) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .cookie(flash.cookie())
        .finish()
}

/// Renders a page, consuming any pending flash message into `flash`.
pub fn render_page(
    req: &HttpRequest,
    renderer: &TemplateRenderer,
    template: &str,
    mut context: Context,
) -> HttpResponse {
    let flash = FlashMessage::from_request(req);
    if let Some(message) = flash {
        context.insert("flash", &message.view());
    }

    match renderer.render(template, &context) {
        Ok(html) => {
            let mut response = HttpResponse::Ok();
            response.content_type("text/html; charset=utf-8");
            if flash.is_some() {
                response.cookie(consumed_flash_cookie());
            }
            response.body(html)
        }
        Err(e) => {
            tracing::error!(template, error = ?e, "Template rendering failed");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("An unexpected error occurred")
        }
    }
}
