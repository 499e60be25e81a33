use actix_web::{web::FormConfig, HttpResponse};

/// Malformed form bodies get a plain 400 instead of actix's default error page.
pub fn custom_form_config() -> FormConfig {
    FormConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            tracing::warn!(error = %err, "Rejected malformed form submission");
            let response = HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body("The submitted form could not be read");
            actix_web::error::InternalError::from_response(err, response).into()
        })
}
