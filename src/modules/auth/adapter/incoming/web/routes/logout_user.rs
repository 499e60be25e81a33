use crate::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE;
use crate::AppState;
use actix_web::{get, http::header, web, HttpRequest, HttpResponse, Responder};
use tracing::{error, info};

/// Ends the session server-side (when there is one) and always clears the cookie.
#[get("/logout")]
pub async fn logout_user_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        match data.logout_user_use_case.execute(cookie.value()).await {
            Ok(()) => info!("User logged out successfully"),
            // The cookie is dropped regardless; the entry will expire on its own
            Err(e) => error!(error = %e, "Logout could not end the session"),
        }
    }

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/login?logout=true"))
        .cookie(data.session_cookie.removal())
        .finish()
}
