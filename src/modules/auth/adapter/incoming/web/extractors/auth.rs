use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE;
use crate::auth::application::domain::entities::{AuthPrincipal, UserId};
use crate::auth::application::use_cases::resolve_session::ResolveSessionError;
use crate::AppState;

/// The requester of a `/todos` route, resolved from the session cookie.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

impl From<AuthPrincipal> for AuthenticatedUser {
    fn from(principal: AuthPrincipal) -> Self {
        Self {
            user_id: principal.user_id,
            name: principal.name,
            email: principal.email,
        }
    }
}

fn redirect_error(location: &str, clear_cookie: Option<&AppState>) -> ActixError {
    let mut response = HttpResponse::SeeOther();
    response.insert_header((actix_web::http::header::LOCATION, location));
    if let Some(state) = clear_cookie {
        response.cookie(state.session_cookie.removal());
    }
    actix_web::error::InternalError::from_response("", response.finish()).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());

        Box::pin(async move {
            let state = match state {
                Some(state) => state,
                None => {
                    tracing::error!("AppState missing while resolving session");
                    return Err(actix_web::error::ErrorInternalServerError(
                        "An unexpected error occurred",
                    ));
                }
            };

            let token = match token {
                Some(t) if !t.is_empty() => t,
                _ => return Err(redirect_error("/login", None)),
            };

            match state.resolve_session_use_case.execute(&token).await {
                Ok(principal) => Ok(AuthenticatedUser::from(principal)),
                Err(e) if e.is_expiry() => {
                    Err(redirect_error("/login?expired=true", Some(state.get_ref())))
                }
                Err(ResolveSessionError::StoreUnavailable(ref msg)) => {
                    tracing::error!(error = %msg, "Session store unavailable");
                    Err(redirect_error("/login", None))
                }
                Err(_) => Err(redirect_error("/login", Some(state.get_ref()))),
            }
        })
    }
}
