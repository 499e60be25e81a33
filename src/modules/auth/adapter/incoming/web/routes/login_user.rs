use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::web::{render_page, see_other};
use crate::AppState;
use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tera::Context;
use tracing::{error, info, warn};

/// Flags set by redirects back to the login page.
#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub error: Option<String>,
    pub logout: Option<String>,
    pub expired: Option<String>,
}

/// Login form body
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

const BAD_CREDENTIALS_MESSAGE: &str = "Incorrect email address or password.";
const LOGGED_OUT_MESSAGE: &str = "You have been logged out.";
const EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[get("/login")]
pub async fn login_page_handler(
    req: HttpRequest,
    query: web::Query<LoginPageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut context = Context::new();

    if query.error.is_some() {
        context.insert("error_message", BAD_CREDENTIALS_MESSAGE);
    }
    if query.logout.is_some() {
        context.insert("success_message", LOGGED_OUT_MESSAGE);
    }
    if query.expired.is_some() {
        context.insert("warning_message", EXPIRED_MESSAGE);
    }

    render_page(&req, &data.templates, "auth/login.html", context)
}

#[post("/login")]
pub async fn login_user_handler(
    req: HttpRequest,
    form: web::Form<LoginForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    let request = match LoginRequest::new(form.email.clone(), form.password) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Login rejected: incomplete form");
            return see_other("/login?error=true");
        }
    };

    info!(email = %request.email(), "Login attempt");

    match data.login_user_use_case.execute(request).await {
        Ok(response) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/todos"))
            .cookie(
                data.session_cookie
                    .issue(&response.session_token, response.expires_in),
            )
            .finish(),

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            see_other("/login?error=true")
        }

        Err(e) => {
            error!(error = %e, "Login failed unexpectedly");
            let mut context = Context::new();
            context.insert("error_message", UNEXPECTED_MESSAGE);
            context.insert("email", &form.email);
            render_page(&req, &data.templates, "auth/login.html", context)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE;
    use crate::auth::application::domain::entities::{AuthPrincipal, Role, UserId};
    use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginUserResponse};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    // ========================================================================
    // Mock Use Cases for Different Scenarios
    // ========================================================================

    #[derive(Clone)]
    struct MockLoginUserSuccess;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginUserSuccess {
        async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            Ok(LoginUserResponse {
                session_token: "FAKE_SESSION_TOKEN_DO_NOT_USE".to_string(),
                expires_in: 1800,
                principal: AuthPrincipal {
                    user_id: UserId::from(Uuid::new_v4()),
                    name: "Ada".to_string(),
                    email: request.email().to_string(),
                    enabled: true,
                    role: Role::User,
                },
            })
        }
    }

    #[derive(Clone)]
    struct MockLoginUserInvalidCredentials;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginUserInvalidCredentials {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            Err(LoginError::InvalidCredentials)
        }
    }

    #[derive(Clone)]
    struct MockLoginSessionStoreDown;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginSessionStoreDown {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            Err(LoginError::SessionStoreError("connection refused".to_string()))
        }
    }

    // ========================================================================
    // Tests
    // ========================================================================

    #[actix_web::test]
    async fn test_login_success_sets_session_cookie() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginUserSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "ada@example.com"), ("password", "password1")])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 303);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/todos");

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .expect("session cookie");
        assert_eq!(cookie.value(), "FAKE_SESSION_TOKEN_DO_NOT_USE");
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials_redirects_with_error_flag() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginUserInvalidCredentials)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "ada@example.com"), ("password", "wrong-one")])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 303);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/login?error=true"
        );
    }

    #[actix_web::test]
    async fn test_login_blank_email_never_reaches_use_case() {
        // Default stub panics if called
        let app_state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "   "), ("password", "password1")])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 303);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/login?error=true"
        );
    }

    #[actix_web::test]
    async fn test_login_unexpected_error_rerenders_form() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginSessionStoreDown)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "ada@example.com"), ("password", "password1")])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains(UNEXPECTED_MESSAGE));
        assert!(!body.contains("connection refused"));
    }

    #[actix_web::test]
    async fn test_login_page_messages_follow_query_flags() {
        let app_state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_page_handler)).await;

        let cases = [
            ("/login?error=true", BAD_CREDENTIALS_MESSAGE),
            ("/login?logout=true", LOGGED_OUT_MESSAGE),
            ("/login?expired=true", EXPIRED_MESSAGE),
        ];

        for (uri, expected) in cases {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200);

            let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
            assert!(body.contains(expected), "{uri} should show {expected}");
        }
    }
}
