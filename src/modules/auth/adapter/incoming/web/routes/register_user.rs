use crate::auth::application::use_cases::register_user::{
    RegisterUserError, RegisterUserInput, RegistrationField,
};
use crate::shared::web::{render_page, see_other_with_flash, FlashMessage};
use crate::AppState;
use actix_web::{get, post, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use tera::Context;
use tracing::{error, info, warn};

/// Registration form body
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Values echoed back into the form when it is re-shown. Passwords never are.
#[derive(Debug, Default, Serialize)]
struct RegisterFormView {
    name: String,
    email: String,
}

const DUPLICATE_EMAIL_MESSAGE: &str = "This email address is already registered.";
const UNEXPECTED_MESSAGE: &str = "An error occurred during registration.";

fn register_context(form: RegisterFormView) -> Context {
    let mut context = Context::new();
    context.insert("form", &form);
    context
}

#[get("/register")]
pub async fn register_page_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    render_page(
        &req,
        &data.templates,
        "auth/register.html",
        register_context(RegisterFormView::default()),
    )
}

#[post("/register")]
pub async fn register_user_handler(
    req: HttpRequest,
    form: web::Form<RegisterForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();
    let view = RegisterFormView {
        name: form.name.clone(),
        email: form.email.clone(),
    };

    let input = RegisterUserInput {
        name: form.name,
        email: form.email,
        password: form.password,
        confirm_password: form.confirm_password,
    };

    let mut context = register_context(view);

    match data.register_user_use_case.execute(input).await {
        Ok(user) => {
            info!(user_id = %user.id, "Registration completed");
            return see_other_with_flash("/login", FlashMessage::Registered);
        }

        Err(RegisterUserError::Validation(e)) => {
            warn!(error = %e, "Registration rejected");
            let key = match e.field() {
                RegistrationField::Name => "name_error",
                RegistrationField::Email => "email_error",
                RegistrationField::Password => "password_error",
            };
            context.insert(key, &e.to_string());
        }

        Err(RegisterUserError::DuplicateEmail) => {
            warn!("Registration rejected: email already registered");
            context.insert("email_error", DUPLICATE_EMAIL_MESSAGE);
        }

        Err(e) => {
            error!(error = %e, "Registration failed");
            context.insert("error_message", UNEXPECTED_MESSAGE);
        }
    }

    render_page(&req, &data.templates, "auth/register.html", context)
}
