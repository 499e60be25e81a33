use actix_web::{get, post, web, HttpRequest, Responder};
use tracing::{error, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::todo::adapter::incoming::web::forms::TodoForm;
use crate::modules::todo::adapter::incoming::web::views::{
    form_context, insert_field_errors, TodoFormView,
};
use crate::modules::todo::application::domain::validation::TodoInput;
use crate::modules::todo::application::ports::incoming::use_cases::CreateTodoError;
use crate::shared::web::{render_page, see_other_with_flash, FlashMessage};
use crate::AppState;

const CREATE_FAILED_MESSAGE: &str = "An error occurred while creating the todo.";

#[get("/todos/new")]
pub async fn new_todo_page_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let context = form_context(&user, None, TodoFormView::default(), data.clock.today());
    render_page(&req, &data.templates, "todo/form.html", context)
}

#[post("/todos")]
pub async fn create_todo_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    form: web::Form<TodoForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = TodoInput::from(form.into_inner());
    let mut context = form_context(
        &user,
        None,
        TodoFormView::from(&input),
        data.clock.today(),
    );

    match data.todo.create.execute(user.user_id, input).await {
        Ok(_) => return see_other_with_flash("/todos", FlashMessage::TodoCreated),

        Err(CreateTodoError::Validation(errors)) => {
            warn!(error = %errors, "Todo creation rejected");
            insert_field_errors(&mut context, &errors);
        }

        Err(e) => {
            error!(error = %e, user_id = %user.user_id, "Todo creation failed");
            context.insert("error_message", CREATE_FAILED_MESSAGE);
        }
    }

    render_page(&req, &data.templates, "todo/form.html", context)
}
