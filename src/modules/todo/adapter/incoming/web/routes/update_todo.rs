use actix_web::{get, post, web, HttpRequest, Responder};
use tracing::{error, warn};

use super::todo_detail::load_owned_todo;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::todo::adapter::incoming::web::forms::{parse_todo_id, TodoForm};
use crate::modules::todo::adapter::incoming::web::views::{
    form_context, insert_field_errors, TodoFormView,
};
use crate::modules::todo::application::domain::validation::TodoInput;
use crate::modules::todo::application::ports::incoming::use_cases::UpdateTodoError;
use crate::shared::web::{render_page, see_other_with_flash, FlashMessage};
use crate::AppState;

const UPDATE_FAILED_MESSAGE: &str = "An error occurred while updating the todo.";

#[get("/todos/{id}/edit")]
pub async fn edit_todo_page_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let todo = match load_owned_todo(&data, &user, &path).await {
        Ok(todo) => todo,
        Err(redirect) => return redirect,
    };

    let context = form_context(
        &user,
        Some(&todo.id.to_string()),
        TodoFormView::from(&todo),
        data.clock.today(),
    );
    render_page(&req, &data.templates, "todo/form.html", context)
}

#[post("/todos/{id}")]
pub async fn update_todo_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    path: web::Path<String>,
    form: web::Form<TodoForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(todo_id) = parse_todo_id(&path) else {
        return see_other_with_flash("/todos", FlashMessage::TodoNotFound);
    };

    let input = TodoInput::from(form.into_inner());
    let mut context = form_context(
        &user,
        Some(&todo_id.to_string()),
        TodoFormView::from(&input),
        data.clock.today(),
    );

    match data.todo.update.execute(user.user_id, todo_id, input).await {
        Ok(_) => return see_other_with_flash("/todos", FlashMessage::TodoUpdated),

        Err(UpdateTodoError::NotFound) => {
            warn!(todo_id = %todo_id, user_id = %user.user_id, "Update of unknown todo");
            return see_other_with_flash("/todos", FlashMessage::TodoNotFound);
        }

        Err(UpdateTodoError::Validation(errors)) => {
            warn!(error = %errors, "Todo update rejected");
            insert_field_errors(&mut context, &errors);
        }

        Err(e) => {
            error!(error = %e, todo_id = %todo_id, "Todo update failed");
            context.insert("error_message", UPDATE_FAILED_MESSAGE);
        }
    }

    render_page(&req, &data.templates, "todo/form.html", context)
}
