use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::todo::adapter::incoming::web::forms::parse_todo_id;
use crate::modules::todo::adapter::incoming::web::views::{user_context, TodoView};
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::ports::incoming::use_cases::GetTodoError;
use crate::shared::web::{render_page, see_other_with_flash, FlashMessage};
use crate::AppState;

/// Loads an owned todo, or produces the redirect the caller should return.
pub(super) async fn load_owned_todo(
    data: &AppState,
    user: &AuthenticatedUser,
    raw_id: &str,
) -> Result<Todo, HttpResponse> {
    let Some(todo_id) = parse_todo_id(raw_id) else {
        return Err(see_other_with_flash("/todos", FlashMessage::TodoNotFound));
    };

    match data.todo.get_single.execute(user.user_id, todo_id).await {
        Ok(todo) => Ok(todo),
        Err(GetTodoError::NotFound) => {
            Err(see_other_with_flash("/todos", FlashMessage::TodoNotFound))
        }
        Err(e) => {
            error!(error = %e, todo_id = %todo_id, "Failed to load todo");
            Err(see_other_with_flash("/todos", FlashMessage::TodoLoadFailed))
        }
    }
}

#[get("/todos/{id}")]
pub async fn todo_detail_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let todo = match load_owned_todo(&data, &user, &path).await {
        Ok(todo) => todo,
        Err(redirect) => return redirect,
    };

    let mut context = user_context(&user);
    context.insert("todo", &TodoView::new(&todo, data.clock.today()));

    render_page(&req, &data.templates, "todo/detail.html", context)
}
