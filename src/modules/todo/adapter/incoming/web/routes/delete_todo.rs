use actix_web::{post, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::todo::adapter::incoming::web::forms::parse_todo_id;
use crate::modules::todo::application::ports::incoming::use_cases::DeleteTodoError;
use crate::shared::web::{see_other_with_flash, FlashMessage};
use crate::AppState;

#[post("/todos/{id}/delete")]
pub async fn delete_todo_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(todo_id) = parse_todo_id(&path) else {
        return see_other_with_flash("/todos", FlashMessage::TodoNotFound);
    };

    let flash = match data.todo.delete.execute(user.user_id, todo_id).await {
        Ok(()) => FlashMessage::TodoDeleted,
        Err(DeleteTodoError::NotFound) => FlashMessage::TodoNotFound,
        Err(e) => {
            error!(error = %e, todo_id = %todo_id, "Todo deletion failed");
            FlashMessage::TodoDeleteFailed
        }
    };

    see_other_with_flash("/todos", flash)
}
