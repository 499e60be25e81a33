use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::todo::adapter::incoming::web::forms::parse_todo_id;
use crate::modules::todo::application::domain::entities::CompletionChange;
use crate::modules::todo::application::ports::incoming::use_cases::ChangeCompletionError;
use crate::shared::web::{see_other_with_flash, FlashMessage};
use crate::AppState;

async fn change_completion(
    user: &AuthenticatedUser,
    raw_id: &str,
    change: CompletionChange,
    data: &AppState,
) -> HttpResponse {
    let Some(todo_id) = parse_todo_id(raw_id) else {
        return see_other_with_flash("/todos", FlashMessage::TodoNotFound);
    };

    let flash = match data
        .todo
        .change_completion
        .execute(user.user_id, todo_id, change)
        .await
    {
        Ok(todo) if todo.completed => FlashMessage::TodoCompleted,
        Ok(_) => FlashMessage::TodoReopened,
        Err(ChangeCompletionError::NotFound) => FlashMessage::TodoNotFound,
        Err(e) => {
            error!(error = %e, todo_id = %todo_id, ?change, "Completion change failed");
            FlashMessage::TodoUpdateFailed
        }
    };

    see_other_with_flash("/todos", flash)
}

#[post("/todos/{id}/toggle")]
pub async fn toggle_todo_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    change_completion(&user, &path, CompletionChange::Toggle, &data).await
}

#[post("/todos/{id}/complete")]
pub async fn complete_todo_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    change_completion(&user, &path, CompletionChange::Complete, &data).await
}

#[post("/todos/{id}/incomplete")]
pub async fn reopen_todo_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    change_completion(&user, &path, CompletionChange::Reopen, &data).await
}
