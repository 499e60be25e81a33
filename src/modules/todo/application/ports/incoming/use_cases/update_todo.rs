use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::domain::validation::{TodoInput, TodoValidationErrors};
use crate::modules::todo::application::ports::outgoing::todo_repository::TodoRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTodoError {
    #[error("Validation failed: {0}")]
    Validation(TodoValidationErrors),

    #[error("Todo not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TodoRepositoryError> for UpdateTodoError {
    fn from(err: TodoRepositoryError) -> Self {
        match err {
            TodoRepositoryError::NotFound => UpdateTodoError::NotFound,
            TodoRepositoryError::DatabaseError(msg) => UpdateTodoError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait UpdateTodoUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        todo_id: Uuid,
        input: TodoInput,
    ) -> Result<Todo, UpdateTodoError>;
}
