use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::domain::validation::{TodoInput, TodoValidationErrors};
use crate::modules::todo::application::ports::outgoing::todo_repository::TodoRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTodoError {
    #[error("Validation failed: {0}")]
    Validation(TodoValidationErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TodoRepositoryError> for CreateTodoError {
    fn from(err: TodoRepositoryError) -> Self {
        CreateTodoError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait CreateTodoUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, input: TodoInput) -> Result<Todo, CreateTodoError>;
}
