use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::{CompletionChange, Todo};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangeCompletionError {
    #[error("Todo not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Toggle, mark complete or reopen. Returns the todo as stored afterwards.
#[async_trait]
pub trait ChangeCompletionUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        todo_id: Uuid,
        change: CompletionChange,
    ) -> Result<Todo, ChangeCompletionError>;
}
