use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::Todo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTodoError {
    #[error("Todo not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTodoUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, todo_id: Uuid) -> Result<Todo, GetTodoError>;
}
