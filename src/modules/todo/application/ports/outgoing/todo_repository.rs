use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::{CompletionChange, Todo};

/// Input for creating a new todo (already validated)
#[derive(Debug, Clone)]
pub struct CreateTodoData {
    pub owner: UserId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Replacement values for the editable fields of an existing todo
#[derive(Debug, Clone)]
pub struct UpdateTodoData {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TodoRepositoryError {
    #[error("Todo not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side. Every operation matches on both id and owner.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn create_todo(&self, data: CreateTodoData) -> Result<Todo, TodoRepositoryError>;

    async fn update_todo(
        &self,
        owner: UserId,
        todo_id: Uuid,
        data: UpdateTodoData,
    ) -> Result<Todo, TodoRepositoryError>;

    async fn change_completion(
        &self,
        owner: UserId,
        todo_id: Uuid,
        change: CompletionChange,
        now: DateTime<Utc>,
    ) -> Result<Todo, TodoRepositoryError>;

    async fn delete_todo(&self, owner: UserId, todo_id: Uuid) -> Result<(), TodoRepositoryError>;
}
