use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::domain::listing::{
    PageRequest, PageResult, TodoFilter, TodoSort,
};
use crate::modules::todo::application::ports::outgoing::todo_query::TodoQueryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTodosError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<TodoQueryError> for ListTodosError {
    fn from(err: TodoQueryError) -> Self {
        match err {
            TodoQueryError::DatabaseError(msg) => ListTodosError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct ListTodosQuery {
    pub filter: TodoFilter,
    pub sort: TodoSort,
    pub page: PageRequest,
}

/// One listing page plus the date-based side panels.
#[derive(Debug, Clone)]
pub struct TodoListing {
    pub page: PageResult<Todo>,
    pub due_today: Vec<Todo>,
    pub upcoming: Vec<Todo>,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListTodosUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        query: ListTodosQuery,
    ) -> Result<TodoListing, ListTodosError>;
}
