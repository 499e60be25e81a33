use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::domain::listing::{
    PageRequest, PageResult, TodoFilter, TodoSort,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum TodoQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side, always owner-scoped)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TodoQuery: Send + Sync {
    async fn find_by_id_and_owner(
        &self,
        owner: UserId,
        todo_id: Uuid,
    ) -> Result<Option<Todo>, TodoQueryError>;

    /// Filtered, sorted page of the owner's todos
    async fn list(
        &self,
        owner: UserId,
        filter: &TodoFilter,
        sort: TodoSort,
        page: PageRequest,
    ) -> Result<PageResult<Todo>, TodoQueryError>;

    /// Open todos due before `today`, earliest first
    async fn list_overdue(
        &self,
        owner: UserId,
        today: NaiveDate,
        page: PageRequest,
    ) -> Result<PageResult<Todo>, TodoQueryError>;

    /// Open todos due within `from..=to`, earliest first
    async fn list_due_between(
        &self,
        owner: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Todo>, TodoQueryError>;

    async fn count_all(&self, owner: UserId) -> Result<u64, TodoQueryError>;

    async fn count_by_completed(
        &self,
        owner: UserId,
        completed: bool,
    ) -> Result<u64, TodoQueryError>;

    async fn count_overdue(&self, owner: UserId, today: NaiveDate) -> Result<u64, TodoQueryError>;
}
