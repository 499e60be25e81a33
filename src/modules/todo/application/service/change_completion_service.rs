use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::{CompletionChange, Todo};
use crate::modules::todo::application::ports::incoming::use_cases::{
    ChangeCompletionError, ChangeCompletionUseCase,
};
use crate::modules::todo::application::ports::outgoing::todo_repository::{
    TodoRepository, TodoRepositoryError,
};
use crate::shared::clock::Clock;

pub struct ChangeCompletionService<R>
where
    R: TodoRepository,
{
    todo_repository: R,
    clock: Arc<dyn Clock>,
}

impl<R> ChangeCompletionService<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repository: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            todo_repository,
            clock,
        }
    }
}

#[async_trait]
impl<R> ChangeCompletionUseCase for ChangeCompletionService<R>
where
    R: TodoRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        todo_id: Uuid,
        change: CompletionChange,
    ) -> Result<Todo, ChangeCompletionError> {
        let todo = self
            .todo_repository
            .change_completion(owner, todo_id, change, self.clock.now())
            .await
            .map_err(|e| match e {
                TodoRepositoryError::NotFound => ChangeCompletionError::NotFound,
                TodoRepositoryError::DatabaseError(msg) => {
                    ChangeCompletionError::RepositoryError(msg)
                }
            })?;

        info!(todo_id = %todo.id, completed = todo.completed, "Todo completion changed");
        Ok(todo)
    }
}
