use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::domain::validation::{TodoDraft, TodoInput};
use crate::modules::todo::application::ports::incoming::use_cases::{
    UpdateTodoError, UpdateTodoUseCase,
};
use crate::modules::todo::application::ports::outgoing::todo_query::{
    TodoQuery, TodoQueryError,
};
use crate::modules::todo::application::ports::outgoing::todo_repository::{
    TodoRepository, UpdateTodoData,
};
use crate::shared::clock::Clock;

pub struct UpdateTodoService<R, Q>
where
    R: TodoRepository,
    Q: TodoQuery,
{
    todo_repository: R,
    todo_query: Q,
    clock: Arc<dyn Clock>,
}

impl<R, Q> UpdateTodoService<R, Q>
where
    R: TodoRepository,
    Q: TodoQuery,
{
    pub fn new(todo_repository: R, todo_query: Q, clock: Arc<dyn Clock>) -> Self {
        Self {
            todo_repository,
            todo_query,
            clock,
        }
    }
}

#[async_trait]
impl<R, Q> UpdateTodoUseCase for UpdateTodoService<R, Q>
where
    R: TodoRepository + Send + Sync,
    Q: TodoQuery + Send + Sync,
{
    /// Ownership is resolved before the form is validated, so an unknown or
    /// foreign id is always `NotFound`.
    async fn execute(
        &self,
        owner: UserId,
        todo_id: Uuid,
        input: TodoInput,
    ) -> Result<Todo, UpdateTodoError> {
        self.todo_query
            .find_by_id_and_owner(owner, todo_id)
            .await
            .map_err(|e| match e {
                TodoQueryError::DatabaseError(msg) => UpdateTodoError::RepositoryError(msg),
            })?
            .ok_or(UpdateTodoError::NotFound)?;

        let draft =
            TodoDraft::parse(&input, self.clock.today()).map_err(UpdateTodoError::Validation)?;

        // The repository re-checks ownership under a row lock.
        let todo = self
            .todo_repository
            .update_todo(
                owner,
                todo_id,
                UpdateTodoData {
                    title: draft.title,
                    description: draft.description,
                    due_date: draft.due_date,
                },
            )
            .await?;

        info!(todo_id = %todo.id, "Todo updated");
        Ok(todo)
    }
}
