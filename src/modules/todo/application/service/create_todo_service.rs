use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::domain::validation::{TodoDraft, TodoInput};
use crate::modules::todo::application::ports::incoming::use_cases::{
    CreateTodoError, CreateTodoUseCase,
};
use crate::modules::todo::application::ports::outgoing::todo_repository::{
    CreateTodoData, TodoRepository,
};
use crate::shared::clock::Clock;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateTodoService<R>
where
    R: TodoRepository,
{
    todo_repository: R,
    clock: Arc<dyn Clock>,
}

impl<R> CreateTodoService<R>
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
impl<R> CreateTodoUseCase for CreateTodoService<R>
where
    R: TodoRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, input: TodoInput) -> Result<Todo, CreateTodoError> {
        let draft =
            TodoDraft::parse(&input, self.clock.today()).map_err(CreateTodoError::Validation)?;

        let todo = self
            .todo_repository
            .create_todo(CreateTodoData {
                owner,
                title: draft.title,
                description: draft.description,
                due_date: draft.due_date,
            })
            .await?;

        info!(todo_id = %todo.id, owner = %owner, "Todo created");
        Ok(todo)
    }
}
