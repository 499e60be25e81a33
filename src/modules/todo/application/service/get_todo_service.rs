use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::ports::incoming::use_cases::{
    GetTodoError, GetTodoUseCase,
};
use crate::modules::todo::application::ports::outgoing::todo_query::{
    TodoQuery, TodoQueryError,
};

pub struct GetTodoService<Q>
where
    Q: TodoQuery,
{
    query: Q,
}

impl<Q> GetTodoService<Q>
where
    Q: TodoQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTodoUseCase for GetTodoService<Q>
where
    Q: TodoQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId, todo_id: Uuid) -> Result<Todo, GetTodoError> {
        self.query
            .find_by_id_and_owner(owner, todo_id)
            .await
            .map_err(|e| match e {
                TodoQueryError::DatabaseError(msg) => GetTodoError::QueryFailed(msg),
            })?
            .ok_or(GetTodoError::NotFound)
    }
}
