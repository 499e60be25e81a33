use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::domain::listing::{PageRequest, PageResult};
use crate::modules::todo::application::ports::incoming::use_cases::{
    ListOverdueTodosUseCase, ListTodosError,
};
use crate::modules::todo::application::ports::outgoing::todo_query::TodoQuery;
use crate::shared::clock::Clock;

pub struct ListOverdueTodosService<Q>
where
    Q: TodoQuery,
{
    query: Q,
    clock: Arc<dyn Clock>,
}

impl<Q> ListOverdueTodosService<Q>
where
    Q: TodoQuery,
{
    pub fn new(query: Q, clock: Arc<dyn Clock>) -> Self {
        Self { query, clock }
    }
}

#[async_trait]
impl<Q> ListOverdueTodosUseCase for ListOverdueTodosService<Q>
where
    Q: TodoQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Todo>, ListTodosError> {
        Ok(self
            .query
            .list_overdue(owner, self.clock.today(), page)
            .await?)
    }
}
