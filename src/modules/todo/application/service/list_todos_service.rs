use std::sync::Arc;

use async_trait::async_trait;
use chrono::Days;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::ports::incoming::use_cases::{
    ListTodosError, ListTodosQuery, ListTodosUseCase, TodoListing,
};
use crate::modules::todo::application::ports::outgoing::todo_query::TodoQuery;
use crate::shared::clock::Clock;

/// How many days after today count as "upcoming".
pub const UPCOMING_WINDOW_DAYS: u64 = 3;

pub struct ListTodosService<Q>
where
    Q: TodoQuery,
{
    query: Q,
    clock: Arc<dyn Clock>,
}

impl<Q> ListTodosService<Q>
where
    Q: TodoQuery,
{
    pub fn new(query: Q, clock: Arc<dyn Clock>) -> Self {
        Self { query, clock }
    }
}

#[async_trait]
impl<Q> ListTodosUseCase for ListTodosService<Q>
where
    Q: TodoQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        query: ListTodosQuery,
    ) -> Result<TodoListing, ListTodosError> {
        let today = self.clock.today();

        let page = self
            .query
            .list(owner, &query.filter, query.sort, query.page)
            .await?;

        let due_today = self.query.list_due_between(owner, today, today).await?;

        let upcoming = match (
            today.checked_add_days(Days::new(1)),
            today.checked_add_days(Days::new(UPCOMING_WINDOW_DAYS)),
        ) {
            (Some(from), Some(to)) => self.query.list_due_between(owner, from, to).await?,
            _ => Vec::new(),
        };

        Ok(TodoListing {
            page,
            due_today,
            upcoming,
        })
    }
}
