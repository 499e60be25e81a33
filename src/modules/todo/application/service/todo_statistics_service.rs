use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::statistics::{StatisticsOutcome, TodoStatistics};
use crate::modules::todo::application::ports::incoming::use_cases::GetTodoStatisticsUseCase;
use crate::modules::todo::application::ports::outgoing::todo_query::TodoQuery;
use crate::shared::clock::Clock;

pub struct TodoStatisticsService<Q>
where
    Q: TodoQuery,
{
    query: Q,
    clock: Arc<dyn Clock>,
}

impl<Q> TodoStatisticsService<Q>
where
    Q: TodoQuery,
{
    pub fn new(query: Q, clock: Arc<dyn Clock>) -> Self {
        Self { query, clock }
    }
}

#[async_trait]
impl<Q> GetTodoStatisticsUseCase for TodoStatisticsService<Q>
where
    Q: TodoQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> StatisticsOutcome {
        let today = self.clock.today();

        let counts = futures::try_join!(
            self.query.count_all(owner),
            self.query.count_by_completed(owner, true),
            self.query.count_by_completed(owner, false),
            self.query.count_overdue(owner, today),
        );

        match counts {
            Ok((total, completed, incomplete, overdue)) => StatisticsOutcome::Computed(
                TodoStatistics::from_counts(total, completed, incomplete, overdue),
            ),
            Err(e) => StatisticsOutcome::Unavailable(e.to_string()),
        }
    }
}
