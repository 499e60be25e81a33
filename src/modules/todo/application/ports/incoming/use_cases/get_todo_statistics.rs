use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::statistics::StatisticsOutcome;

/// Never fails outright; a failed count yields `StatisticsOutcome::Unavailable`.
#[async_trait]
pub trait GetTodoStatisticsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> StatisticsOutcome;
}
