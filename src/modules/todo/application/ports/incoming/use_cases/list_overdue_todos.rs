use async_trait::async_trait;

use super::list_todos::ListTodosError;
use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::domain::listing::{PageRequest, PageResult};

#[async_trait]
pub trait ListOverdueTodosUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Todo>, ListTodosError>;
}
