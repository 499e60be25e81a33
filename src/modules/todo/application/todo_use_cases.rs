use std::sync::Arc;

use crate::modules::todo::application::ports::incoming::use_cases::{
    ChangeCompletionUseCase, CreateTodoUseCase, DeleteTodoUseCase, GetTodoStatisticsUseCase,
    GetTodoUseCase, ListOverdueTodosUseCase, ListTodosUseCase, UpdateTodoUseCase,
};

#[derive(Clone)]
pub struct TodoUseCases {
    pub create: Arc<dyn CreateTodoUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetTodoUseCase + Send + Sync>,
    pub get_list: Arc<dyn ListTodosUseCase + Send + Sync>,
    pub get_overdue: Arc<dyn ListOverdueTodosUseCase + Send + Sync>,
    pub statistics: Arc<dyn GetTodoStatisticsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTodoUseCase + Send + Sync>,
    pub change_completion: Arc<dyn ChangeCompletionUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTodoUseCase + Send + Sync>,
}
