pub mod change_completion_service;
pub mod create_todo_service;
pub mod delete_todo_service;
pub mod get_todo_service;
pub mod list_overdue_todos_service;
pub mod list_todos_service;
pub mod todo_statistics_service;
pub mod update_todo_service;

pub use change_completion_service::ChangeCompletionService;
pub use create_todo_service::CreateTodoService;
pub use delete_todo_service::DeleteTodoService;
pub use get_todo_service::GetTodoService;
pub use list_overdue_todos_service::ListOverdueTodosService;
pub use list_todos_service::ListTodosService;
pub use todo_statistics_service::TodoStatisticsService;
pub use update_todo_service::UpdateTodoService;
