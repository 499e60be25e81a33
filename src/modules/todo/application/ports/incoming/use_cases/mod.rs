mod change_completion;
mod create_todo;
mod delete_todo;
mod get_todo;
mod get_todo_statistics;
mod list_overdue_todos;
mod list_todos;
mod update_todo;

pub use change_completion::{ChangeCompletionError, ChangeCompletionUseCase};
pub use create_todo::{CreateTodoError, CreateTodoUseCase};
pub use delete_todo::{DeleteTodoError, DeleteTodoUseCase};
pub use get_todo::{GetTodoError, GetTodoUseCase};
pub use get_todo_statistics::GetTodoStatisticsUseCase;
pub use list_overdue_todos::ListOverdueTodosUseCase;
pub use list_todos::{ListTodosError, ListTodosQuery, ListTodosUseCase, TodoListing};
pub use update_todo::{UpdateTodoError, UpdateTodoUseCase};
