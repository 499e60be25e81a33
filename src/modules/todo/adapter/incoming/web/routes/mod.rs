mod change_completion;
mod create_todo;
mod delete_todo;
mod list_overdue_todos;
mod list_todos;
mod todo_detail;
mod update_todo;

pub use change_completion::{complete_todo_handler, reopen_todo_handler, toggle_todo_handler};
pub use create_todo::{create_todo_handler, new_todo_page_handler};
pub use delete_todo::delete_todo_handler;
pub use list_overdue_todos::list_overdue_todos_handler;
pub use list_todos::list_todos_handler;
pub use todo_detail::todo_detail_handler;
pub use update_todo::{edit_todo_page_handler, update_todo_handler};
