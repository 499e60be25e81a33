pub mod todo_query;
pub mod todo_repository;
