pub mod forms;
pub mod routes;
pub mod views;
