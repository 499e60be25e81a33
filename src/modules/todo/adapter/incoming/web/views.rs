use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tera::Context;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::domain::listing::PageResult;
use crate::modules::todo::application::domain::statistics::TodoStatistics;
use crate::modules::todo::application::domain::validation::{
    TodoField, TodoInput, TodoValidationErrors,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A todo as templates see it: dates pre-formatted, date flags pre-computed.
#[derive(Debug, Clone, Serialize)]
pub struct TodoView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub completed: bool,
    pub completed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub overdue: bool,
    pub due_today: bool,
}

impl TodoView {
    pub fn new(todo: &Todo, today: NaiveDate) -> Self {
        Self {
            id: todo.id.to_string(),
            title: todo.title.clone(),
            description: todo.description.clone(),
            due_date: todo.due_date.map(|d| d.format(DATE_FORMAT).to_string()),
            completed: todo.completed,
            completed_at: todo.completed_at.map(format_timestamp),
            created_at: format_timestamp(todo.created_at),
            updated_at: format_timestamp(todo.updated_at),
            overdue: todo.is_overdue(today),
            due_today: todo.is_due_today(today),
        }
    }

    pub fn list(todos: &[Todo], today: NaiveDate) -> Vec<Self> {
        todos.iter().map(|t| Self::new(t, today)).collect()
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Pagination links; `number` is zero-based, `display_number` one-based.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub number: u64,
    pub display_number: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous: u64,
    pub next: u64,
}

impl PageView {
    pub fn new<T>(page: &PageResult<T>) -> Self {
        Self {
            number: page.page,
            display_number: page.page.saturating_add(1),
            size: page.size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            has_previous: page.page > 0,
            has_next: page.page.saturating_add(1) < page.total_pages,
            previous: page.page.saturating_sub(1),
            next: page.page.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatisticsView {
    pub total: u64,
    pub completed: u64,
    pub incomplete: u64,
    pub overdue: u64,
    pub completion_rate: String,
}

impl From<TodoStatistics> for StatisticsView {
    fn from(stats: TodoStatistics) -> Self {
        Self {
            total: stats.total,
            completed: stats.completed,
            incomplete: stats.incomplete,
            overdue: stats.overdue,
            completion_rate: format!("{:.1}", stats.completion_rate),
        }
    }
}

/// Submitted form values echoed back into the create/edit page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TodoFormView {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl From<&TodoInput> for TodoFormView {
    fn from(input: &TodoInput) -> Self {
        Self {
            title: input.title.clone(),
            description: input.description.clone(),
            due_date: input.due_date.clone(),
        }
    }
}

impl From<&Todo> for TodoFormView {
    fn from(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone().unwrap_or_default(),
            due_date: todo
                .due_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

/// Context shared by every signed-in page.
pub fn user_context(user: &AuthenticatedUser) -> Context {
    let mut context = Context::new();
    context.insert("user_name", &user.name);
    context
}

/// Context for `todo/form.html`. `todo_id` is set when editing.
pub fn form_context(
    user: &AuthenticatedUser,
    todo_id: Option<&str>,
    form: TodoFormView,
    today: NaiveDate,
) -> Context {
    let mut context = user_context(user);
    context.insert("is_edit", &todo_id.is_some());
    if let Some(id) = todo_id {
        context.insert("todo_id", id);
    }
    context.insert("form", &form);
    context.insert("today", &today.format(DATE_FORMAT).to_string());
    context
}

/// Adds one `<field>_error` entry per failing field.
pub fn insert_field_errors(context: &mut Context, errors: &TodoValidationErrors) {
    for error in errors.iter() {
        let key = match error.field() {
            TodoField::Title => "title_error",
            TodoField::Description => "description_error",
            TodoField::DueDate => "due_date_error",
        };
        context.insert(key, &error.to_string());
    }
}
