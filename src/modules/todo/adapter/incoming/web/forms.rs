use serde::Deserialize;
use uuid::Uuid;

use crate::modules::todo::application::domain::listing::{PageRequest, TodoFilter, TodoSort};
use crate::modules::todo::application::domain::validation::TodoInput;
use crate::modules::todo::application::ports::incoming::use_cases::ListTodosQuery;

/// Create/edit form body. Missing fields read as empty.
#[derive(Debug, Default, Deserialize)]
pub struct TodoForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
}

impl From<TodoForm> for TodoInput {
    fn from(form: TodoForm) -> Self {
        TodoInput {
            title: form.title,
            description: form.description,
            due_date: form.due_date,
        }
    }
}

/// `GET /todos` query string
#[derive(Debug, Default, Deserialize)]
pub struct ListTodosParams {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    /// "true" / "false"; anything else (including the empty select option) means no filter
    pub completed: Option<String>,
    pub search: Option<String>,
}

impl ListTodosParams {
    pub fn completed_filter(&self) -> Option<bool> {
        match self.completed.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }

    pub fn to_query(&self) -> ListTodosQuery {
        ListTodosQuery {
            filter: TodoFilter::from_params(self.completed_filter(), self.search.as_deref()),
            sort: TodoSort::from_params(self.sort.as_deref(), self.direction.as_deref()),
            page: PageRequest::new(self.page, self.size),
        }
    }
}

/// `GET /todos/overdue` query string
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl PageParams {
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }
}

/// Path ids that are not UUIDs are treated like ids the user does not own.
pub fn parse_todo_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::todo::application::domain::listing::{SortDirection, TodoSortField};

    #[test]
    fn empty_params_use_defaults() {
        let query = ListTodosParams::default().to_query();

        assert_eq!(query.filter, TodoFilter::All);
        assert_eq!(query.sort, TodoSort::default());
        assert_eq!(query.page, PageRequest::new(Some(0), Some(10)));
    }

    #[test]
    fn completed_select_values() {
        let mut params = ListTodosParams {
            completed: Some("false".to_string()),
            ..Default::default()
        };
        assert_eq!(params.to_query().filter, TodoFilter::Completed(false));

        params.completed = Some(String::new());
        assert_eq!(params.to_query().filter, TodoFilter::All);
    }

    #[test]
    fn full_params_are_mapped() {
        let params = ListTodosParams {
            page: Some(2),
            size: Some(500),
            sort: Some("title".to_string()),
            direction: Some("asc".to_string()),
            completed: Some("true".to_string()),
            search: Some("milk".to_string()),
        };
        let query = params.to_query();

        assert_eq!(query.filter, TodoFilter::TitleContains("milk".to_string()));
        assert_eq!(query.sort.field, TodoSortField::Title);
        assert_eq!(query.sort.direction, SortDirection::Asc);
        assert_eq!(query.page.page, 2);
        assert_eq!(query.page.size, 100);
    }

    #[test]
    fn todo_ids_must_be_uuids() {
        assert!(parse_todo_id("42").is_none());
        assert!(parse_todo_id(&Uuid::new_v4().to_string()).is_some());
    }
}
