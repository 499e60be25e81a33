use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::{CompletionChange, Todo};
use crate::modules::todo::application::domain::listing::{
    PageRequest, PageResult, SortDirection, TodoFilter, TodoSort, TodoSortField,
};
use crate::modules::todo::application::ports::outgoing::todo_query::{TodoQuery, TodoQueryError};
use crate::modules::todo::application::ports::outgoing::todo_repository::{
    CreateTodoData, TodoRepository, TodoRepositoryError, UpdateTodoData,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn timestamp(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

/// An open todo created on 2025-01-01 with no due date.
pub fn sample_todo(owner: UserId, title: &str) -> Todo {
    let created = timestamp(2025, 1, 1);
    Todo {
        id: Uuid::new_v4(),
        owner,
        title: title.to_string(),
        description: None,
        due_date: None,
        completed: false,
        completed_at: None,
        created_at: created,
        updated_at: created,
    }
}

pub fn due_todo(owner: UserId, title: &str, due: NaiveDate) -> Todo {
    Todo {
        due_date: Some(due),
        ..sample_todo(owner, title)
    }
}

/// Shared in-memory store implementing both todo ports, for service tests.
#[derive(Clone, Default)]
pub struct InMemoryTodoStore {
    todos: Arc<Mutex<Vec<Todo>>>,
    failure: Option<String>,
}

impl InMemoryTodoStore {
    pub fn with(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(Mutex::new(todos)),
            failure: None,
        }
    }

    /// Every call fails with a database error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            todos: Arc::default(),
            failure: Some(message.to_string()),
        }
    }

    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos.lock().unwrap().clone()
    }

    fn check_query(&self) -> Result<(), TodoQueryError> {
        match &self.failure {
            Some(msg) => Err(TodoQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }

    fn check_repository(&self) -> Result<(), TodoRepositoryError> {
        match &self.failure {
            Some(msg) => Err(TodoRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }

    fn owned(&self, owner: UserId) -> Vec<Todo> {
        self.todos
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.owner == owner)
            .cloned()
            .collect()
    }

    fn with_owned<T>(
        &self,
        owner: UserId,
        todo_id: Uuid,
        f: impl FnOnce(&mut Todo) -> T,
    ) -> Result<T, TodoRepositoryError> {
        self.check_repository()?;
        let mut todos = self.todos.lock().unwrap();
        let todo = todos
            .iter_mut()
            .find(|t| t.id == todo_id && t.owner == owner)
            .ok_or(TodoRepositoryError::NotFound)?;
        Ok(f(todo))
    }
}

fn compare(a: &Todo, b: &Todo, field: TodoSortField) -> Ordering {
    match field {
        TodoSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        TodoSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        TodoSortField::DueDate => a.due_date.cmp(&b.due_date),
        TodoSortField::Title => a.title.cmp(&b.title),
        TodoSortField::Completed => a.completed.cmp(&b.completed),
    }
}

fn paginate(items: Vec<Todo>, page: PageRequest) -> PageResult<Todo> {
    let total = items.len() as u64;
    let slice = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.size as usize)
        .collect();
    PageResult::new(slice, page, total)
}

#[async_trait]
impl TodoQuery for InMemoryTodoStore {
    async fn find_by_id_and_owner(
        &self,
        owner: UserId,
        todo_id: Uuid,
    ) -> Result<Option<Todo>, TodoQueryError> {
        self.check_query()?;
        Ok(self.owned(owner).into_iter().find(|t| t.id == todo_id))
    }

    async fn list(
        &self,
        owner: UserId,
        filter: &TodoFilter,
        sort: TodoSort,
        page: PageRequest,
    ) -> Result<PageResult<Todo>, TodoQueryError> {
        self.check_query()?;
        let mut items: Vec<Todo> = self
            .owned(owner)
            .into_iter()
            .filter(|t| match filter {
                TodoFilter::All => true,
                TodoFilter::Completed(c) => t.completed == *c,
                TodoFilter::TitleContains(term) => {
                    t.title.to_lowercase().contains(&term.to_lowercase())
                }
            })
            .collect();

        items.sort_by(|a, b| {
            let ord = compare(a, b, sort.field).then(a.id.cmp(&b.id));
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });

        Ok(paginate(items, page))
    }

    async fn list_overdue(
        &self,
        owner: UserId,
        today: NaiveDate,
        page: PageRequest,
    ) -> Result<PageResult<Todo>, TodoQueryError> {
        self.check_query()?;
        let mut items: Vec<Todo> = self
            .owned(owner)
            .into_iter()
            .filter(|t| t.is_overdue(today))
            .collect();
        items.sort_by_key(|t| (t.due_date, t.id));
        Ok(paginate(items, page))
    }

    async fn list_due_between(
        &self,
        owner: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Todo>, TodoQueryError> {
        self.check_query()?;
        let mut items: Vec<Todo> = self
            .owned(owner)
            .into_iter()
            .filter(|t| !t.completed && t.due_date.is_some_and(|d| d >= from && d <= to))
            .collect();
        items.sort_by_key(|t| (t.due_date, t.id));
        Ok(items)
    }

    async fn count_all(&self, owner: UserId) -> Result<u64, TodoQueryError> {
        self.check_query()?;
        Ok(self.owned(owner).len() as u64)
    }

    async fn count_by_completed(
        &self,
        owner: UserId,
        completed: bool,
    ) -> Result<u64, TodoQueryError> {
        self.check_query()?;
        Ok(self
            .owned(owner)
            .iter()
            .filter(|t| t.completed == completed)
            .count() as u64)
    }

    async fn count_overdue(&self, owner: UserId, today: NaiveDate) -> Result<u64, TodoQueryError> {
        self.check_query()?;
        Ok(self
            .owned(owner)
            .iter()
            .filter(|t| t.is_overdue(today))
            .count() as u64)
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoStore {
    async fn create_todo(&self, data: CreateTodoData) -> Result<Todo, TodoRepositoryError> {
        self.check_repository()?;
        let now = Utc::now();
        let todo = Todo {
            id: Uuid::new_v4(),
            owner: data.owner,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };
        self.todos.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn update_todo(
        &self,
        owner: UserId,
        todo_id: Uuid,
        data: UpdateTodoData,
    ) -> Result<Todo, TodoRepositoryError> {
        self.with_owned(owner, todo_id, |todo| {
            todo.title = data.title;
            todo.description = data.description;
            todo.due_date = data.due_date;
            todo.updated_at = Utc::now();
            todo.clone()
        })
    }

    async fn change_completion(
        &self,
        owner: UserId,
        todo_id: Uuid,
        change: CompletionChange,
        now: DateTime<Utc>,
    ) -> Result<Todo, TodoRepositoryError> {
        self.with_owned(owner, todo_id, |todo| {
            change.apply(todo, now);
            todo.updated_at = now;
            todo.clone()
        })
    }

    async fn delete_todo(&self, owner: UserId, todo_id: Uuid) -> Result<(), TodoRepositoryError> {
        self.check_repository()?;
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| !(t.id == todo_id && t.owner == owner));
        if todos.len() == before {
            return Err(TodoRepositoryError::NotFound);
        }
        Ok(())
    }
}
