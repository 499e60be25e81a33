use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// A single task owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Open and due strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    pub fn is_due_today(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date == Some(today)
    }

    /// Keeps `completed_at` in step with `completed`.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        self.completed = completed;
        self.completed_at = completed.then_some(now);
    }
}

/// The three ways a request can change completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionChange {
    Toggle,
    Complete,
    Reopen,
}

impl CompletionChange {
    pub fn apply(self, todo: &mut Todo, now: DateTime<Utc>) {
        let completed = match self {
            CompletionChange::Toggle => !todo.completed,
            CompletionChange::Complete => true,
            CompletionChange::Reopen => false,
        };
        todo.set_completed(completed, now);
    }
}
