use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::adapter::outgoing::sea_orm_entity::todos::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::todo::application::domain::entities::{CompletionChange, Todo};
use crate::modules::todo::application::ports::outgoing::todo_repository::{
    CreateTodoData, TodoRepository, TodoRepositoryError, UpdateTodoData,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TodoRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TodoRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Loads the owned row with `FOR UPDATE` inside `txn`.
async fn lock_owned(
    txn: &DatabaseTransaction,
    owner: UserId,
    todo_id: Uuid,
) -> Result<todos::Model, TodoRepositoryError> {
    let owner_uuid: Uuid = owner.into();

    Entity::find_by_id(todo_id)
        .filter(Column::UserId.eq(owner_uuid))
        .lock_exclusive()
        .one(txn)
        .await
        .map_err(map_db_err)?
        .ok_or(TodoRepositoryError::NotFound)
}

#[async_trait]
impl TodoRepository for TodoRepositoryPostgres {
    async fn create_todo(&self, data: CreateTodoData) -> Result<Todo, TodoRepositoryError> {
        let owner_uuid: Uuid = data.owner.into();
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner_uuid),
            title: Set(data.title),
            description: Set(data.description),
            due_date: Set(data.due_date),
            completed: Set(false),
            completed_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(result.to_domain())
    }

    async fn update_todo(
        &self,
        owner: UserId,
        todo_id: Uuid,
        data: UpdateTodoData,
    ) -> Result<Todo, TodoRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = lock_owned(&txn, owner, todo_id).await?;

        let mut model: ActiveModel = existing.into();
        model.title = Set(data.title);
        model.description = Set(data.description);
        model.due_date = Set(data.due_date);

        let updated = model.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn change_completion(
        &self,
        owner: UserId,
        todo_id: Uuid,
        change: CompletionChange,
        now: DateTime<Utc>,
    ) -> Result<Todo, TodoRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = lock_owned(&txn, owner, todo_id).await?;

        let mut todo = existing.to_domain();
        change.apply(&mut todo, now);

        let mut model: ActiveModel = existing.into();
        model.completed = Set(todo.completed);
        model.completed_at = Set(todo.completed_at.map(|t| t.fixed_offset()));

        let updated = model.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete_todo(&self, owner: UserId, todo_id: Uuid) -> Result<(), TodoRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let result = Entity::delete_many()
            .filter(Column::Id.eq(todo_id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TodoRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> TodoRepositoryError {
    TodoRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_mock_todo_model(id: Uuid, user_id: Uuid, title: &str) -> todos::Model {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap().fixed_offset();

        todos::Model {
            id,
            user_id,
            title: title.to_string(),
            description: Some("Notes".to_string()),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            completed: false,
            completed_at: None,
            created_at: created,
            updated_at: created,
        }
    }

    // ========================================================================
    // create_todo Tests
    // ========================================================================

    #[tokio::test]
    async fn test_create_todo_success() {
        let user_id = Uuid::new_v4();
        let mock_model = create_mock_todo_model(Uuid::new_v4(), user_id, "Buy milk");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model.clone()]])
            .into_connection();
        let repo = TodoRepositoryPostgres::new(Arc::new(db));

        let todo = repo
            .create_todo(CreateTodoData {
                owner: UserId::from(user_id),
                title: "Buy milk".to_string(),
                description: Some("Notes".to_string()),
                due_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            })
            .await
            .unwrap();

        assert_eq!(todo.id, mock_model.id);
        assert_eq!(todo.owner, UserId::from(user_id));
        assert!(!todo.completed);
    }

    #[tokio::test]
    async fn test_create_todo_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("insert failed".to_string())])
            .into_connection();
        let repo = TodoRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_todo(CreateTodoData {
                owner: UserId::from(Uuid::new_v4()),
                title: "Buy milk".to_string(),
                description: None,
                due_date: None,
            })
            .await;

        assert!(matches!(result, Err(TodoRepositoryError::DatabaseError(_))));
    }

    // ========================================================================
    // update_todo Tests
    // ========================================================================

    #[tokio::test]
    async fn test_update_todo_success() {
        let todo_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let existing = create_mock_todo_model(todo_id, user_id, "Old");
        let mut updated = existing.clone();
        updated.title = "New".to_string();
        updated.due_date = None;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing]])
            .append_query_results(vec![vec![updated]])
            .into_connection();
        let repo = TodoRepositoryPostgres::new(Arc::new(db));

        let todo = repo
            .update_todo(
                UserId::from(user_id),
                todo_id,
                UpdateTodoData {
                    title: "New".to_string(),
                    description: Some("Notes".to_string()),
                    due_date: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(todo.title, "New");
        assert_eq!(todo.due_date, None);
    }

    #[tokio::test]
    async fn test_update_todo_not_owned() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<todos::Model>::new()])
            .into_connection();
        let repo = TodoRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update_todo(
                UserId::from(Uuid::new_v4()),
                Uuid::new_v4(),
                UpdateTodoData {
                    title: "New".to_string(),
                    description: None,
                    due_date: None,
                },
            )
            .await;

        assert!(matches!(result, Err(TodoRepositoryError::NotFound)));
    }

    // ========================================================================
    // change_completion Tests
    // ========================================================================

    #[tokio::test]
    async fn test_change_completion_marks_done() {
        let todo_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let existing = create_mock_todo_model(todo_id, user_id, "Water plants");
        let mut stored = existing.clone();
        stored.completed = true;
        stored.completed_at = Some(now.fixed_offset());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing]])
            .append_query_results(vec![vec![stored]])
            .into_connection();
        let repo = TodoRepositoryPostgres::new(Arc::new(db));

        let todo = repo
            .change_completion(
                UserId::from(user_id),
                todo_id,
                CompletionChange::Toggle,
                now,
            )
            .await
            .unwrap();

        assert!(todo.completed);
        assert_eq!(todo.completed_at, Some(now));
    }

    #[tokio::test]
    async fn test_change_completion_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<todos::Model>::new()])
            .into_connection();
        let repo = TodoRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .change_completion(
                UserId::from(Uuid::new_v4()),
                Uuid::new_v4(),
                CompletionChange::Complete,
                Utc::now(),
            )
            .await;

        assert!(matches!(result, Err(TodoRepositoryError::NotFound)));
    }

    // ========================================================================
    // delete_todo Tests
    // ========================================================================

    #[tokio::test]
    async fn test_delete_todo_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = TodoRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .delete_todo(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_todo_not_owned() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = TodoRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .delete_todo(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(TodoRepositoryError::NotFound)));
    }
}
