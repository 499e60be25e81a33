use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return UserRepositoryError::UserAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            name: Set(data.name),
            enabled: Set(true),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(inserted.to_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_user_data() -> CreateUserData {
        CreateUserData {
            email: "ada@example.com".to_string(),
            name: "Ada Lovelace".to_string(),
            password_hash: "hashed_password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let now = Utc::now();
        let user_id = Uuid::new_v4();
        let mock_user_model = UserModel {
            id: user_id,
            email: "ada@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            name: "Ada Lovelace".to_string(),
            enabled: true,
            created_at: now.into(),
            updated_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_user_model]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let user = repository.create_user(create_test_user_data()).await.unwrap();

        assert_eq!(user.id.value(), user_id);
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name, "Ada Lovelace");
        assert!(user.enabled);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_key_error() {
        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_users_email_unique\""
                    .to_string(),
            )])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.create_user(create_test_user_data()).await;

        assert!(matches!(result, Err(UserRepositoryError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.create_user(create_test_user_data()).await;

        match result {
            Err(UserRepositoryError::DatabaseError(msg)) => {
                assert!(msg.contains("connection timeout"))
            }
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }

    #[test]
    fn sqlstate_code_alone_is_recognised_as_duplicate() {
        let err = DbErr::Custom("error returned from database: 23505".to_string());
        assert!(matches!(
            map_insert_error(err),
            UserRepositoryError::UserAlreadyExists
        ));
    }
}
