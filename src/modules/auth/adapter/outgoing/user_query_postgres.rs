use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.to_domain()))
    }

    async fn find_enabled_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .filter(UserColumn::Enabled.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.to_domain()))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserQueryError> {
        let count = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .count(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }
}
