use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, Set};

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::application::domain::entities::Todo;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub user_id: Uuid,

    pub title: String,

    #[sea_orm(nullable)]
    pub description: Option<String>,

    #[sea_orm(nullable)]
    pub due_date: Option<Date>,

    pub completed: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub completed_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Todo {
        Todo {
            id: self.id,
            owner: UserId::from(self.user_id),
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            completed: self.completed,
            completed_at: self.completed_at.map(|t| t.with_timezone(&chrono::Utc)),
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = Set(chrono::Utc::now().fixed_offset());
        }
        Ok(self)
    }
}
