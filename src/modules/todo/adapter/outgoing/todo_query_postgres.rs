use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::todo::adapter::outgoing::sea_orm_entity::todos::{Column, Entity};
use crate::modules::todo::application::domain::entities::Todo;
use crate::modules::todo::application::domain::listing::{
    PageRequest, PageResult, SortDirection, TodoFilter, TodoSort, TodoSortField,
};
use crate::modules::todo::application::ports::outgoing::todo_query::{TodoQuery, TodoQueryError};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct TodoQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TodoQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn owned_by(owner: UserId) -> Select<Entity> {
        let owner_uuid: Uuid = owner.into();
        Entity::find().filter(Column::UserId.eq(owner_uuid))
    }

    async fn fetch_page(
        &self,
        query: Select<Entity>,
        page: PageRequest,
    ) -> Result<PageResult<Todo>, TodoQueryError> {
        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            models.iter().map(|m| m.to_domain()).collect(),
            page,
            total,
        ))
    }
}

#[async_trait]
impl TodoQuery for TodoQueryPostgres {
    async fn find_by_id_and_owner(
        &self,
        owner: UserId,
        todo_id: Uuid,
    ) -> Result<Option<Todo>, TodoQueryError> {
        let model = Self::owned_by(owner)
            .filter(Column::Id.eq(todo_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn list(
        &self,
        owner: UserId,
        filter: &TodoFilter,
        sort: TodoSort,
        page: PageRequest,
    ) -> Result<PageResult<Todo>, TodoQueryError> {
        let mut query = Self::owned_by(owner);

        query = match filter {
            TodoFilter::All => query,
            TodoFilter::Completed(completed) => query.filter(Column::Completed.eq(*completed)),
            TodoFilter::TitleContains(term) => {
                let pattern = format!("%{}%", escape_like(term));
                query.filter(Expr::col(Column::Title).ilike(pattern))
            }
        };

        // Id breaks ties so paging is stable
        let order = match sort.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };
        query = query
            .order_by(sort_column(sort.field), order.clone())
            .order_by(Column::Id, order);

        self.fetch_page(query, page).await
    }

    async fn list_overdue(
        &self,
        owner: UserId,
        today: NaiveDate,
        page: PageRequest,
    ) -> Result<PageResult<Todo>, TodoQueryError> {
        let query = Self::owned_by(owner)
            .filter(Column::Completed.eq(false))
            .filter(Column::DueDate.lt(today))
            .order_by_asc(Column::DueDate)
            .order_by_asc(Column::Id);

        self.fetch_page(query, page).await
    }

    async fn list_due_between(
        &self,
        owner: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Todo>, TodoQueryError> {
        let models = Self::owned_by(owner)
            .filter(Column::Completed.eq(false))
            .filter(Column::DueDate.between(from, to))
            .order_by_asc(Column::DueDate)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn count_all(&self, owner: UserId) -> Result<u64, TodoQueryError> {
        Self::owned_by(owner)
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn count_by_completed(
        &self,
        owner: UserId,
        completed: bool,
    ) -> Result<u64, TodoQueryError> {
        Self::owned_by(owner)
            .filter(Column::Completed.eq(completed))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn count_overdue(&self, owner: UserId, today: NaiveDate) -> Result<u64, TodoQueryError> {
        Self::owned_by(owner)
            .filter(Column::Completed.eq(false))
            .filter(Column::DueDate.lt(today))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn sort_column(field: TodoSortField) -> Column {
    match field {
        TodoSortField::CreatedAt => Column::CreatedAt,
        TodoSortField::UpdatedAt => Column::UpdatedAt,
        TodoSortField::DueDate => Column::DueDate,
        TodoSortField::Title => Column::Title,
        TodoSortField::Completed => Column::Completed,
    }
}

/// Makes `%`, `_` and `\` match literally inside an ILIKE pattern.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn map_db_err(e: DbErr) -> TodoQueryError {
    TodoQueryError::DatabaseError(e.to_string())
}
