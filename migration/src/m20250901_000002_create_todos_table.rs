use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create todos table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Todos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Todos::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Todos::UserId).uuid().not_null())
                    .col(ColumnDef::new(Todos::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Todos::Description).string_len(1000))
                    .col(ColumnDef::new(Todos::DueDate).date())
                    .col(
                        ColumnDef::new(Todos::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Todos::CompletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Todos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Todos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_todos_user_id")
                            .from(Todos::Table, Todos::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Owner-scoped listing, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_todos_user_created_at
                ON todos (user_id, created_at DESC);
                "#,
            )
            .await?;

        // Completion filter and statistics counts
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_todos_user_completed
                ON todos (user_id, completed);
                "#,
            )
            .await?;

        // Overdue, due-today and upcoming views only look at open items
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_todos_user_open_due_date
                ON todos (user_id, due_date)
                WHERE completed = false AND due_date IS NOT NULL;
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger (function created with users)
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_todos_updated_at
                BEFORE UPDATE ON todos
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_todos_updated_at ON todos;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_todos_user_created_at;
                DROP INDEX IF EXISTS idx_todos_user_completed;
                DROP INDEX IF EXISTS idx_todos_user_open_due_date;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Todos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Todos {
    Table,
    Id,
    UserId,
    Title,
    Description,
    DueDate,
    Completed,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
