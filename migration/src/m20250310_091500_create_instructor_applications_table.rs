use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InstructorApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InstructorApplications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InstructorApplications::FirstName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InstructorApplications::LastName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InstructorApplications::Phone)
                            .string_len(11)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(InstructorApplications::Gender)
                            .string_len(1)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InstructorApplications::Email)
                            .string_len(254)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(InstructorApplications::Address)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InstructorApplications::Resume)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InstructorApplications::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(InstructorApplications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(InstructorApplications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Review queue: filter by status, newest update first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_instructor_applications_status_updated
                ON instructor_applications (status, updated_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_instructor_applications_updated_at
                BEFORE UPDATE ON instructor_applications
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
                DROP TRIGGER IF EXISTS update_instructor_applications_updated_at ON instructor_applications;
                DROP INDEX IF EXISTS idx_instructor_applications_status_updated;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InstructorApplications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InstructorApplications {
    Table,
    Id,
    FirstName,
    LastName,
    Phone,
    Gender,
    Email,
    Address,
    Resume,
    Status,
    CreatedAt,
    UpdatedAt,
}
