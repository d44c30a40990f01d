use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Shared columns and cascade FK for rows nested under an instructor.
fn nested_table<T>(table: T, fk_name: &str) -> TableCreateStatement
where
    T: IntoIden + Copy + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(Nested::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Nested::InstructorId).uuid().not_null())
        .col(
            ColumnDef::new(Nested::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Nested::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name(fk_name)
                .from(table, Nested::InstructorId)
                .to(Instructors::Table, Instructors::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // instructors (one per user)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Instructors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Instructors::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Instructors::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Instructors::JobTitle)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Instructors::JobStartDate).date().not_null())
                    .col(ColumnDef::new(Instructors::JobEndDate).date())
                    .col(
                        ColumnDef::new(Instructors::ExperienceYear)
                            .integer()
                            .not_null()
                            .check(Expr::col(Instructors::ExperienceYear).gte(0)),
                    )
                    .col(ColumnDef::new(Instructors::Birthdate).date().not_null())
                    .col(
                        ColumnDef::new(Instructors::Status)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Instructors::Resume)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Instructors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Instructors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_instructors_user_id")
                            .from(Instructors::Table, Instructors::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Nested records
        // =====================================================
        manager
            .create_table(
                nested_table(Skills::Table, "fk_skills_instructor_id")
                    .col(ColumnDef::new(Skills::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Skills::Level).string_len(20).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                nested_table(Educations::Table, "fk_educations_instructor_id")
                    .col(ColumnDef::new(Educations::Major).string_len(255).not_null())
                    .col(ColumnDef::new(Educations::Degree).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Educations::Institution)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Educations::StartDate).date().not_null())
                    .col(ColumnDef::new(Educations::EndDate).date())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                nested_table(Experiences::Table, "fk_experiences_instructor_id")
                    .col(
                        ColumnDef::new(Experiences::JobTitle)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Company)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::Level).string_len(10).not_null())
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes and triggers
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_skills_instructor_id ON skills (instructor_id);
                CREATE INDEX idx_educations_instructor_id ON educations (instructor_id);
                CREATE INDEX idx_experiences_instructor_id ON experiences (instructor_id);
                "#,
            )
            .await?;

        for table in ["instructors", "skills", "educations", "experiences"] {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    r#"
                    CREATE TRIGGER update_{table}_updated_at
                    BEFORE UPDATE ON {table}
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                    "#
                ))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Instructors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Instructors {
    Table,
    Id,
    UserId,
    JobTitle,
    JobStartDate,
    JobEndDate,
    ExperienceYear,
    Birthdate,
    Status,
    Resume,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Nested {
    Id,
    InstructorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Skills {
    Table,
    Name,
    Level,
}

#[derive(DeriveIden, Clone, Copy)]
enum Educations {
    Table,
    Major,
    Degree,
    Institution,
    StartDate,
    EndDate,
}

#[derive(DeriveIden, Clone, Copy)]
enum Experiences {
    Table,
    JobTitle,
    Company,
    Level,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
