use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One profile per user; the user id doubles as the primary key
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profiles::FirstName).string_len(50))
                    .col(ColumnDef::new(Profiles::LastName).string_len(50))
                    .col(ColumnDef::new(Profiles::Avatar).string_len(255))
                    .col(ColumnDef::new(Profiles::Caption).text())
                    .col(ColumnDef::new(Profiles::Phone).string_len(11))
                    .col(ColumnDef::new(Profiles::Gender).string_len(1))
                    .col(ColumnDef::new(Profiles::FullAddress).text())
                    .col(ColumnDef::new(Profiles::FacebookUrl).string_len(200))
                    .col(ColumnDef::new(Profiles::GithubUrl).string_len(200))
                    .col(ColumnDef::new(Profiles::LinkedinUrl).string_len(200))
                    .col(ColumnDef::new(Profiles::TwitterUrl).string_len(200))
                    .col(ColumnDef::new(Profiles::WebsiteUrl).string_len(200))
                    .col(
                        ColumnDef::new(Profiles::IsPublic)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_user_id")
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_profiles_updated_at
                BEFORE UPDATE ON profiles
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_profiles_updated_at ON profiles")
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    UserId,
    FirstName,
    LastName,
    Avatar,
    Caption,
    Phone,
    Gender,
    FullAddress,
    FacebookUrl,
    GithubUrl,
    LinkedinUrl,
    TwitterUrl,
    WebsiteUrl,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
