pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250310_091200_create_profiles_table;
mod m20250310_091500_create_instructor_applications_table;
mod m20250312_140000_create_instructor_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250310_091200_create_profiles_table::Migration),
            Box::new(m20250310_091500_create_instructor_applications_table::Migration),
            Box::new(m20250312_140000_create_instructor_tables::Migration),
        ]
    }
}
