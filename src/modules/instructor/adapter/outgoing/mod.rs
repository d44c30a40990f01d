pub mod instructor_repository_postgres;
pub mod sea_orm_entity;

pub use instructor_repository_postgres::InstructorRepositoryPostgres;
