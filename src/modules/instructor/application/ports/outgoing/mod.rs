pub mod instructor_repository;

pub use instructor_repository::{InstructorRepository, InstructorRepositoryError};
