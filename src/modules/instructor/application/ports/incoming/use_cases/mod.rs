mod add_instructor_record;
mod create_instructor;
mod delete_instructor;
mod get_instructor;

pub use add_instructor_record::{
    AddEducationUseCase, AddExperienceUseCase, AddRecordError, AddSkillUseCase,
};
pub use create_instructor::{CreateInstructorError, CreateInstructorUseCase};
pub use delete_instructor::{DeleteInstructorError, DeleteInstructorUseCase};
pub use get_instructor::{GetInstructorError, GetInstructorUseCase};
