mod add_instructor_record_service;
mod create_instructor_service;
mod delete_instructor_service;
mod get_instructor_service;

pub use add_instructor_record_service::AddInstructorRecordService;
pub use create_instructor_service::CreateInstructorService;
pub use delete_instructor_service::DeleteInstructorService;
pub use get_instructor_service::GetInstructorService;
