mod add_instructor_records;
mod create_instructor;
mod delete_instructor;
mod get_instructor;

pub use add_instructor_records::{
    add_education_handler,
    add_experience_handler,
    add_skill_handler,
    __path_add_education_handler,
    __path_add_experience_handler,
    __path_add_skill_handler,
};
pub use create_instructor::{create_instructor_handler, __path_create_instructor_handler};
pub use delete_instructor::{delete_instructor_handler, __path_delete_instructor_handler};
pub use get_instructor::{get_instructor_handler, __path_get_instructor_handler};
