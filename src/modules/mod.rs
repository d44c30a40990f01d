pub mod accounts;
pub mod email;
pub mod instructor;
pub mod instructor_application;
pub mod profile;
