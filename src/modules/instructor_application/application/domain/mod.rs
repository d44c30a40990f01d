pub mod entities;

pub use entities::{
    ApplicationForm, ApplicationStatus, InstructorApplication, NewInstructorApplication,
    ReviewDecision,
};
