pub mod instructor_applications;
