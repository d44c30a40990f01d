pub mod domain;
pub mod instructor_use_cases;
pub mod ports;
pub mod service;
