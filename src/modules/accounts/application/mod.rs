pub mod account_use_cases;
pub mod domain;
pub mod helpers;
pub mod orchestrator;
pub mod ports;
pub mod services;
pub mod use_cases;
