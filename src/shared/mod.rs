pub mod api;
pub mod config;
pub mod db;
pub mod request_context;
pub mod validation;
