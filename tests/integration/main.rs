// tests/integration/main.rs

mod config_loading;
mod error_handling;
mod json_store;
