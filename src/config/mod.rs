// src/config/mod.rs

//! Configuration loading and validation for shopflow.
//!
//! - `model.rs`: the TOML-backed data model.
//! - `loader.rs`: reading a config file from disk.
//! - `validate.rs`: department list sanity checks.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, DepartmentConfig, PipelineSection, RawConfigFile, StoreSection};
pub use validate::validate_config;
