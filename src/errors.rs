// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopflowError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Department '{department}' not found in order {order_id}")]
    DepartmentNotFound { order_id: String, department: String },

    #[error("Unsupported action: {0} (expected start, complete or flag)")]
    UnsupportedAction(String),

    #[error("Invalid transition: cannot {action} department '{department}' ({reason})")]
    InvalidTransition {
        department: String,
        action: String,
        reason: String,
    },

    #[error("Order store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShopflowError {
    /// True for errors raised by action validation, as opposed to storage or
    /// configuration failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ShopflowError::OrderNotFound(_)
                | ShopflowError::DepartmentNotFound { .. }
                | ShopflowError::UnsupportedAction(_)
                | ShopflowError::InvalidTransition { .. }
        )
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ShopflowError>;
