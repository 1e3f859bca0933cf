// src/store/mod.rs

//! Order persistence boundary.
//!
//! The core only needs whole-collection load and save. Serializing
//! concurrent read-modify-write cycles is the job of
//! [`crate::engine::OrderService`], not of the store.

use std::fmt::Debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::{Result, ShopflowError};
use crate::pipeline::Order;

pub mod memory;

/// Abstract order store.
pub trait OrderStore: Send + Sync + Debug {
    /// Read every order. A missing or empty backing medium is an empty
    /// collection, not an error.
    fn load_all(&self) -> Result<Vec<Order>>;

    /// Replace the whole collection.
    fn save_all(&self, orders: &[Order]) -> Result<()>;
}

/// Pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "orders.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn unavailable(path: &Path, what: &str, err: impl std::fmt::Display) -> ShopflowError {
    warn!(path = %path.display(), error = %err, "{what} failed");
    ShopflowError::StoreUnavailable(format!("{what} {}: {err}", path.display()))
}

impl OrderStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Order>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "order file missing; starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(unavailable(&self.path, "reading", e)),
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let orders: Vec<Order> =
            serde_json::from_str(&contents).map_err(|e| unavailable(&self.path, "decoding", e))?;
        debug!(path = %self.path.display(), count = orders.len(), "loaded orders");
        Ok(orders)
    }

    fn save_all(&self, orders: &[Order]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| unavailable(parent, "creating dir", e))?;
            }
        }

        let body = serde_json::to_string_pretty(orders)
            .map_err(|e| unavailable(&self.path, "encoding", e))?;

        // Write then rename so readers never see a half-written file.
        let tmp = self.tmp_path();
        fs::write(&tmp, body).map_err(|e| unavailable(&tmp, "writing", e))?;
        fs::rename(&tmp, &self.path).map_err(|e| unavailable(&self.path, "replacing", e))?;

        debug!(path = %self.path.display(), count = orders.len(), "saved orders");
        Ok(())
    }
}
