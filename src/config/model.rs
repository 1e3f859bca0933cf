// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::pipeline::PipelineTemplate;
use crate::types::Priority;

/// Configuration as read from TOML, before validation.
///
/// ```toml
/// [store]
/// path = "data/orders.json"
///
/// [[pipeline.department]]
/// name = "报价"
/// priority = "high"
///
/// [[pipeline.department]]
/// name = "生产审批"
/// ```
///
/// Every section is optional. Without `[pipeline]` the built-in eight-stage
/// shop pipeline is used.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub pipeline: Option<PipelineSection>,
}

/// `[store]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSection {
    /// JSON file holding the order collection.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("data/orders.json")
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// `[pipeline]` section: stages in pipeline order.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PipelineSection {
    #[serde(default)]
    pub department: Vec<DepartmentConfig>,
}

/// One `[[pipeline.department]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentConfig {
    pub name: String,

    /// Priority new orders get for this stage.
    #[serde(default)]
    pub priority: Option<Priority>,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`) or
/// [`ConfigFile::default`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub store: StoreSection,
    pub pipeline: PipelineTemplate,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(store: StoreSection, pipeline: PipelineTemplate) -> Self {
        Self { store, pipeline }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            store: StoreSection::default(),
            pipeline: PipelineTemplate::default(),
        }
    }
}
