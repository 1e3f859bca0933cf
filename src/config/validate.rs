// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, PipelineSection, RawConfigFile};
use crate::errors::{Result, ShopflowError};
use crate::pipeline::{PipelineTemplate, StageTemplate, TERMINAL_LABEL};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::ShopflowError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        let pipeline = match raw.pipeline {
            Some(section) => template_from_section(section),
            None => PipelineTemplate::default(),
        };
        Ok(ConfigFile::new_unchecked(raw.store, pipeline))
    }
}

/// Run semantic checks on a raw config:
/// - the store path is not empty
/// - a `[pipeline]` section, if present, lists at least one department
/// - department names are non-blank, unique and not the terminal label
pub fn validate_config(raw: &RawConfigFile) -> Result<()> {
    validate_raw_config(raw)
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_store(cfg)?;
    if let Some(ref pipeline) = cfg.pipeline {
        ensure_has_departments(pipeline)?;
        validate_department_names(pipeline)?;
    }
    Ok(())
}

fn validate_store(cfg: &RawConfigFile) -> Result<()> {
    if cfg.store.path.as_os_str().is_empty() {
        return Err(ShopflowError::ConfigError(
            "[store].path must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn ensure_has_departments(pipeline: &PipelineSection) -> Result<()> {
    if pipeline.department.is_empty() {
        return Err(ShopflowError::ConfigError(
            "[pipeline] must contain at least one [[pipeline.department]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_department_names(pipeline: &PipelineSection) -> Result<()> {
    let mut seen = HashSet::new();
    for (idx, dept) in pipeline.department.iter().enumerate() {
        let name = dept.name.trim();
        if name.is_empty() {
            return Err(ShopflowError::ConfigError(format!(
                "department #{} has a blank name",
                idx + 1
            )));
        }
        if name == TERMINAL_LABEL {
            return Err(ShopflowError::ConfigError(format!(
                "department name '{name}' is reserved for finished orders"
            )));
        }
        if !seen.insert(name) {
            return Err(ShopflowError::ConfigError(format!(
                "department '{name}' is listed more than once"
            )));
        }
    }
    Ok(())
}

fn template_from_section(section: PipelineSection) -> PipelineTemplate {
    let stages = section
        .department
        .into_iter()
        .map(|d| StageTemplate {
            name: d.name.trim().to_string(),
            priority: d.priority,
        })
        .collect();
    PipelineTemplate::new_unchecked(stages)
}
