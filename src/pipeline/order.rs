// src/pipeline/order.rs

//! The work order aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, ShopflowError};
use crate::pipeline::department::{Department, Transition};
use crate::pipeline::progress;
use crate::pipeline::stages::PipelineTemplate;
use crate::types::{Action, OrderStatus};

/// Descriptive fields supplied when creating an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer: String,
    pub rep: String,
    pub due_date: String,
    pub mfg_id: String,
}

/// A manufacturing work order and its department pipeline.
///
/// `progress` and `current_dept` are derived from `departments`; they are
/// serialized for readers but overwritten by [`Order::refresh_derived`]
/// whenever the order changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub rep: String,
    /// Opaque; ISO `YYYY-MM-DD` strings sort chronologically.
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub mfg_id: String,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub current_dept: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub departments: Vec<Department>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    /// Build a new order with every template stage pending.
    pub fn new(id: impl Into<String>, fields: NewOrder, template: &PipelineTemplate) -> Self {
        let mut order = Self {
            id: id.into(),
            customer: fields.customer,
            rep: fields.rep,
            due_date: fields.due_date,
            mfg_id: fields.mfg_id,
            progress: 0,
            current_dept: String::new(),
            status: OrderStatus::Ok,
            departments: template.instantiate(),
            extra: Map::new(),
        };
        order.refresh_derived();
        order
    }

    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    /// Pipeline index of the department called `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.departments.iter().position(|d| d.name == name)
    }

    pub fn is_done(&self) -> bool {
        self.progress == 100
    }

    pub fn is_flagged(&self) -> bool {
        self.departments.iter().any(|d| d.flagged)
    }

    /// Recompute `progress` and `current_dept` from the department list.
    pub fn refresh_derived(&mut self) {
        let p = progress::compute(&self.departments);
        self.progress = p.percent;
        self.current_dept = p.current_dept;
    }

    /// Run one department transition and re-derive the order fields.
    ///
    /// On error the order is unchanged.
    pub fn apply_action(
        &mut self,
        department: &str,
        action: Action,
        note: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Transition> {
        let idx = self
            .position_of(department)
            .ok_or_else(|| ShopflowError::DepartmentNotFound {
                order_id: self.id.clone(),
                department: department.to_string(),
            })?;

        let transition = self.departments[idx].apply(action, note, now)?;

        if transition == Transition::Flagged {
            self.status = OrderStatus::Risk;
        }
        self.refresh_derived();
        Ok(transition)
    }
}
