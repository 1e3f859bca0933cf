// src/pipeline/mod.rs

//! Department pipeline model.
//!
//! - [`stages`] holds the ordered stage template used to create orders.
//! - [`department`] is the per-stage record and its state machine.
//! - [`progress`] derives completion percentage and current department.
//! - [`order`] is the order aggregate that owns its departments.

pub mod department;
pub mod order;
pub mod progress;
pub mod stages;

pub use department::{DEFAULT_FLAG_NOTE, Department, Transition, timestamp};
pub use order::{NewOrder, Order};
pub use progress::{Progress, TERMINAL_LABEL};
pub use stages::{DEFAULT_STAGES, PipelineTemplate, StageTemplate};
