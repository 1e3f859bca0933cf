// src/queue/mod.rs

//! Read-only views over the order collection.
//!
//! - [`builder`] derives the per-department worker queue.
//! - [`filter`] covers the manager roll-up (filter, search, summary).

pub mod builder;
pub mod filter;

pub use builder::{EmployeeTask, build_tasks, is_actionable, parse_due_date};
pub use filter::{OrderFilter, OrderSummary, filter_orders, search_tasks};
