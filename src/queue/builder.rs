// src/queue/builder.rs

//! Per-department worker queue.
//!
//! A read-only projection from the order collection: it never mutates an
//! order and holds no state between calls.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::pipeline::{Department, Order};
use crate::types::{Priority, StageStatus};

/// One line of a worker's queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTask {
    pub order_id: String,
    pub mfg_id: String,
    pub customer: String,
    pub due_date: String,
    pub department: String,
    pub priority: Priority,
    pub estimated_hours: f64,
    /// Either `Pending` or `InProgress`; completed stages never surface.
    pub status: StageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_employee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub flagged: bool,
}

impl EmployeeTask {
    fn from_department(order: &Order, dept: &Department) -> Self {
        Self {
            order_id: order.id.clone(),
            mfg_id: order.mfg_id.clone(),
            customer: order.customer.clone(),
            due_date: order.due_date.clone(),
            department: dept.name.clone(),
            priority: dept.priority.unwrap_or_default(),
            estimated_hours: dept.estimated_hours.unwrap_or(0.0),
            status: dept.stage_status(),
            assigned_employee: dept.employee.clone(),
            note: dept.note.clone(),
            flagged: dept.flagged,
        }
    }
}

/// Whether `order` has work waiting in `department` right now.
///
/// In progress always counts. A pending stage counts once the stage before
/// it is completed; the first stage is ready from the start.
pub fn is_actionable(order: &Order, department: &str) -> bool {
    let Some(idx) = order.position_of(department) else {
        return false;
    };
    let dept = &order.departments[idx];

    match dept.stage_status() {
        StageStatus::InProgress => true,
        StageStatus::Completed => false,
        StageStatus::Pending => idx == 0 || order.departments[idx - 1].completed,
    }
}

/// Build the ordered queue for `department`.
///
/// Sort keys: in-progress first, then priority rank, then due date (see
/// [`parse_due_date`]).
pub fn build_tasks(orders: &[Order], department: &str) -> Vec<EmployeeTask> {
    let mut tasks: Vec<EmployeeTask> = orders
        .iter()
        .filter(|order| is_actionable(order, department))
        .filter_map(|order| {
            order
                .department(department)
                .map(|dept| EmployeeTask::from_department(order, dept))
        })
        .collect();

    // Stable, so remaining ties keep collection order.
    tasks.sort_by_cached_key(sort_key);

    debug!(
        department,
        orders = orders.len(),
        tasks = tasks.len(),
        "built worker queue"
    );
    tasks
}

fn status_rank(status: StageStatus) -> u8 {
    match status {
        StageStatus::InProgress => 0,
        StageStatus::Pending => 1,
        StageStatus::Completed => 2,
    }
}

/// Due dates compare by calendar day. Strings that do not parse sort after
/// every real date and tie with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum DueKey {
    Date(NaiveDate),
    Unparsed,
}

fn sort_key(task: &EmployeeTask) -> (u8, u8, DueKey) {
    let due = parse_due_date(&task.due_date).map_or(DueKey::Unparsed, DueKey::Date);
    (status_rank(task.status), task.priority.rank(), due)
}

const DUE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Read a stored due date.
///
/// Accepts `YYYY-MM-DD` (padding optional), `YYYY/MM/DD`, US `M/D/YYYY` and
/// full RFC 3339 timestamps, whose date part is used.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DUE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|ts| ts.date_naive())
        })
}
