// src/queue/filter.rs

//! Manager roll-up helpers: status filter, free-text search and summary
//! counts over the order collection.

use std::str::FromStr;

use serde::Serialize;

use crate::pipeline::Order;
use crate::queue::builder::EmployeeTask;
use crate::types::OrderStatus;

/// Manager list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFilter {
    #[default]
    All,
    /// Anything not marked late.
    Active,
    Late,
    /// Every department completed.
    Done,
}

impl OrderFilter {
    pub fn matches(self, order: &Order) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::Active => order.status != OrderStatus::Late,
            OrderFilter::Late => order.status == OrderStatus::Late,
            OrderFilter::Done => order.is_done(),
        }
    }
}

impl FromStr for OrderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(OrderFilter::All),
            "active" => Ok(OrderFilter::Active),
            "late" => Ok(OrderFilter::Late),
            "done" => Ok(OrderFilter::Done),
            other => Err(format!(
                "invalid filter: {other} (expected all, active, late or done)"
            )),
        }
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Orders matching `filter` whose customer, mfg id or rep contains `search`
/// (case-insensitive). An empty search matches everything.
pub fn filter_orders<'a>(orders: &'a [Order], search: &str, filter: OrderFilter) -> Vec<&'a Order> {
    let needle = search.trim().to_lowercase();
    orders
        .iter()
        .filter(|o| filter.matches(o))
        .filter(|o| {
            needle.is_empty()
                || contains_ci(&o.customer, &needle)
                || contains_ci(&o.mfg_id, &needle)
                || contains_ci(&o.rep, &needle)
        })
        .collect()
}

/// Narrow an already-sorted queue by mfg id or customer, keeping its order.
pub fn search_tasks(tasks: Vec<EmployeeTask>, search: &str) -> Vec<EmployeeTask> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return tasks;
    }
    tasks
        .into_iter()
        .filter(|t| contains_ci(&t.mfg_id, &needle) || contains_ci(&t.customer, &needle))
        .collect()
}

/// Header counts for the manager view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub total: usize,
    pub ok: usize,
    pub risk: usize,
    pub late: usize,
    pub done: usize,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut s, o| {
            s.total += 1;
            match o.status {
                OrderStatus::Ok => s.ok += 1,
                OrderStatus::Risk => s.risk += 1,
                OrderStatus::Late => s.late += 1,
            }
            if o.is_done() {
                s.done += 1;
            }
            s
        })
    }
}
