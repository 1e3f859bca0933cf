#![allow(dead_code)]

use shopflow::pipeline::{Department, NewOrder, Order, PipelineTemplate};
use shopflow::types::{OrderStatus, Priority};

/// Builder for `Order` to simplify test setup.
///
/// Starts from the default eight-stage pipeline with every department
/// pending; `build()` re-derives progress and current department.
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new(id: &str) -> Self {
        let fields = NewOrder {
            customer: format!("customer-{id}"),
            rep: "rep".to_string(),
            due_date: "2024-01-01".to_string(),
            mfg_id: format!("MFG-{id}"),
        };
        Self {
            order: Order::new(id, fields, &PipelineTemplate::default()),
        }
    }

    /// Start from an explicit stage list instead of the default pipeline.
    pub fn with_stages(mut self, names: &[&str]) -> Self {
        self.order.departments = names.iter().map(|n| Department::pending(*n)).collect();
        self
    }

    pub fn customer(mut self, customer: &str) -> Self {
        self.order.customer = customer.to_string();
        self
    }

    pub fn mfg_id(mut self, mfg_id: &str) -> Self {
        self.order.mfg_id = mfg_id.to_string();
        self
    }

    pub fn due(mut self, due_date: &str) -> Self {
        self.order.due_date = due_date.to_string();
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.order.status = status;
        self
    }

    /// Mark the first `n` departments completed.
    pub fn completed_through(mut self, n: usize) -> Self {
        for dept in self.order.departments.iter_mut().take(n) {
            dept.completed = true;
            dept.in_progress = false;
        }
        self
    }

    pub fn completed(self, name: &str) -> Self {
        self.edit(name, |d| {
            d.completed = true;
            d.in_progress = false;
        })
    }

    pub fn in_progress(self, name: &str) -> Self {
        self.edit(name, |d| d.in_progress = true)
    }

    pub fn priority(self, name: &str, priority: Option<Priority>) -> Self {
        self.edit(name, |d| d.priority = priority)
    }

    /// Set the priority of every department.
    pub fn all_priorities(mut self, priority: Priority) -> Self {
        for dept in self.order.departments.iter_mut() {
            dept.priority = Some(priority);
        }
        self
    }

    pub fn edit(mut self, name: &str, f: impl FnOnce(&mut Department)) -> Self {
        let dept = self
            .order
            .departments
            .iter_mut()
            .find(|d| d.name == name)
            .unwrap_or_else(|| panic!("no department named {name}"));
        f(dept);
        self
    }

    pub fn build(mut self) -> Order {
        self.order.refresh_derived();
        self.order
    }
}
