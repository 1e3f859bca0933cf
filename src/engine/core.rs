// src/engine/core.rs

//! Pure action dispatch.
//!
//! Given the loaded order collection, locate one order and one department,
//! run the transition and re-derive the order's progress. No IO, no locks,
//! no clock: the caller supplies `now` and decides whether to persist.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::errors::{Result, ShopflowError};
use crate::pipeline::{Order, Transition};
use crate::types::Action;

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    /// Copy of the order after the transition.
    pub order: Order,
    pub transition: Transition,
}

/// Apply `action` to `department` of the order with id `order_id`.
///
/// Only the targeted order is touched. On error nothing in `orders` has
/// changed.
pub fn apply_action(
    orders: &mut [Order],
    order_id: &str,
    department: &str,
    action: Action,
    note: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Applied> {
    let order = orders
        .iter_mut()
        .find(|o| o.id == order_id)
        .ok_or_else(|| ShopflowError::OrderNotFound(order_id.to_string()))?;

    let progress_before = order.progress;
    let transition = order.apply_action(department, action, note, now)?;

    debug!(
        order = %order.id,
        department,
        %action,
        ?transition,
        progress_before,
        progress_after = order.progress,
        "dispatched action"
    );
    if order.progress != progress_before {
        info!(
            order = %order.id,
            progress = order.progress,
            current = %order.current_dept,
            "order progressed"
        );
    }

    Ok(Applied {
        order: order.clone(),
        transition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{NewOrder, PipelineTemplate};
    use crate::types::OrderStatus;

    fn orders() -> Vec<Order> {
        let t = PipelineTemplate::default();
        vec![
            Order::new("a", NewOrder::default(), &t),
            Order::new("b", NewOrder::default(), &t),
        ]
    }

    #[test]
    fn only_the_target_order_changes() {
        let mut all = orders();
        let untouched = all[1].clone();

        let applied =
            apply_action(&mut all, "a", "报价", Action::Complete, None, Utc::now()).unwrap();

        assert_eq!(applied.transition, Transition::Completed);
        assert_eq!(applied.order, all[0]);
        assert_eq!(all[1], untouched);
    }

    #[test]
    fn missing_order_is_reported() {
        let mut all = orders();
        let before = all.clone();
        let err =
            apply_action(&mut all, "missing-id", "报价", Action::Start, None, Utc::now()).unwrap_err();
        assert!(matches!(err, ShopflowError::OrderNotFound(id) if id == "missing-id"));
        assert_eq!(all, before);
    }

    #[test]
    fn flag_keeps_progress_and_raises_risk() {
        let mut all = orders();
        apply_action(&mut all, "b", "报价", Action::Complete, None, Utc::now()).unwrap();
        let applied = apply_action(
            &mut all,
            "b",
            "编程",
            Action::Flag,
            Some("material issue"),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(applied.order.progress, 13);
        assert_eq!(applied.order.status, OrderStatus::Risk);
        assert_eq!(applied.order.departments[2].note.as_deref(), Some("material issue"));
    }
}
