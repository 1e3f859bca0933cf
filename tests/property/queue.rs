use std::collections::HashSet;

use proptest::prelude::*;
use shopflow::pipeline::{NewOrder, Order, PipelineTemplate};
use shopflow::queue::build_tasks;
use shopflow::types::{Priority, StageStatus};

const DEPARTMENT: &str = "编程";

fn priority_strategy() -> impl Strategy<Value = Option<Priority>> {
    prop_oneof![
        Just(None),
        Just(Some(Priority::High)),
        Just(Some(Priority::Medium)),
        Just(Some(Priority::Low)),
    ]
}

// (completed prefix length, programming in progress?, priority, due day)
fn order_strategy() -> impl Strategy<Value = (usize, bool, Option<Priority>, u8)> {
    (0..=8usize, any::<bool>(), priority_strategy(), 1..=3u8)
}

fn build_order(i: usize, (prefix, running, priority, day): (usize, bool, Option<Priority>, u8)) -> Order {
    let mut o = Order::new(
        format!("o{i}"),
        NewOrder {
            due_date: format!("2024-01-0{day}"),
            ..NewOrder::default()
        },
        &PipelineTemplate::default(),
    );
    for d in o.departments.iter_mut().take(prefix) {
        d.completed = true;
    }
    if running && !o.departments[2].completed {
        o.departments[2].in_progress = true;
    }
    o.departments[2].priority = priority;
    o.refresh_derived();
    o
}

proptest! {
    #[test]
    fn queue_is_sorted_stable_and_excludes_completed(
        specs in proptest::collection::vec(order_strategy(), 0..24)
    ) {
        let orders: Vec<Order> = specs.into_iter().enumerate().map(|(i, s)| build_order(i, s)).collect();
        let tasks = build_tasks(&orders, DEPARTMENT);

        // Never a completed stage, at most one task per order.
        prop_assert!(tasks.iter().all(|t| t.status != StageStatus::Completed));
        let ids: HashSet<&str> = tasks.iter().map(|t| t.order_id.as_str()).collect();
        prop_assert_eq!(ids.len(), tasks.len());

        // Sorted by (status, priority, due date) and stable beyond that.
        let position = |id: &str| orders.iter().position(|o| o.id == id).unwrap_or(usize::MAX);
        for pair in tasks.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let key_a = (a.status != StageStatus::InProgress, a.priority.rank(), a.due_date.clone());
            let key_b = (b.status != StageStatus::InProgress, b.priority.rank(), b.due_date.clone());
            prop_assert!(key_a <= key_b);
            if key_a == key_b {
                prop_assert!(position(&a.order_id) < position(&b.order_id));
            }
        }

        // Repeatable.
        prop_assert_eq!(build_tasks(&orders, DEPARTMENT), tasks);
    }
}
