use chrono::Utc;
use proptest::prelude::*;
use shopflow::pipeline::{NewOrder, Order, PipelineTemplate, TERMINAL_LABEL};
use shopflow::types::{Action, OrderStatus};

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Start), Just(Action::Complete), Just(Action::Flag)]
}

fn expected_percent(order: &Order) -> u8 {
    let total = order.departments.len() as f64;
    let done = order.departments.iter().filter(|d| d.completed).count() as f64;
    (100.0 * done / total).round() as u8
}

proptest! {
    // Random walks of actions over the default pipeline; rejected actions are
    // allowed, but derived fields must stay consistent after every step.
    #[test]
    fn derived_fields_hold_after_any_action_sequence(
        steps in proptest::collection::vec((0..8usize, action_strategy()), 0..60)
    ) {
        let template = PipelineTemplate::default();
        let names: Vec<String> = template.names().map(str::to_string).collect();
        let mut order = Order::new("p", NewOrder::default(), &template);

        for (idx, action) in steps {
            let before = order.clone();
            let was_completed = order.departments[idx].completed;

            match order.apply_action(&names[idx], action, Some("note"), Utc::now()) {
                Ok(_) => {
                    if action == Action::Flag {
                        prop_assert_eq!(order.status, OrderStatus::Risk);
                        prop_assert_eq!(order.progress, before.progress);
                    }
                }
                Err(_) => prop_assert_eq!(&order, &before),
            }

            // Completion is never undone.
            if was_completed {
                prop_assert!(order.departments[idx].completed);
            }
            for d in &order.departments {
                prop_assert!(!(d.completed && d.in_progress));
            }

            prop_assert!(order.progress <= 100);
            prop_assert_eq!(order.progress, expected_percent(&order));

            let expected_current = order
                .departments
                .iter()
                .find(|d| !d.completed)
                .map(|d| d.name.as_str())
                .unwrap_or(TERMINAL_LABEL);
            prop_assert_eq!(order.current_dept.as_str(), expected_current);
        }
    }
}
