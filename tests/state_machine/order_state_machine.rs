use guarded_workflow::state_machine::{OrderEvent, OrderState, OrderStateMachine};

#[test]
fn test_fresh_order_is_pending() {
    let order = OrderStateMachine::new();
    assert_eq!(order.current_state(), OrderState::Pending);
    assert!(!order.is_terminal());
}

#[test]
fn test_order_proceeds_to_delivered() {
    let mut order = OrderStateMachine::new();

    assert_eq!(order.advance(OrderEvent::Proceed, None), Ok(OrderState::Shipped));
    assert_eq!(order.advance(OrderEvent::Proceed, None), Ok(OrderState::Delivered));

    // Already delivered: a no-op, not an error
    assert_eq!(order.advance(OrderEvent::Proceed, None), Ok(OrderState::Delivered));
    assert_eq!(order.advance(OrderEvent::Proceed, None), Ok(OrderState::Delivered));
    assert_eq!(order.current_state(), OrderState::Delivered);
}

#[test]
fn test_history_records_committed_transitions() {
    let mut order = OrderStateMachine::new();
    for _ in 0..4 {
        order.advance(OrderEvent::Proceed, None).unwrap();
    }

    let records: Vec<_> = order
        .history()
        .iter()
        .map(|record| (record.sort_key, record.from_state, record.to_state))
        .collect();
    assert_eq!(
        records,
        vec![
            (1, OrderState::Pending, OrderState::Shipped),
            (2, OrderState::Shipped, OrderState::Delivered),
        ]
    );
}

#[test]
fn test_workflows_are_independent() {
    let mut first = OrderStateMachine::new();
    let second = OrderStateMachine::new();

    first.advance(OrderEvent::Proceed, None).unwrap();

    assert_eq!(first.current_state(), OrderState::Shipped);
    assert_eq!(second.current_state(), OrderState::Pending);
    assert_ne!(first.workflow_id(), second.workflow_id());
}
