//! # Workflow Definitions
//!
//! Transition tables expressed as data. Each workflow kind names its state
//! and event enums and exposes a static slice of `(from, event) -> to` edges,
//! each carrying the guard that must pass before the edge is taken.

use super::events::{AccessEvent, OrderEvent, WorkflowEvent};
use super::guards::{AlwaysAllowGuard, CredentialMatchGuard, StateGuard};
use super::states::{AccessState, OrderState, WorkflowState};

/// A single guarded edge in a workflow's state graph
pub struct Transition<S, E> {
    pub from: S,
    pub event: E,
    pub to: S,
    pub guard: &'static dyn StateGuard,
}

impl<S: std::fmt::Debug, E: std::fmt::Debug> std::fmt::Debug for Transition<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("event", &self.event)
            .field("to", &self.to)
            .field("guard", &self.guard.description())
            .finish()
    }
}

/// A workflow kind: its closed state and event sets plus its transition table
pub trait WorkflowDefinition: 'static {
    /// Name used in logs
    const NAME: &'static str;

    type State: WorkflowState;
    type Event: WorkflowEvent;

    /// Every edge of the state graph
    fn transitions() -> &'static [Transition<Self::State, Self::Event>];

    /// State a workflow starts in when none is given
    fn start_state() -> Self::State {
        Self::State::default()
    }

    /// Look up the edge for `(from, event)`
    fn find_transition(
        from: Self::State,
        event: Self::Event,
    ) -> Option<&'static Transition<Self::State, Self::Event>> {
        Self::transitions()
            .iter()
            .find(|transition| transition.from == from && transition.event == event)
    }

    /// Events with an edge leaving `from`
    fn events_from(from: Self::State) -> Vec<Self::Event> {
        Self::transitions()
            .iter()
            .filter(|transition| transition.from == from)
            .map(|transition| transition.event)
            .collect()
    }

    /// A state is terminal when the table has no edge leaving it
    fn is_terminal_state(state: Self::State) -> bool {
        !Self::transitions()
            .iter()
            .any(|transition| transition.from == state)
    }
}

/// Order lifecycle: `pending -> shipped -> delivered`
#[derive(Debug, Clone, Copy)]
pub struct OrderLifecycle;

static ORDER_TRANSITIONS: &[Transition<OrderState, OrderEvent>] = &[
    Transition {
        from: OrderState::Pending,
        event: OrderEvent::Proceed,
        to: OrderState::Shipped,
        guard: &AlwaysAllowGuard,
    },
    Transition {
        from: OrderState::Shipped,
        event: OrderEvent::Proceed,
        to: OrderState::Delivered,
        guard: &AlwaysAllowGuard,
    },
];

impl WorkflowDefinition for OrderLifecycle {
    const NAME: &'static str = "order_lifecycle";

    type State = OrderState;
    type Event = OrderEvent;

    fn transitions() -> &'static [Transition<OrderState, OrderEvent>] {
        ORDER_TRANSITIONS
    }
}

/// Door access: `locked -> unlocked`, gated on the workflow credential
#[derive(Debug, Clone, Copy)]
pub struct DoorAccess;

static ACCESS_TRANSITIONS: &[Transition<AccessState, AccessEvent>] = &[Transition {
    from: AccessState::Locked,
    event: AccessEvent::Unlock,
    to: AccessState::Unlocked,
    guard: &CredentialMatchGuard,
}];

impl WorkflowDefinition for DoorAccess {
    const NAME: &'static str = "door_access";

    type State = AccessState;
    type Event = AccessEvent;

    fn transitions() -> &'static [Transition<AccessState, AccessEvent>] {
        ACCESS_TRANSITIONS
    }
}
