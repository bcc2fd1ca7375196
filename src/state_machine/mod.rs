// State machine module for guarded workflows
//
// Workflows delegate their behaviour to a closed set of states. Transitions are
// looked up in static tables and may be gated by a guard, such as credential
// equality for door access.

pub mod access_state_machine;
pub mod actions;
pub mod credentials;
pub mod definition;
pub mod errors;
pub mod events;
pub mod guards;
pub mod history;
pub mod order_state_machine;
pub mod states;
pub mod workflow;

// Re-export main types for convenient access
pub use access_state_machine::AccessStateMachine;
pub use credentials::{Credential, Principal};
pub use definition::{DoorAccess, OrderLifecycle, Transition, WorkflowDefinition};
pub use errors::{ErrorKind, GuardError, StateMachineError, StateMachineResult};
pub use events::{AccessEvent, OrderEvent, WorkflowEvent};
pub use history::{TransitionHistory, TransitionRecord};
pub use order_state_machine::OrderStateMachine;
pub use states::{AccessState, OrderState, WorkflowState};
pub use workflow::{Workflow, WorkflowBuilder};

// Common traits and utilities
pub use actions::StateAction;
pub use guards::StateGuard;
