use super::definition::WorkflowDefinition;
use super::events::WorkflowEvent;
use super::history::TransitionRecord;
use super::states::WorkflowState;
use uuid::Uuid;

/// Trait for implementing post-transition actions
///
/// Actions run after a transition has been committed and recorded. They
/// observe the transition; they cannot veto or undo it.
pub trait StateAction<D: WorkflowDefinition>: Send + Sync {
    /// Execute the action
    fn execute(&self, workflow_id: Uuid, record: &TransitionRecord<D::State, D::Event>);

    /// Get a description of this action for logging
    fn description(&self) -> &'static str;
}

/// Action to emit a structured log line for every committed transition
pub struct LogTransitionAction;

impl<D: WorkflowDefinition> StateAction<D> for LogTransitionAction {
    fn execute(&self, workflow_id: Uuid, record: &TransitionRecord<D::State, D::Event>) {
        tracing::info!(
            workflow = D::NAME,
            workflow_id = %workflow_id,
            from_state = %record.from_state,
            to_state = %record.to_state,
            event = record.event.event_type(),
            transition = %record.to_json(),
            "Workflow transition committed"
        );
    }

    fn description(&self) -> &'static str {
        "Log committed transition"
    }
}

/// Action to announce when a transition opens the workflow's gate
pub struct GateOpenedAction;

impl<D: WorkflowDefinition> StateAction<D> for GateOpenedAction {
    fn execute(&self, workflow_id: Uuid, record: &TransitionRecord<D::State, D::Event>) {
        if record.to_state.admits_entry() && !record.from_state.admits_entry() {
            tracing::info!(
                workflow = D::NAME,
                workflow_id = %workflow_id,
                state = %record.to_state,
                "Gate opened, admission permitted"
            );
        }
    }

    fn description(&self) -> &'static str {
        "Announce gate opening"
    }
}

/// Actions installed on every workflow unless the builder replaces them
pub fn default_actions<D: WorkflowDefinition>() -> Vec<Box<dyn StateAction<D>>> {
    vec![Box::new(LogTransitionAction), Box::new(GateOpenedAction)]
}
