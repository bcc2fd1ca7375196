//! # Workflow Engine
//!
//! Drives a workflow through the state graph of its [`WorkflowDefinition`]
//! and gates admission on the current state.
//!
//! A workflow owns its current state, an optional credential baked in at
//! construction, the principals admitted so far, and a bounded history of
//! committed transitions. `advance` is the only path that changes state:
//!
//! 1. look up the edge for `(current_state, event)`
//! 2. no edge: a no-op on terminal states, and on non-terminal states either a
//!    no-op or `UndefinedTransition` depending on the configured policy
//! 3. evaluate the edge's guard against the payload and stored credential
//! 4. commit the new state, record it, run post-transition actions
//!
//! Failed calls leave the workflow exactly as they found it.

use super::actions::{default_actions, StateAction};
use super::credentials::{Credential, Principal};
use super::definition::WorkflowDefinition;
use super::errors::{
    gate_closed, guard_rejected, undefined_transition, StateMachineError, StateMachineResult,
};
use super::events::WorkflowEvent;
use super::history::TransitionHistory;
use super::states::WorkflowState;
use crate::config::{EngineConfig, UndefinedTransitionPolicy};
use crate::logging::log_workflow_operation;
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

/// A stateful entity driven through the states of `D`
pub struct Workflow<D: WorkflowDefinition> {
    workflow_id: Uuid,
    current_state: D::State,
    credential: Option<Credential>,
    admitted: Vec<Principal>,
    policy: UndefinedTransitionPolicy,
    history: TransitionHistory<D::State, D::Event>,
    actions: Vec<Box<dyn StateAction<D>>>,
}

impl<D: WorkflowDefinition> Workflow<D> {
    /// Create a workflow in the start state with default settings and no credential
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a workflow in the start state guarded by `credential`
    pub fn with_credential(credential: Credential) -> Self {
        Self::builder().credential(credential).build()
    }

    /// Create a workflow using settings from `config`
    pub fn from_config(config: &EngineConfig, credential: Option<Credential>) -> Self {
        let builder = Self::builder().config(config);
        match credential {
            Some(credential) => builder.credential(credential).build(),
            None => builder.build(),
        }
    }

    pub fn builder() -> WorkflowBuilder<D> {
        WorkflowBuilder::new()
    }

    /// Attempt to transition the workflow with `event`
    ///
    /// `payload` is the credential presented for guarded edges; it is ignored
    /// by unguarded ones. Returns the state after the call.
    pub fn advance(
        &mut self,
        event: D::Event,
        payload: Option<&Credential>,
    ) -> StateMachineResult<D::State> {
        let current_state = self.current_state;

        let Some(transition) = D::find_transition(current_state, event) else {
            return self.handle_missing_edge(event);
        };

        match transition.guard.check(payload, self.credential.as_ref()) {
            Ok(true) => {}
            Ok(false) => {
                let err = guard_rejected(event, transition.guard.description());
                return Err(self.reject(err));
            }
            Err(guard_error) => {
                return Err(self.reject(StateMachineError::from(guard_error).with_event(event)));
            }
        }

        self.current_state = transition.to;
        let record = self.history.record(current_state, transition.to, event);

        for action in &self.actions {
            action.execute(self.workflow_id, &record);
        }

        Ok(self.current_state)
    }

    /// Admit `principal` if the current state permits entry
    ///
    /// Never changes state. Duplicates are accepted.
    pub fn admit(&mut self, principal: Principal) -> StateMachineResult<()> {
        let workflow_id = self.workflow_id.to_string();
        let state = self.current_state.to_string();

        if !self.current_state.admits_entry() {
            warn!(
                workflow = D::NAME,
                workflow_id = %workflow_id,
                state = %state,
                "Admission refused, gate closed"
            );
            return Err(gate_closed(self.current_state));
        }

        self.admitted.push(principal);
        let details = format!("admitted={}", self.admitted.len());
        log_workflow_operation(
            "admit",
            D::NAME,
            &workflow_id,
            &state,
            "success",
            Some(details.as_str()),
        );

        Ok(())
    }

    /// Get the current state of the workflow
    pub fn current_state(&self) -> D::State {
        self.current_state
    }

    /// Check if the workflow is in a terminal state
    pub fn is_terminal(&self) -> bool {
        D::is_terminal_state(self.current_state)
    }

    /// Check if `admit` would currently succeed
    pub fn admits_entry(&self) -> bool {
        self.current_state.admits_entry()
    }

    /// Events with an edge leaving the current state
    pub fn available_events(&self) -> Vec<D::Event> {
        D::events_from(self.current_state)
    }

    pub fn admitted(&self) -> &[Principal] {
        &self.admitted
    }

    pub fn history(&self) -> &TransitionHistory<D::State, D::Event> {
        &self.history
    }

    pub fn workflow_id(&self) -> Uuid {
        self.workflow_id
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn policy(&self) -> UndefinedTransitionPolicy {
        self.policy
    }

    fn handle_missing_edge(&self, event: D::Event) -> StateMachineResult<D::State> {
        let state = self.current_state;

        if D::is_terminal_state(state) {
            debug!(
                workflow = D::NAME,
                workflow_id = %self.workflow_id,
                state = %state,
                event = event.event_type(),
                "Event ignored in terminal state"
            );
            return Ok(state);
        }

        match self.policy {
            UndefinedTransitionPolicy::Ignore => {
                debug!(
                    workflow = D::NAME,
                    workflow_id = %self.workflow_id,
                    state = %state,
                    event = event.event_type(),
                    "No transition defined, ignoring event"
                );
                Ok(state)
            }
            UndefinedTransitionPolicy::Reject => {
                warn!(
                    workflow = D::NAME,
                    workflow_id = %self.workflow_id,
                    state = %state,
                    event = event.event_type(),
                    "No transition defined, rejecting event"
                );
                Err(undefined_transition(state, event))
            }
        }
    }

    fn reject(&self, err: StateMachineError) -> StateMachineError {
        warn!(
            workflow = D::NAME,
            workflow_id = %self.workflow_id,
            state = %self.current_state,
            error = %err,
            "Guard rejected transition"
        );
        err
    }
}

impl<D: WorkflowDefinition> Default for Workflow<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: WorkflowDefinition> fmt::Debug for Workflow<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workflow")
            .field("definition", &D::NAME)
            .field("workflow_id", &self.workflow_id)
            .field("current_state", &self.current_state)
            .field("credential", &self.credential)
            .field("admitted", &self.admitted.len())
            .field("policy", &self.policy)
            .field("history", &self.history.len())
            .finish()
    }
}

/// Builder for [`Workflow`]
pub struct WorkflowBuilder<D: WorkflowDefinition> {
    initial_state: D::State,
    credential: Option<Credential>,
    policy: UndefinedTransitionPolicy,
    history_limit: usize,
    actions: Vec<Box<dyn StateAction<D>>>,
}

impl<D: WorkflowDefinition> WorkflowBuilder<D> {
    fn new() -> Self {
        let defaults = EngineConfig::default();
        Self {
            initial_state: D::start_state(),
            credential: None,
            policy: defaults.undefined_transition,
            history_limit: defaults.history_limit,
            actions: default_actions(),
        }
    }

    pub fn initial_state(mut self, state: D::State) -> Self {
        self.initial_state = state;
        self
    }

    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn policy(mut self, policy: UndefinedTransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Apply policy and history settings from `config`
    pub fn config(self, config: &EngineConfig) -> Self {
        self.policy(config.undefined_transition)
            .history_limit(config.history_limit)
    }

    /// Append a post-transition action
    pub fn action(mut self, action: Box<dyn StateAction<D>>) -> Self {
        self.actions.push(action);
        self
    }

    /// Drop every installed action, including the defaults
    pub fn without_actions(mut self) -> Self {
        self.actions.clear();
        self
    }

    pub fn build(self) -> Workflow<D> {
        Workflow {
            workflow_id: Uuid::new_v4(),
            current_state: self.initial_state,
            credential: self.credential,
            admitted: Vec::new(),
            policy: self.policy,
            history: TransitionHistory::new(self.history_limit),
            actions: self.actions,
        }
    }
}
