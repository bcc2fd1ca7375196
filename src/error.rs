use crate::config::ConfigurationError;
use crate::state_machine::errors::StateMachineError;
use thiserror::Error;

/// Top-level error for the crate
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("State machine error: {0}")]
    StateMachine(#[from] StateMachineError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
