use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error types returned by workflow operations
///
/// Every variant is recoverable: the workflow is left exactly as it was
/// before the failed call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateMachineError {
    #[error("Guard rejected '{event}' transition: {reason}")]
    GuardRejected { event: String, reason: String },

    #[error("Gate is closed in state '{state}'")]
    GateClosed { state: String },

    #[error("No transition defined for '{event}' from state '{from}'")]
    UndefinedTransition { from: String, event: String },
}

/// Coarse classification of [`StateMachineError`] for callers that only
/// need to branch on the failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    GuardRejected,
    GateClosed,
    UndefinedTransition,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GuardRejected => write!(f, "guard_rejected"),
            Self::GateClosed => write!(f, "gate_closed"),
            Self::UndefinedTransition => write!(f, "undefined_transition"),
        }
    }
}

impl StateMachineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::GuardRejected { .. } => ErrorKind::GuardRejected,
            Self::GateClosed { .. } => ErrorKind::GateClosed,
            Self::UndefinedTransition { .. } => ErrorKind::UndefinedTransition,
        }
    }

    /// All state machine failures leave the workflow untouched, so the caller
    /// can always retry (with another credential, or after advancing).
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Attach the rejected event to a `GuardRejected` error; other variants
    /// are returned unchanged
    pub fn with_event(self, event: impl fmt::Display) -> Self {
        match self {
            Self::GuardRejected { reason, .. } => Self::GuardRejected {
                event: event.to_string(),
                reason,
            },
            other => other,
        }
    }
}

/// Specific error type for guard condition failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardError {
    #[error("Presented credential does not match")]
    CredentialMismatch,

    #[error("No credential presented")]
    CredentialMissing,

    #[error("Workflow has no credential configured")]
    NoCredentialConfigured,
}

/// Guard failures surface as `GuardRejected`; the event is unknown at this
/// point and left empty until `with_event` fills it in
impl From<GuardError> for StateMachineError {
    fn from(err: GuardError) -> Self {
        Self::GuardRejected {
            event: String::new(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias for state machine operations
pub type StateMachineResult<T> = Result<T, StateMachineError>;
pub type GuardResult<T> = Result<T, GuardError>;

/// Helper function to create guard rejections
pub fn guard_rejected(event: impl fmt::Display, reason: impl Into<String>) -> StateMachineError {
    StateMachineError::GuardRejected {
        event: event.to_string(),
        reason: reason.into(),
    }
}

/// Helper function to create closed-gate errors
pub fn gate_closed(state: impl fmt::Display) -> StateMachineError {
    StateMachineError::GateClosed {
        state: state.to_string(),
    }
}

/// Helper function to create undefined transition errors
pub fn undefined_transition(
    from: impl fmt::Display,
    event: impl fmt::Display,
) -> StateMachineError {
    StateMachineError::UndefinedTransition {
        from: from.to_string(),
        event: event.to_string(),
    }
}
