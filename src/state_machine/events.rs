use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Behaviour shared by every closed set of workflow events
pub trait WorkflowEvent: Copy + Eq + Debug + Display + Serialize + 'static {
    /// Get a string representation of the event type for logging
    fn event_type(&self) -> &'static str;
}

/// Events that drive the order lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderEvent {
    /// Move the order one step forward
    Proceed,
}

impl WorkflowEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::Proceed => "proceed",
        }
    }
}

impl fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}

/// Events that drive door access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessEvent {
    /// Open the door; requires the presented credential as payload
    Unlock,
}

impl WorkflowEvent for AccessEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::Unlock => "unlock",
        }
    }
}

impl fmt::Display for AccessEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}
