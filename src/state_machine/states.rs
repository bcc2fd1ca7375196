use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// Behaviour shared by every closed set of workflow states
pub trait WorkflowState:
    Copy + Eq + Hash + Debug + Display + FromStr<Err = String> + Default + Serialize + 'static
{
    /// Check if this is a terminal state (no outgoing transitions)
    ///
    /// Must agree with the definition's transition table; the engine itself
    /// decides terminality from the table via
    /// [`WorkflowDefinition::is_terminal_state`](super::definition::WorkflowDefinition::is_terminal_state).
    fn is_terminal(&self) -> bool;

    /// Check if principals may be admitted while in this state
    fn admits_entry(&self) -> bool;
}

/// Order lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    /// Initial state when the order is placed
    #[default]
    Pending,
    /// Order has left the warehouse
    Shipped,
    /// Order reached the customer
    Delivered,
}

impl WorkflowState for OrderState {
    fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    // Orders have no gate.
    fn admits_entry(&self) -> bool {
        true
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

impl FromStr for OrderState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!("Invalid order state: {s}")),
        }
    }
}

/// Door access states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccessState {
    /// Initial state, the gate is shut
    #[default]
    Locked,
    /// Opened with the matching credential
    Unlocked,
}

impl WorkflowState for AccessState {
    fn is_terminal(&self) -> bool {
        matches!(self, Self::Unlocked)
    }

    fn admits_entry(&self) -> bool {
        matches!(self, Self::Unlocked)
    }
}

impl fmt::Display for AccessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "locked"),
            Self::Unlocked => write!(f, "unlocked"),
        }
    }
}

impl FromStr for AccessState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "locked" => Ok(Self::Locked),
            "unlocked" => Ok(Self::Unlocked),
            _ => Err(format!("Invalid access state: {s}")),
        }
    }
}
