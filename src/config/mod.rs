//! # Engine Configuration
//!
//! Settings that shape how workflows behave at runtime. Values are layered
//! by [`ConfigManager`]: built-in defaults, then `workflow.toml`, then an
//! environment-specific `workflow.<env>.toml`, then `GUARDED_WORKFLOW__*`
//! environment variables.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use guarded_workflow::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let policy = manager.config().undefined_transition;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

/// Largest accepted `history_limit`
pub const MAX_HISTORY_LIMIT: usize = 100_000;

/// What `advance` does with an event that has no edge from a non-terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedTransitionPolicy {
    /// Report the unchanged state as a successful no-op
    #[default]
    Ignore,
    /// Fail with `UndefinedTransition`
    Reject,
}

impl fmt::Display for UndefinedTransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for UndefinedTransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "reject" => Ok(Self::Reject),
            _ => Err(format!("Invalid undefined transition policy: {s}")),
        }
    }
}

/// Runtime settings for workflows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Handling of events with no edge from a non-terminal state
    pub undefined_transition: UndefinedTransitionPolicy,
    /// Committed transitions kept per workflow; 0 disables the history
    pub history_limit: usize,
    /// Filter directive used by `logging::init_structured_logging` when
    /// `RUST_LOG` is unset
    pub log_level: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            undefined_transition: UndefinedTransitionPolicy::Ignore,
            history_limit: 256,
            log_level: None,
        }
    }
}

impl EngineConfig {
    /// Validate loaded values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_limit > MAX_HISTORY_LIMIT {
            return Err(ConfigurationError::invalid_value(
                "history_limit",
                self.history_limit.to_string(),
                format!("must not exceed {MAX_HISTORY_LIMIT}"),
            ));
        }

        if let Some(level) = &self.log_level {
            if level.trim().is_empty() {
                return Err(ConfigurationError::invalid_value(
                    "log_level",
                    level.clone(),
                    "must not be blank when set",
                ));
            }
        }

        Ok(())
    }
}
