use super::credentials::Credential;
use super::errors::{GuardError, GuardResult};

/// Trait for implementing state transition guards
///
/// Guards are stateless and `Sync` so a single instance can sit in a static
/// transition table shared by every workflow of a kind.
pub trait StateGuard: Sync {
    /// Check if a transition is allowed
    ///
    /// `presented` is the payload handed to `advance`, `stored` is the
    /// credential the workflow was constructed with.
    fn check(&self, presented: Option<&Credential>, stored: Option<&Credential>)
        -> GuardResult<bool>;

    /// Get a description of this guard for logging
    fn description(&self) -> &'static str;
}

/// Guard for edges that carry no precondition
pub struct AlwaysAllowGuard;

impl StateGuard for AlwaysAllowGuard {
    fn check(
        &self,
        _presented: Option<&Credential>,
        _stored: Option<&Credential>,
    ) -> GuardResult<bool> {
        Ok(true)
    }

    fn description(&self) -> &'static str {
        "Transition is always allowed"
    }
}

/// Guard requiring the presented credential to equal the stored one
pub struct CredentialMatchGuard;

impl StateGuard for CredentialMatchGuard {
    fn check(
        &self,
        presented: Option<&Credential>,
        stored: Option<&Credential>,
    ) -> GuardResult<bool> {
        let stored = stored.ok_or(GuardError::NoCredentialConfigured)?;
        let presented = presented.ok_or(GuardError::CredentialMissing)?;

        if presented != stored {
            return Err(GuardError::CredentialMismatch);
        }

        Ok(true)
    }

    fn description(&self) -> &'static str {
        "Presented credential must match the workflow credential"
    }
}
