use super::credentials::Credential;
use super::definition::DoorAccess;
use super::workflow::Workflow;

/// Door access state machine: `locked -> unlocked`
///
/// The `unlock` edge is guarded by credential equality. Principals can only
/// be admitted once the door is unlocked.
pub type AccessStateMachine = Workflow<DoorAccess>;

impl Workflow<DoorAccess> {
    /// Mint a credential, build a locked door guarded by it, and hand the
    /// credential back for the authorized holder
    pub fn for_new_key() -> (Self, Credential) {
        let key = Credential::mint();
        (Self::with_credential(key), key)
    }
}
