use guarded_workflow::state_machine::{
    AccessEvent, AccessState, AccessStateMachine, Credential, ErrorKind, Principal,
    StateMachineError,
};

fn assert_send<T: Send>() {}

#[test]
fn test_fresh_door_is_locked() {
    let door = AccessStateMachine::with_credential(Credential::mint());
    assert_eq!(door.current_state(), AccessState::Locked);
    assert!(!door.admits_entry());
}

#[test]
fn test_matching_key_unlocks() {
    let key = Credential::mint();
    let mut door = AccessStateMachine::with_credential(key);

    assert_eq!(
        door.advance(AccessEvent::Unlock, Some(&key)),
        Ok(AccessState::Unlocked)
    );
}

#[test]
fn test_wrong_key_is_rejected() {
    let k1 = Credential::mint();
    let k2 = Credential::mint();
    assert_ne!(k1, k2);

    let mut door = AccessStateMachine::with_credential(k1);
    let err = door.advance(AccessEvent::Unlock, Some(&k2)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::GuardRejected);
    assert!(err.is_recoverable());
    assert_eq!(door.current_state(), AccessState::Locked);

    // Retry with the right key still works
    assert_eq!(
        door.advance(AccessEvent::Unlock, Some(&k1)),
        Ok(AccessState::Unlocked)
    );
}

#[test]
fn test_admission_gating() {
    let key = Credential::mint();
    let mut door = AccessStateMachine::with_credential(key);
    let tenant = Principal::new(key);

    let err = door.admit(tenant.clone()).unwrap_err();
    assert!(matches!(err, StateMachineError::GateClosed { ref state } if state == "locked"));
    assert!(door.admitted().is_empty());

    door.advance(AccessEvent::Unlock, Some(tenant.key())).unwrap();

    door.admit(tenant.clone()).unwrap();
    assert_eq!(
        door.admitted().iter().filter(|p| **p == tenant).count(),
        1
    );

    door.admit(tenant.clone()).unwrap();
    assert_eq!(
        door.admitted().iter().filter(|p| **p == tenant).count(),
        2
    );
}

#[test]
fn test_admission_does_not_require_matching_key() {
    let key = Credential::mint();
    let mut door = AccessStateMachine::with_credential(key);
    door.advance(AccessEvent::Unlock, Some(&key)).unwrap();

    let guest = Principal::new(Credential::mint());
    door.admit(guest.clone()).unwrap();
    assert_eq!(door.admitted(), &[guest]);
    assert_eq!(door.current_state(), AccessState::Unlocked);
}

#[test]
fn test_unlock_is_idempotent() {
    let key = Credential::mint();
    let mut door = AccessStateMachine::with_credential(key);

    door.advance(AccessEvent::Unlock, Some(&key)).unwrap();
    assert_eq!(
        door.advance(AccessEvent::Unlock, Some(&key)),
        Ok(AccessState::Unlocked)
    );
    // The open door ignores whatever is presented
    assert_eq!(
        door.advance(AccessEvent::Unlock, Some(&Credential::mint())),
        Ok(AccessState::Unlocked)
    );
    assert_eq!(door.history().len(), 1);
}

#[test]
fn test_door_without_credential_stays_locked() {
    let mut door = AccessStateMachine::new();
    let err = door
        .advance(AccessEvent::Unlock, Some(&Credential::mint()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::GuardRejected);
    assert_eq!(door.current_state(), AccessState::Locked);
}

#[test]
fn test_for_new_key_hands_back_working_key() {
    let (mut door, key) = AccessStateMachine::for_new_key();
    assert!(door.has_credential());
    assert_eq!(
        door.advance(AccessEvent::Unlock, Some(&key)),
        Ok(AccessState::Unlocked)
    );
}

#[test]
fn test_workflow_can_move_between_threads() {
    assert_send::<AccessStateMachine>();
}
