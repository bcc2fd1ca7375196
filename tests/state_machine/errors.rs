use guarded_workflow::state_machine::errors::*;
use guarded_workflow::WorkflowError;

#[test]
fn test_guard_error_messages() {
    assert_eq!(
        GuardError::CredentialMismatch.to_string(),
        "Presented credential does not match"
    );
    assert_eq!(
        GuardError::NoCredentialConfigured.to_string(),
        "Workflow has no credential configured"
    );
}

#[test]
fn test_error_chain() {
    let sm_err = guard_rejected("unlock", GuardError::CredentialMissing.to_string());
    let err: WorkflowError = sm_err.clone().into();

    match err {
        WorkflowError::StateMachine(inner) => {
            assert_eq!(inner, sm_err);
            assert!(inner.to_string().contains("No credential presented"));
        }
        other => panic!("Expected StateMachine error, got {other:?}"),
    }
}

#[test]
fn test_error_kinds_serialize() {
    assert_eq!(
        serde_json::to_string(&ErrorKind::UndefinedTransition).unwrap(),
        "\"undefined_transition\""
    );
}

#[test]
fn test_guard_error_converts_to_rejection() {
    let err = StateMachineError::from(GuardError::CredentialMismatch);
    assert_eq!(err.kind(), ErrorKind::GuardRejected);

    let err = err.with_event("unlock");
    assert_eq!(
        err.to_string(),
        "Guard rejected 'unlock' transition: Presented credential does not match"
    );
}
