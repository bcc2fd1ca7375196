use guarded_workflow::config::{ConfigManager, UndefinedTransitionPolicy};
use guarded_workflow::state_machine::{OrderEvent, OrderState, OrderStateMachine};
use std::fs;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

// Environment variables are process-global; loader tests take this lock
static CONFIG_ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    CONFIG_ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn test_loaded_config_drives_workflow() {
    let _guard = env_lock();
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("workflow.toml"),
        "undefined_transition = \"reject\"\nhistory_limit = 1\n",
    )
    .unwrap();

    let manager =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test")
            .unwrap();
    let config = manager.config();
    assert_eq!(config.undefined_transition, UndefinedTransitionPolicy::Reject);

    let mut order = OrderStateMachine::from_config(config, None);
    order.advance(OrderEvent::Proceed, None).unwrap();
    order.advance(OrderEvent::Proceed, None).unwrap();

    assert_eq!(order.current_state(), OrderState::Delivered);
    assert_eq!(order.history().len(), 1);
    assert_eq!(
        order.history().latest().map(|record| record.to_state),
        Some(OrderState::Delivered)
    );
}

#[test]
fn test_log_level_from_file() {
    let _guard = env_lock();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("workflow.toml"), "log_level = \"warn\"\n").unwrap();

    let manager =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test")
            .unwrap();
    assert_eq!(manager.config().log_level.as_deref(), Some("warn"));
}

#[test]
fn test_environment_variables_override_files() {
    let _guard = env_lock();
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("workflow.toml"),
        "undefined_transition = \"ignore\"\nhistory_limit = 3\n",
    )
    .unwrap();

    std::env::set_var("GUARDED_WORKFLOW__HISTORY_LIMIT", "7");
    std::env::set_var("GUARDED_WORKFLOW__UNDEFINED_TRANSITION", "reject");
    let result =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test");
    std::env::remove_var("GUARDED_WORKFLOW__HISTORY_LIMIT");
    std::env::remove_var("GUARDED_WORKFLOW__UNDEFINED_TRANSITION");

    let manager = result.unwrap();
    assert_eq!(manager.config().history_limit, 7);
    assert_eq!(
        manager.config().undefined_transition,
        UndefinedTransitionPolicy::Reject
    );
}
