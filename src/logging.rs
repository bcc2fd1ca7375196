//! # Structured Logging Module
//!
//! Environment-aware structured logging for workflow transitions and
//! admissions. The engine only emits `tracing` events; installing a
//! subscriber is left to the embedding application, which may call
//! [`init_structured_logging`] for a ready-made console setup.

use crate::config::{ConfigManager, EngineConfig};
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    init_structured_logging_with(&EngineConfig::default());
}

/// Initialize structured logging, taking the filter from `config.log_level`
/// when `RUST_LOG` is unset
pub fn init_structured_logging_with(config: &EngineConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = ConfigManager::detect_environment();
        let directive = std::env::var("RUST_LOG")
            .ok()
            .or_else(|| config.log_level.clone())
            .unwrap_or_else(|| get_log_level(&environment).to_string());

        let json = use_json_format();
        let layer = if json {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .json()
                .with_filter(EnvFilter::new(directive.clone()))
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(EnvFilter::new(directive.clone()))
                .boxed()
        };

        // Another subscriber may already be installed by the host application
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized");
        }

        tracing::info!(
            environment = %environment,
            filter = %directive,
            json = json,
            "🔧 STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    if environment.eq_ignore_ascii_case("production") {
        "info"
    } else {
        "debug"
    }
}

fn use_json_format() -> bool {
    std::env::var("GUARDED_WORKFLOW_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Log structured data for a workflow operation
pub fn log_workflow_operation(
    operation: &str,
    workflow: &str,
    workflow_id: &str,
    state: &str,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        workflow = %workflow,
        workflow_id = %workflow_id,
        state = %state,
        status = %status,
        details = details,
        "📋 WORKFLOW_OPERATION"
    );
}
