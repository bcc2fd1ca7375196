#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Guarded Workflow
//!
//! In-memory finite-state workflows whose transitions may be gated by a
//! guard predicate.
//!
//! ## Overview
//!
//! A [`Workflow`](state_machine::Workflow) delegates its behaviour to a
//! replaceable current state. Each workflow kind describes its states, events
//! and guarded edges as a static transition table, so the graph can be
//! inspected and tested as data. Two kinds ship with the crate:
//!
//! - **Order lifecycle**: `pending -> shipped -> delivered`, unguarded
//! - **Door access**: `locked -> unlocked`, guarded by credential equality;
//!   principals may only be admitted while the door is unlocked
//!
//! ## Module Organization
//!
//! - [`state_machine`] - States, events, guards, the engine and its history
//! - [`config`] - Engine configuration and layered loading
//! - [`logging`] - Structured logging setup
//! - [`error`] - Crate-level error type
//!
//! ## Quick Start
//!
//! ```rust
//! use guarded_workflow::state_machine::{
//!     AccessEvent, AccessState, AccessStateMachine, Credential, Principal,
//! };
//!
//! let key = Credential::mint();
//! let mut door = AccessStateMachine::with_credential(key);
//! let tenant = Principal::new(key);
//!
//! assert!(door.admit(tenant.clone()).is_err());
//!
//! door.advance(AccessEvent::Unlock, Some(tenant.key())).unwrap();
//! assert_eq!(door.current_state(), AccessState::Unlocked);
//!
//! door.admit(tenant).unwrap();
//! ```
//!
//! ## Concurrency
//!
//! Workflows are plain single-threaded values with no internal locking. Share
//! one across threads only behind external serialization such as a mutex held
//! for the duration of each `advance`/`admit` call.

pub mod config;
pub mod error;
pub mod logging;
pub mod state_machine;

pub use config::{ConfigManager, EngineConfig, UndefinedTransitionPolicy};
pub use error::{Result, WorkflowError};
pub use state_machine::{
    AccessEvent, AccessState, AccessStateMachine, Credential, ErrorKind, OrderEvent, OrderState,
    OrderStateMachine, Principal, StateMachineError, Workflow, WorkflowDefinition,
};
