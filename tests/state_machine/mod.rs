//! State Machine Tests Module
//!
//! Covers the order lifecycle, door access, admission gating and custom
//! workflow definitions through the public API.

pub mod access_state_machine;
pub mod errors;
pub mod order_state_machine;
