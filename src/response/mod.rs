//! Steady-state vibration response.
//!
//! Implemented as small, pure functions so that the CLI and the TUI can share them
//! without any session state.

pub mod calculator;

pub use calculator::*;
