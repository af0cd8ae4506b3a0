//! `vmatt` library crate.
//!
//! Steady-state vibration response of a single-degree-of-freedom oscillator:
//! magnification factor and phase angle over a fixed frequency-ratio sweep, plus the
//! values at the sample nearest resonance.
//!
//! The binary (`vmatt`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the calculator is reusable outside the terminal front-ends

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod plot;
pub mod report;
pub mod response;
pub mod session;
pub mod tui;
