//! Domain types shared by the calculator and the front-ends.
//!
//! This module defines:
//!
//! - validated oscillator inputs (`OscillatorParameters`)
//! - the fixed sweep and sampled curves (`FrequencySweep`, `ResponseCurve`)
//! - resonance summary and full submission output (`ResonancePoint`, `OscillatorResponse`)
//! - the saved response file schema (`ResponseFile`)

pub mod types;

pub use types::*;
