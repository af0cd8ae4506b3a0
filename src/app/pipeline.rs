//! Shared "submit" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! raw inputs -> validation -> response calculation
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use tracing::{debug, info, warn};

use crate::domain::{OscillatorParameters, OscillatorResponse};
use crate::error::ParameterError;
use crate::response::compute_response;

/// All computed outputs of a single submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    /// Display name the result is addressed to.
    pub name: String,
    pub response: OscillatorResponse,
}

/// Validate raw inputs and compute the response.
///
/// Invalid inputs are rejected here, before the calculator runs.
pub fn run_response(
    name: &str,
    mass: f64,
    damping: f64,
    spring_constant: f64,
) -> Result<RunOutput, ParameterError> {
    let params = OscillatorParameters::new(mass, damping, spring_constant).inspect_err(|_| {
        warn!(mass, damping, spring_constant, "rejected oscillator parameters");
    })?;

    debug!(mass, damping, spring_constant, "computing response");
    let response = compute_response(&params);
    info!(
        natural_frequency = response.natural_frequency,
        damping_ratio = response.damping_ratio,
        resonance_magnification = response.resonance.magnification,
        resonance_phase_deg = response.resonance.phase_angle_deg,
        "response computed"
    );

    Ok(RunOutput {
        name: name.to_string(),
        response,
    })
}
