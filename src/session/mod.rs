//! Per-session state for the interactive front-end.
//!
//! A [`Session`] owns everything one user interaction needs: the display name, the
//! three raw numeric inputs, the last computed result, and the reset state machine.
//! Nothing here is global; each front-end creates and owns its own session.
//!
//! Reset is a two-step transition. The RESET action only *requests* a reset
//! (`Idle -> PendingReset`); the request is applied by [`Session::apply_pending`],
//! which the front-end calls before it binds or renders the input fields
//! (`PendingReset -> Idle`). That ordering guarantees the fields never display
//! stale values after a reset.

use tracing::{debug, info};

use crate::app::pipeline::{RunOutput, run_response};
use crate::error::SessionError;

/// Pending configuration mutations for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetState {
    #[default]
    Idle,
    PendingReset,
}

/// The three raw input values, exactly as the user entered them.
///
/// `0.0` is the "absent" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterInputs {
    pub mass: f64,
    pub damping: f64,
    pub spring_constant: f64,
}

impl ParameterInputs {
    /// True when any field still holds the absent sentinel.
    pub fn has_absent(&self) -> bool {
        self.mass == 0.0 || self.damping == 0.0 || self.spring_constant == 0.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    name: String,
    inputs: ParameterInputs,
    reset_state: ResetState,
    last: Option<RunOutput>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a pre-filled display name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether the name gate is open (a non-blank name has been entered).
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn inputs(&self) -> ParameterInputs {
        self.inputs
    }

    pub fn set_inputs(&mut self, inputs: ParameterInputs) {
        self.inputs = inputs;
    }

    pub fn reset_state(&self) -> ResetState {
        self.reset_state
    }

    /// Result of the last successful submission, if it is still current.
    pub fn last(&self) -> Option<&RunOutput> {
        self.last.as_ref()
    }

    /// RESET: request that the inputs be cleared before the next input binding.
    pub fn request_reset(&mut self) {
        debug!("reset requested");
        self.reset_state = ResetState::PendingReset;
    }

    /// Apply any pending reset. Returns `true` if the inputs were cleared.
    ///
    /// Must run before the front-end reads [`Session::inputs`] to bind its fields.
    pub fn apply_pending(&mut self) -> bool {
        match self.reset_state {
            ResetState::Idle => false,
            ResetState::PendingReset => {
                self.inputs = ParameterInputs::default();
                self.last = None;
                self.reset_state = ResetState::Idle;
                info!("session inputs reset");
                true
            }
        }
    }

    /// ENTER: validate the current inputs and recompute the response.
    ///
    /// A failed submission clears the previous result so stale plots are not shown
    /// next to a validation message.
    pub fn submit(&mut self) -> Result<&RunOutput, SessionError> {
        self.apply_pending();
        self.last = None;

        if !self.has_name() {
            return Err(SessionError::MissingName);
        }

        let ParameterInputs {
            mass,
            damping,
            spring_constant,
        } = self.inputs;
        let run = run_response(self.name.trim(), mass, damping, spring_constant)?;
        Ok(&*self.last.insert(run))
    }
}
