use thiserror::Error;

/// Message shown whenever a submission carries a zero (or otherwise unusable) input.
pub const INVALID_PARAMETERS_MESSAGE: &str = "Please enter valid non-zero values for Mass (m), \
     Damping Constant (c), and Spring Constant (k).";

/// Rejection of an oscillator input triple.
///
/// This is the only error the response core knows about. It is raised before the
/// calculator runs and is never fatal: the user fixes the values and resubmits.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ParameterError {
    #[error("{} (received m={mass}, c={damping}, k={spring_constant})", INVALID_PARAMETERS_MESSAGE)]
    InvalidParameters {
        mass: f64,
        damping: f64,
        spring_constant: f64,
    },
}

/// Reasons a session submission did not produce a response.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Please enter your name to use VMATT.")]
    MissingName,
    #[error(transparent)]
    InvalidParameters(#[from] ParameterError),
}

/// Application-level failure carrying the process exit code.
#[derive(Clone, Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> Self {
        AppError::new(2, err.to_string())
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::new(2, err.to_string())
    }
}
