//! Error types.
//!
//! Two layers:
//!
//! - [`EngineError`]: typed failures from the prediction core. All are
//!   deterministic given the same bad input — none are retryable, and the core
//!   never substitutes defaults or clamps silently.
//! - [`AppError`]: what the binary surfaces (message + process exit code).
//!   Terminal/IO failures are constructed directly; core errors convert via
//!   `From`.

use crate::domain::ParamKey;

/// Failures from the prediction engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A referenced parameter key is not one of the fixed thirteen.
    UnknownParameter { key: String },
    /// A raw input lies outside its declared valid range.
    OutOfRange {
        key: ParamKey,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Malformed input vector (wrong length). Indicates a caller bug.
    DimensionMismatch { expected: usize, got: usize },
    /// Invalid sweep configuration (e.g., fewer than two steps).
    InvalidArgument(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::UnknownParameter { key } => {
                write!(f, "Unknown parameter '{key}' (run `corbel params` for the list).")
            }
            EngineError::OutOfRange {
                key,
                value,
                min,
                max,
            } => write!(
                f,
                "{} = {value} is outside the valid range [{min}, {max}].",
                key.label()
            ),
            EngineError::DimensionMismatch { expected, got } => {
                write!(f, "Input vector has {got} components, expected {expected}.")
            }
            EngineError::InvalidArgument(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

#[derive(Clone)]
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

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        // All engine failures are bad-input conditions from the binary's
        // perspective.
        AppError::new(2, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
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

impl std::error::Error for AppError {}
