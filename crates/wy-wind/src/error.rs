//! Error types for wind resource and turbine calculations.

use thiserror::Error;
use wy_core::WyError;

/// Errors raised by the wind and turbine pipeline.
///
/// All of these are deterministic: the same inputs always fail the same way,
/// so callers should surface them rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindError {
    #[error("Domain error: {what} (value={value})")]
    Domain { what: &'static str, value: f64 },

    #[error("Threshold not found: {what} (limit={limit}, qualifying bins={found})")]
    ThresholdNotFound {
        what: &'static str,
        limit: f64,
        found: usize,
    },

    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },

    #[error("Precondition violated: {what}")]
    Precondition { what: String },
}

pub type WindResult<T> = Result<T, WindError>;

impl From<WyError> for WindError {
    fn from(e: WyError) -> Self {
        match e {
            WyError::NonFinite { what, value } => WindError::Domain { what, value },
            WyError::OutOfRange { what, value } => WindError::Domain { what, value },
            WyError::LengthMismatch {
                what,
                expected,
                got,
            } => WindError::Precondition {
                what: format!("{what} has {got} bins, speed grid has {expected}"),
            },
        }
    }
}
