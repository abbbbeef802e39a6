use thiserror::Error;

pub type WyResult<T> = Result<T, WyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WyError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    #[error("Length mismatch: {what} (expected={expected}, got={got})")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}
