use crate::WyError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WyError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WyError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, WyError> {
    ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(WyError::OutOfRange { what, value: v })
    }
}

/// Finite and inside the open unit interval (0, 1).
pub fn ensure_fraction(v: Real, what: &'static str) -> Result<Real, WyError> {
    ensure_finite(v, what)?;
    if v > 0.0 && v < 1.0 {
        Ok(v)
    } else {
        Err(WyError::OutOfRange { what, value: v })
    }
}

/// Per-bin vectors must all share the speed grid length.
pub fn ensure_same_len(expected: usize, got: usize, what: &'static str) -> Result<(), WyError> {
    if expected == got {
        Ok(())
    } else {
        Err(WyError::LengthMismatch {
            what,
            expected,
            got,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(ensure_positive(1.0, "x").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "x"),
            Err(WyError::OutOfRange { .. })
        ));
        assert!(matches!(
            ensure_positive(Real::INFINITY, "x"),
            Err(WyError::NonFinite { .. })
        ));
    }

    #[test]
    fn ensure_fraction_is_open_interval() {
        assert!(ensure_fraction(0.5, "limit").is_ok());
        assert!(ensure_fraction(0.0, "limit").is_err());
        assert!(ensure_fraction(1.0, "limit").is_err());
    }

    #[test]
    fn ensure_same_len_reports_both_lengths() {
        let err = ensure_same_len(30, 29, "hours").unwrap_err();
        assert_eq!(
            err,
            WyError::LengthMismatch {
                what: "hours",
                expected: 30,
                got: 29
            }
        );
    }
}
