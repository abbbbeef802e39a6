//! Normalized running sums.

use crate::error::{WindError, WindResult};
use wy_core::numeric::ensure_finite;

/// Running share of the total: `s[i] = sum(v[0..=i]) / sum(v)`.
///
/// The result is non-decreasing for non-negative input and its last
/// element is 1 up to rounding.
///
/// # Errors
/// `DivisionByZero` when the input sums to zero (including empty input).
pub fn cumulative_share(v: &[f64]) -> WindResult<Vec<f64>> {
    let total = ensure_finite(v.iter().sum(), "cumulative total")?;
    if total == 0.0 {
        return Err(WindError::DivisionByZero {
            what: "cumulative share of a zero-sum vector",
        });
    }

    let mut running = 0.0;
    Ok(v
        .iter()
        .map(|x| {
            running += x;
            running / total
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_share() {
        let s = cumulative_share(&[1.0, 1.0, 2.0]).unwrap();
        assert_eq!(s, vec![0.25, 0.5, 1.0]);
    }

    #[test]
    fn leading_zeros_stay_zero() {
        let s = cumulative_share(&[0.0, 0.0, 3.0, 1.0]).unwrap();
        assert_eq!(s[0], 0.0);
        assert_eq!(s[1], 0.0);
        assert_eq!(s[2], 0.75);
    }

    #[test]
    fn zero_sum_is_division_by_zero() {
        assert!(matches!(
            cumulative_share(&[0.0, 0.0]),
            Err(WindError::DivisionByZero { .. })
        ));
        assert!(matches!(
            cumulative_share(&[]),
            Err(WindError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn non_finite_total_is_domain_error() {
        assert!(matches!(
            cumulative_share(&[1.0, f64::INFINITY]),
            Err(WindError::Domain { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ends_at_one_and_never_decreases(v in prop::collection::vec(1e-6_f64..1e6, 1..64)) {
            let s = cumulative_share(&v).unwrap();
            prop_assert_eq!(s.len(), v.len());
            prop_assert!((s[s.len() - 1] - 1.0).abs() <= 1e-9);
            for pair in s.windows(2) {
                prop_assert!(pair[1] >= pair[0]);
            }
        }
    }
}
