//! Weibull wind-speed distribution.
//!
//! ```text
//! pdf(u) = (k/c) * (u/c)^(k-1) * exp(-(u/c)^k)
//! cdf(u) = 1 - exp(-(u/c)^k)
//! c      = mean / Γ(1 + 1/k)
//! ```

use statrs::function::gamma as special;

use crate::error::WindResult;
use wy_core::numeric::ensure_positive;

/// Gamma function for positive real arguments.
pub fn gamma(x: f64) -> WindResult<f64> {
    ensure_positive(x, "gamma argument")?;
    Ok(special::gamma(x))
}

/// Two-parameter Weibull distribution with shape `k` and scale `c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weibull {
    k: f64,
    c: f64,
}

impl Weibull {
    /// # Errors
    /// Returns a domain error unless both parameters are finite and positive.
    pub fn new(k: f64, c: f64) -> WindResult<Self> {
        ensure_positive(k, "weibull shape k")?;
        ensure_positive(c, "weibull scale c")?;
        Ok(Self { k, c })
    }

    /// Fit the scale so that the distribution mean equals `mean_speed`.
    pub fn from_mean(k: f64, mean_speed: f64) -> WindResult<Self> {
        Self::new(k, weibull_scale(k, mean_speed)?)
    }

    pub fn shape(&self) -> f64 {
        self.k
    }

    pub fn scale(&self) -> f64 {
        self.c
    }

    /// Density at `u`. Infinite at `u = 0` when `k < 1`.
    pub fn pdf(&self, u: f64) -> f64 {
        let x = u / self.c;
        (self.k / self.c) * x.powf(self.k - 1.0) * (-x.powf(self.k)).exp()
    }

    pub fn cdf(&self, u: f64) -> f64 {
        1.0 - (-(u / self.c).powf(self.k)).exp()
    }

    pub fn mean(&self) -> f64 {
        self.c * special::gamma(1.0 + 1.0 / self.k)
    }
}

/// Scale parameter `c` from shape `k` and the mean speed.
pub fn weibull_scale(k: f64, mean_speed: f64) -> WindResult<f64> {
    ensure_positive(k, "weibull shape k")?;
    ensure_positive(mean_speed, "mean wind speed")?;
    Ok(mean_speed / gamma(1.0 + 1.0 / k)?)
}

/// Elementwise Weibull density over a speed vector.
pub fn weibull_pdf(u: &[f64], k: f64, c: f64) -> WindResult<Vec<f64>> {
    let dist = Weibull::new(k, c)?;
    Ok(u.iter().map(|&v| dist.pdf(v)).collect())
}

/// Elementwise Weibull cumulative distribution over a speed vector.
pub fn weibull_cdf(u: &[f64], k: f64, c: f64) -> WindResult<Vec<f64>> {
    let dist = Weibull::new(k, c)?;
    Ok(u.iter().map(|&v| dist.cdf(v)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WindError;
    use wy_core::{nearly_equal, Tolerances};

    const TOL: Tolerances = Tolerances {
        abs: 1e-12,
        rel: 1e-10,
    };

    #[test]
    fn gamma_known_values() {
        assert!(nearly_equal(gamma(1.0).unwrap(), 1.0, TOL));
        assert!(nearly_equal(gamma(5.0).unwrap(), 24.0, TOL));
        assert!(nearly_equal(
            gamma(0.5).unwrap(),
            std::f64::consts::PI.sqrt(),
            TOL
        ));
        assert!(nearly_equal(
            gamma(1.5).unwrap(),
            0.886_226_925_452_758,
            TOL
        ));
        // Γ(4/3), used for k = 3
        assert!(nearly_equal(
            gamma(1.0 + 1.0 / 3.0).unwrap(),
            0.892_979_511_569_249_2,
            TOL
        ));
    }

    #[test]
    fn gamma_rejects_non_positive() {
        assert!(matches!(gamma(0.0), Err(WindError::Domain { .. })));
        assert!(matches!(gamma(-2.5), Err(WindError::Domain { .. })));
    }

    #[test]
    fn scale_for_rayleigh_site() {
        // k = 2, mean 7 m/s
        let c = weibull_scale(2.0, 7.0).unwrap();
        assert!((c - 7.898_654).abs() < 1e-5);
        let dist = Weibull::new(2.0, c).unwrap();
        assert!(nearly_equal(dist.mean(), 7.0, TOL));
    }

    #[test]
    fn pdf_matches_closed_form_at_scale() {
        // At u = c: (k/c) * exp(-1)
        let c = 7.905;
        let pdf = weibull_pdf(&[c], 2.0, c).unwrap();
        let expected = (2.0 / c) * (-1.0_f64).exp();
        assert!(nearly_equal(pdf[0], expected, TOL));
    }

    #[test]
    fn pdf_at_zero_speed() {
        assert_eq!(weibull_pdf(&[0.0], 2.0, 8.0).unwrap()[0], 0.0);
        assert!(nearly_equal(
            weibull_pdf(&[0.0], 1.0, 8.0).unwrap()[0],
            1.0 / 8.0,
            TOL
        ));
        // Singular for k < 1
        assert!(weibull_pdf(&[0.0], 0.8, 8.0).unwrap()[0].is_infinite());
    }

    #[test]
    fn cdf_bounds() {
        let cdf = weibull_cdf(&[0.0, 30.0], 2.0, 7.9).unwrap();
        assert_eq!(cdf[0], 0.0);
        assert!(cdf[1] > 1.0 - 1e-6);
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(weibull_pdf(&[1.0], 0.0, 7.0).is_err());
        assert!(weibull_cdf(&[1.0], 2.0, -7.0).is_err());
        assert!(Weibull::new(f64::NAN, 7.0).is_err());
    }

    #[test]
    fn pdf_integrates_to_one() {
        let dist = Weibull::new(2.2, 8.5).unwrap();
        let du = 0.01;
        let area: f64 = (0..6000).map(|i| dist.pdf((i as f64 + 0.5) * du) * du).sum();
        assert!((area - 1.0).abs() < 1e-6);
    }
}
