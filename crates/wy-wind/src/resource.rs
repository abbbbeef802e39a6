//! Site wind resource: hub-height speed, Weibull distribution, annual hours
//! and energy per bin, and the speeds picked from the energy CDF.
//!
//! Each stage consumes the previous one and dereferences to it, so later
//! stages still expose earlier results while out-of-order calls do not
//! type-check:
//!
//! ```text
//! WindResource -> HubWind -> WeibullWind -> HourlyWind -> EnergyWind -> DesignWind
//! ```

use std::ops::Deref;

use tracing::debug;
use wy_core::numeric::{ensure_finite, ensure_fraction, ensure_positive};
use wy_core::units::{m, mps, Area, Length, Velocity};

use crate::config::DesignConfig;
use crate::cumulative::cumulative_share;
use crate::error::{WindError, WindResult};
use crate::weibull::Weibull;

/// Measured mean wind at a reference height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindSite {
    pub reference_speed: Velocity,
    pub reference_height: Length,
}

/// Logarithmic wind profile.
///
/// ```text
/// u(h) = u_ref * ln(h / z0) / ln(h_ref / z0)
/// ```
///
/// # Errors
/// Domain error when `z0 <= 0` or either height is not above `z0`.
pub fn log_wind_profile(
    ref_speed: f64,
    ref_height: f64,
    target_height: f64,
    roughness_length: f64,
) -> WindResult<f64> {
    ensure_finite(ref_speed, "reference speed")?;
    ensure_positive(roughness_length, "roughness length")?;
    if ref_height <= roughness_length {
        return Err(WindError::Domain {
            what: "reference height must be above the roughness length",
            value: ref_height,
        });
    }
    if target_height <= roughness_length {
        return Err(WindError::Domain {
            what: "target height must be above the roughness length",
            value: target_height,
        });
    }
    Ok(ref_speed * (target_height / roughness_length).ln() / (ref_height / roughness_length).ln())
}

/// Site inputs and the fixed speed grid.
#[derive(Clone, Debug)]
pub struct WindResource {
    site: WindSite,
    air_density: f64,
    speed_step: f64,
    speed_vector: Vec<f64>,
}

impl WindResource {
    pub fn new(site: WindSite, config: &DesignConfig) -> WindResult<Self> {
        config.validate()?;
        ensure_positive(site.reference_speed.value, "reference speed")?;
        ensure_positive(site.reference_height.value, "reference height")?;
        Ok(Self {
            site,
            air_density: config.air_density,
            speed_step: config.speed_step,
            speed_vector: config.speed_vector()?,
        })
    }

    pub fn site(&self) -> &WindSite {
        &self.site
    }

    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    pub fn speed_step(&self) -> f64 {
        self.speed_step
    }

    /// Speed bin centers (m/s).
    pub fn speed_vector(&self) -> &[f64] {
        &self.speed_vector
    }

    /// Extrapolate the reference speed to `target_height`.
    pub fn wind_profile(self, target_height: Length, roughness_length: Length) -> WindResult<HubWind> {
        let hub_speed = log_wind_profile(
            self.site.reference_speed.value,
            self.site.reference_height.value,
            target_height.value,
            roughness_length.value,
        )?;
        debug!(
            hub_speed,
            target_height = target_height.value,
            "extrapolated wind speed to hub height"
        );
        Ok(HubWind {
            resource: self,
            hub_height: target_height.value,
            hub_speed,
        })
    }
}

/// Mean wind speed at hub height.
#[derive(Clone, Debug)]
pub struct HubWind {
    resource: WindResource,
    hub_height: f64,
    hub_speed: f64,
}

impl Deref for HubWind {
    type Target = WindResource;

    fn deref(&self) -> &WindResource {
        &self.resource
    }
}

impl HubWind {
    pub fn hub_speed(&self) -> Velocity {
        mps(self.hub_speed)
    }

    pub fn hub_height(&self) -> Length {
        m(self.hub_height)
    }

    /// Fit a Weibull distribution with shape `shape_k` whose mean is the hub
    /// speed and evaluate its density on the speed grid.
    ///
    /// # Errors
    /// Domain error for a non-positive shape, and for `shape_k < 1` on a grid
    /// that starts at zero, where the density is singular.
    pub fn weibull(self, shape_k: f64) -> WindResult<WeibullWind> {
        let distribution = Weibull::from_mean(shape_k, self.hub_speed)?;
        let speed_probability_vector: Vec<f64> = self
            .speed_vector()
            .iter()
            .map(|&u| distribution.pdf(u))
            .collect();
        if let Some(bad) = speed_probability_vector.iter().find(|p| !p.is_finite()) {
            return Err(WindError::Domain {
                what: "weibull density is singular at zero speed for shape k < 1",
                value: *bad,
            });
        }
        debug!(
            k = distribution.shape(),
            c = distribution.scale(),
            "fitted weibull distribution"
        );
        Ok(WeibullWind {
            hub: self,
            distribution,
            speed_probability_vector,
        })
    }
}

/// Weibull fit and per-bin probability density.
#[derive(Clone, Debug)]
pub struct WeibullWind {
    hub: HubWind,
    distribution: Weibull,
    speed_probability_vector: Vec<f64>,
}

impl Deref for WeibullWind {
    type Target = HubWind;

    fn deref(&self) -> &HubWind {
        &self.hub
    }
}

impl WeibullWind {
    pub fn distribution(&self) -> &Weibull {
        &self.distribution
    }

    pub fn shape_k(&self) -> f64 {
        self.distribution.shape()
    }

    pub fn scale_c(&self) -> f64 {
        self.distribution.scale()
    }

    /// Probability density per speed bin (1/(m/s)).
    pub fn speed_probability_vector(&self) -> &[f64] {
        &self.speed_probability_vector
    }

    /// Expected hours per bin over a period of `hours` hours.
    pub fn hourly_distribution(self, hours: f64) -> WindResult<HourlyWind> {
        ensure_positive(hours, "hours in period")?;
        let hour_distribution_vector = self
            .speed_probability_vector
            .iter()
            .map(|p| p * hours)
            .collect();
        Ok(HourlyWind {
            weibull: self,
            hours,
            hour_distribution_vector,
        })
    }

    /// Expected wind power through `swept_area` per bin (W), before any
    /// turbine losses.
    pub fn wind_power_distribution(&self, swept_area: Area) -> WindResult<Vec<f64>> {
        let area = ensure_positive(swept_area.value, "swept area")?;
        let rho = self.air_density();
        Ok(self
            .speed_vector()
            .iter()
            .zip(&self.speed_probability_vector)
            .map(|(u, p)| 0.5 * rho * area * u.powi(3) * p)
            .collect())
    }
}

/// Hours per speed bin.
#[derive(Clone, Debug)]
pub struct HourlyWind {
    weibull: WeibullWind,
    hours: f64,
    hour_distribution_vector: Vec<f64>,
}

impl Deref for HourlyWind {
    type Target = WeibullWind;

    fn deref(&self) -> &WeibullWind {
        &self.weibull
    }
}

impl HourlyWind {
    pub fn hours_in_period(&self) -> f64 {
        self.hours
    }

    /// Expected hours per bin (h).
    pub fn hour_distribution_vector(&self) -> &[f64] {
        &self.hour_distribution_vector
    }

    /// Energy per unit swept area per bin and its normalized cumulative share.
    ///
    /// ```text
    /// e[i] = 0.5 * rho * u[i]^3 * hours[i]     (Wh/m²)
    /// ```
    pub fn energy_density_distribution(self) -> WindResult<EnergyWind> {
        let rho = self.air_density();
        let energy_distribution_vector: Vec<f64> = self
            .speed_vector()
            .iter()
            .zip(&self.hour_distribution_vector)
            .map(|(u, t)| 0.5 * rho * u.powi(3) * t)
            .collect();
        let energy_cdf_vector = cumulative_share(&energy_distribution_vector)?;
        Ok(EnergyWind {
            hourly: self,
            energy_distribution_vector,
            energy_cdf_vector,
        })
    }
}

/// Energy density per bin and its CDF.
#[derive(Clone, Debug)]
pub struct EnergyWind {
    hourly: HourlyWind,
    energy_distribution_vector: Vec<f64>,
    energy_cdf_vector: Vec<f64>,
}

impl Deref for EnergyWind {
    type Target = HourlyWind;

    fn deref(&self) -> &HourlyWind {
        &self.hourly
    }
}

impl EnergyWind {
    /// Energy per unit swept area per bin (Wh/m²).
    pub fn energy_distribution_vector(&self) -> &[f64] {
        &self.energy_distribution_vector
    }

    /// Cumulative share of the period's wind energy; last element is 1.
    pub fn energy_cdf_vector(&self) -> &[f64] {
        &self.energy_cdf_vector
    }

    /// Rated speed: one bin past the first bin whose energy share exceeds
    /// `rated_limit`.
    pub fn rated_speed(&self, rated_limit: f64) -> WindResult<Velocity> {
        self.speed_past_threshold(rated_limit, "rated speed").map(mps)
    }

    /// Cut-out speed, same rule as [`EnergyWind::rated_speed`].
    pub fn cutout_speed(&self, cutout_limit: f64) -> WindResult<Velocity> {
        self.speed_past_threshold(cutout_limit, "cut-out speed").map(mps)
    }

    /// Pick rated and cut-out speeds together.
    pub fn design_speeds(self, rated_limit: f64, cutout_limit: f64) -> WindResult<DesignWind> {
        if rated_limit >= cutout_limit {
            return Err(WindError::Domain {
                what: "rated limit must be below the cut-out limit",
                value: rated_limit,
            });
        }
        let speed_rated = self.rated_speed(rated_limit)?.value;
        let speed_cutout = self.cutout_speed(cutout_limit)?.value;
        debug!(speed_rated, speed_cutout, "selected design speeds");
        Ok(DesignWind {
            energy: self,
            speed_rated,
            speed_cutout,
        })
    }

    // The second qualifying bin is taken, i.e. the first crossing plus one.
    fn speed_past_threshold(&self, limit: f64, what: &'static str) -> WindResult<f64> {
        ensure_fraction(limit, what)?;
        let crossing: Vec<usize> = self
            .energy_cdf_vector
            .iter()
            .enumerate()
            .filter(|(_, share)| **share > limit)
            .map(|(i, _)| i)
            .collect();

        match crossing.get(1) {
            Some(&index) => Ok(self.speed_vector()[index]),
            None => Err(WindError::ThresholdNotFound {
                what,
                limit,
                found: crossing.len(),
            }),
        }
    }
}

/// Wind resource with rated and cut-out speeds selected.
#[derive(Clone, Debug)]
pub struct DesignWind {
    energy: EnergyWind,
    speed_rated: f64,
    speed_cutout: f64,
}

impl Deref for DesignWind {
    type Target = EnergyWind;

    fn deref(&self) -> &EnergyWind {
        &self.energy
    }
}

impl DesignWind {
    pub fn speed_rated(&self) -> Velocity {
        mps(self.speed_rated)
    }

    pub fn speed_cutout(&self) -> Velocity {
        mps(self.speed_cutout)
    }
}
