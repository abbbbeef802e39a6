//! Design constants for a single assessment run.

use crate::error::{WindError, WindResult};
use wy_core::numeric::{ensure_fraction, ensure_positive};
use wy_core::units::constants::{AIR_DENSITY_KGPM3, G_MPS2, YEAR_HOURS};

/// Largest speed grid accepted, in bins.
pub const MAX_SPEED_BINS: usize = 10_000;

/// Immutable design thresholds and physical constants.
///
/// `Default` gives the conventional values: 1 m/s bins up to 30 m/s, a
/// Julian year, and cut-in/rated/cut-out limits of 1%, 1/3 and 80%.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignConfig {
    /// Bin width of the speed grid (m/s)
    pub speed_step: f64,
    /// Exclusive upper bound of the speed grid (m/s)
    pub speed_max: f64,
    /// Hours in the period the yield is integrated over
    pub hours_per_period: f64,
    /// Fraction of rated power at which the turbine starts producing
    pub cutin_limit: f64,
    /// Share of annual wind energy below the rated speed
    pub rated_limit: f64,
    /// Share of annual wind energy below the cut-out speed
    pub cutout_limit: f64,
    /// Air density (kg/m³)
    pub air_density: f64,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            speed_step: 1.0,
            speed_max: 30.0,
            hours_per_period: YEAR_HOURS,
            cutin_limit: 1.0 / 100.0,
            rated_limit: 1.0 / 3.0,
            cutout_limit: 8.0 / 10.0,
            air_density: AIR_DENSITY_KGPM3,
        }
    }
}

impl DesignConfig {
    pub fn validate(&self) -> WindResult<()> {
        ensure_positive(self.speed_step, "speed step")?;
        ensure_positive(self.speed_max, "speed grid upper bound")?;
        if self.speed_step >= self.speed_max {
            return Err(WindError::Domain {
                what: "speed step must be smaller than the speed grid upper bound",
                value: self.speed_step,
            });
        }
        bin_count(self.speed_step, self.speed_max)?;
        ensure_positive(self.hours_per_period, "hours per period")?;
        ensure_positive(self.air_density, "air density")?;
        ensure_fraction(self.cutin_limit, "cut-in limit")?;
        ensure_fraction(self.rated_limit, "rated limit")?;
        ensure_fraction(self.cutout_limit, "cut-out limit")?;
        if self.rated_limit >= self.cutout_limit {
            return Err(WindError::Domain {
                what: "rated limit must be below the cut-out limit",
                value: self.rated_limit,
            });
        }
        Ok(())
    }

    /// Speed bin centers `i * step` for `i < ceil(max / step)`.
    pub fn speed_vector(&self) -> WindResult<Vec<f64>> {
        speed_grid(self.speed_step, self.speed_max)
    }
}

/// Evenly spaced speed grid starting at zero, upper bound excluded.
pub fn speed_grid(step: f64, max: f64) -> WindResult<Vec<f64>> {
    let bins = bin_count(step, max)?;
    Ok((0..bins).map(|i| i as f64 * step).collect())
}

fn bin_count(step: f64, max: f64) -> WindResult<usize> {
    ensure_positive(step, "speed step")?;
    ensure_positive(max, "speed grid upper bound")?;
    let bins = (max / step).ceil();
    if bins > MAX_SPEED_BINS as f64 {
        return Err(WindError::Domain {
            what: "speed grid has too many bins",
            value: bins,
        });
    }
    Ok(bins as usize)
}

/// First-order tower sizing constants.
#[derive(Clone, Debug, PartialEq)]
pub struct TowerConfig {
    /// Allowed steel stress (Pa)
    pub allowed_stress: f64,
    /// Tower base diameter as a fraction of hub height
    pub diameter_ratio: f64,
    /// Nacelle mass per kW of rated power (kg/kW)
    pub nacelle_specific_mass: f64,
    /// Projected blade area over swept area
    pub solidity: f64,
    /// Drag coefficient of the parked rotor
    pub drag_coefficient: f64,
    /// Thrust coefficient of the operating rotor
    pub thrust_coefficient: f64,
    /// Steel density (kg/m³)
    pub steel_density: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Extreme gust speed for the parked case (m/s)
    pub extreme_wind_speed: f64,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            allowed_stress: 160.0e6,
            diameter_ratio: 1.0 / 20.0,
            nacelle_specific_mass: 40.0,
            solidity: 0.03,
            drag_coefficient: 1.5,
            thrust_coefficient: 8.0 / 9.0,
            steel_density: 7850.0,
            gravity: G_MPS2,
            // IEC class II reference
            extreme_wind_speed: 60.0,
        }
    }
}

impl TowerConfig {
    pub fn validate(&self) -> WindResult<()> {
        ensure_positive(self.allowed_stress, "allowed stress")?;
        ensure_positive(self.diameter_ratio, "tower diameter ratio")?;
        ensure_positive(self.nacelle_specific_mass, "nacelle specific mass")?;
        ensure_positive(self.solidity, "rotor solidity")?;
        ensure_positive(self.drag_coefficient, "drag coefficient")?;
        ensure_positive(self.thrust_coefficient, "thrust coefficient")?;
        ensure_positive(self.steel_density, "steel density")?;
        ensure_positive(self.gravity, "gravity")?;
        ensure_positive(self.extreme_wind_speed, "extreme wind speed")?;
        Ok(())
    }
}
