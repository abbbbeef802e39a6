//! Turbine performance: rated power, cut-in speed, clipped power curve and
//! annual energy production.
//!
//! ## Model
//!
//! Ideal power at speed `u` through the swept area `A`:
//!
//! ```text
//! P(u) = 0.5 * rho * A * u^3 * Cp * eta
//! ```
//!
//! The power curve is `P(u)` clipped by three independent masks evaluated
//! against the unclipped curve, applied in order: below cut-in → 0, ideal
//! power at or above rated → rated, at or above cut-out → 0. The last mask
//! wins where they overlap.
//!
//! ## Stages
//!
//! ```text
//! Turbine -> RatedTurbine -> CutInTurbine -> PowerCurve -> DeratedTurbine -> EnergyYield
//! ```
//!
//! Every stage dereferences to the one before it.

use std::f64::consts::PI;
use std::ops::Deref;

use tracing::debug;
use wy_core::numeric::{ensure_finite, ensure_fraction, ensure_positive, ensure_same_len};
use wy_core::units::{m2, mps, w, wh, Area, Density, Energy, Length, Power, Velocity};

use crate::error::{WindError, WindResult};

/// Rotor geometry and conversion efficiencies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurbineSpec {
    pub diameter: Length,
    pub hub_height: Length,
    /// Power coefficient (0 < Cp <= 1)
    pub cp: f64,
    /// Drivetrain efficiency (0 < eta <= 1)
    pub drivetrain_efficiency: f64,
    /// Fraction of the period the turbine is unavailable (0 <= d < 1)
    pub downtime_fraction: f64,
}

/// Turbine with its swept area, evaluated on a fixed speed grid.
#[derive(Clone, Debug)]
pub struct Turbine {
    spec: TurbineSpec,
    air_density: f64,
    area: f64,
    speed_vector: Vec<f64>,
}

impl Turbine {
    /// Create a turbine on the wind resource's speed grid.
    ///
    /// # Errors
    /// Returns a domain error if any parameter is out of physical bounds.
    pub fn new(spec: TurbineSpec, speed_vector: Vec<f64>, air_density: Density) -> WindResult<Self> {
        let diameter = ensure_positive(spec.diameter.value, "rotor diameter")?;
        ensure_positive(spec.hub_height.value, "hub height")?;
        ensure_positive(air_density.value, "air density")?;
        if !(spec.cp > 0.0 && spec.cp <= 1.0) {
            return Err(WindError::Domain {
                what: "power coefficient must be in (0,1]",
                value: spec.cp,
            });
        }
        if !(spec.drivetrain_efficiency > 0.0 && spec.drivetrain_efficiency <= 1.0) {
            return Err(WindError::Domain {
                what: "drivetrain efficiency must be in (0,1]",
                value: spec.drivetrain_efficiency,
            });
        }
        if !(spec.downtime_fraction >= 0.0 && spec.downtime_fraction < 1.0) {
            return Err(WindError::Domain {
                what: "downtime fraction must be in [0,1)",
                value: spec.downtime_fraction,
            });
        }
        if speed_vector.is_empty() {
            return Err(WindError::Precondition {
                what: "turbine needs a non-empty speed grid".to_string(),
            });
        }

        Ok(Self {
            spec,
            air_density: air_density.value,
            area: PI * (diameter / 2.0).powi(2),
            speed_vector,
        })
    }

    pub fn spec(&self) -> &TurbineSpec {
        &self.spec
    }

    /// Swept area π·(D/2)².
    pub fn area(&self) -> Area {
        m2(self.area)
    }

    pub fn height(&self) -> Length {
        self.spec.hub_height
    }

    pub fn diameter(&self) -> Length {
        self.spec.diameter
    }

    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    pub fn speed_vector(&self) -> &[f64] {
        &self.speed_vector
    }

    /// Combined rotor and drivetrain efficiency.
    pub fn conversion_efficiency(&self) -> f64 {
        self.spec.cp * self.spec.drivetrain_efficiency
    }

    /// Unclipped electrical power at speed `u` (W).
    pub fn ideal_power(&self, u: f64) -> f64 {
        0.5 * self.air_density * self.area * u.powi(3) * self.conversion_efficiency()
    }

    /// Scale a per-bin wind power vector by Cp and drivetrain efficiency.
    pub fn turbine_power_distribution(&self, wind_power: &[f64]) -> WindResult<Vec<f64>> {
        ensure_same_len(self.speed_vector.len(), wind_power.len(), "wind power distribution")?;
        let eff = self.conversion_efficiency();
        Ok(wind_power.iter().map(|p| p * eff).collect())
    }

    /// Rated power is the ideal power at `rated_speed`.
    pub fn calculate_rated_power(self, rated_speed: Velocity) -> WindResult<RatedTurbine> {
        let u = ensure_finite(rated_speed.value, "rated speed")?;
        if u < 0.0 {
            return Err(WindError::Domain {
                what: "rated speed must be non-negative",
                value: u,
            });
        }
        let rated_power = self.ideal_power(u);
        debug!(rated_power, rated_speed = u, "computed rated power");
        Ok(RatedTurbine {
            turbine: self,
            rated_power,
        })
    }
}

/// Turbine with a rated power.
#[derive(Clone, Debug)]
pub struct RatedTurbine {
    turbine: Turbine,
    rated_power: f64,
}

impl Deref for RatedTurbine {
    type Target = Turbine;

    fn deref(&self) -> &Turbine {
        &self.turbine
    }
}

impl RatedTurbine {
    pub fn rated_power(&self) -> Power {
        w(self.rated_power)
    }

    /// Speed at which ideal power reaches `cutin_limit` of rated power.
    ///
    /// ```text
    /// u_in = (2 * limit * P_rated / (rho * A * Cp * eta))^(1/3)
    /// ```
    pub fn cutin_speed(self, cutin_limit: f64) -> WindResult<CutInTurbine> {
        ensure_fraction(cutin_limit, "cut-in limit")?;
        let speed_cutin = (2.0 * cutin_limit * self.rated_power
            / (self.air_density() * self.area().value * self.conversion_efficiency()))
        .cbrt();
        debug!(speed_cutin, "computed cut-in speed");
        Ok(CutInTurbine {
            rated: self,
            speed_cutin,
        })
    }
}

/// Rated turbine with a cut-in speed.
#[derive(Clone, Debug)]
pub struct CutInTurbine {
    rated: RatedTurbine,
    speed_cutin: f64,
}

impl Deref for CutInTurbine {
    type Target = RatedTurbine;

    fn deref(&self) -> &RatedTurbine {
        &self.rated
    }
}

impl CutInTurbine {
    pub fn speed_cutin(&self) -> Velocity {
        mps(self.speed_cutin)
    }

    /// Build the clipped power curve over the speed grid.
    pub fn power_curve(self, speed_cutout: Velocity, speed_rated: Velocity) -> WindResult<PowerCurve> {
        let speed_cutout = ensure_positive(speed_cutout.value, "cut-out speed")?;
        let speed_rated = ensure_finite(speed_rated.value, "rated speed")?;
        let rated_power = self.rated_power;

        let power_curve_vector = self
            .speed_vector()
            .iter()
            .map(|&u| {
                let ideal = self.ideal_power(u);
                let mut p = ideal;
                if u < self.speed_cutin {
                    p = 0.0;
                }
                if ideal >= rated_power {
                    p = rated_power;
                }
                if u >= speed_cutout {
                    p = 0.0;
                }
                p
            })
            .collect();

        Ok(PowerCurve {
            cutin: self,
            speed_rated,
            speed_cutout,
            power_curve_vector,
        })
    }
}

/// Clipped power curve with its design speeds.
#[derive(Clone, Debug)]
pub struct PowerCurve {
    cutin: CutInTurbine,
    speed_rated: f64,
    speed_cutout: f64,
    power_curve_vector: Vec<f64>,
}

impl Deref for PowerCurve {
    type Target = CutInTurbine;

    fn deref(&self) -> &CutInTurbine {
        &self.cutin
    }
}

impl PowerCurve {
    pub fn speed_rated(&self) -> Velocity {
        mps(self.speed_rated)
    }

    pub fn speed_cutout(&self) -> Velocity {
        mps(self.speed_cutout)
    }

    /// Electrical power per speed bin (W).
    pub fn power_curve_vector(&self) -> &[f64] {
        &self.power_curve_vector
    }

    /// Reduce the wind resource's hours per bin by the downtime fraction.
    pub fn hourly_distribution_downtime(
        self,
        hour_distribution: &[f64],
    ) -> WindResult<DeratedTurbine> {
        ensure_same_len(
            self.speed_vector().len(),
            hour_distribution.len(),
            "hour distribution",
        )?;
        let availability = 1.0 - self.spec().downtime_fraction;
        let hourly_distribution_downtime_vector =
            hour_distribution.iter().map(|t| t * availability).collect();
        Ok(DeratedTurbine {
            curve: self,
            hourly_distribution_vector: hour_distribution.to_vec(),
            hourly_distribution_downtime_vector,
        })
    }
}

/// Power curve with available operating hours per bin.
#[derive(Clone, Debug)]
pub struct DeratedTurbine {
    curve: PowerCurve,
    hourly_distribution_vector: Vec<f64>,
    hourly_distribution_downtime_vector: Vec<f64>,
}

impl Deref for DeratedTurbine {
    type Target = PowerCurve;

    fn deref(&self) -> &PowerCurve {
        &self.curve
    }
}

impl DeratedTurbine {
    /// Hours per bin before downtime (h).
    pub fn hourly_distribution_vector(&self) -> &[f64] {
        &self.hourly_distribution_vector
    }

    /// Hours per bin after downtime (h).
    pub fn hourly_distribution_downtime_vector(&self) -> &[f64] {
        &self.hourly_distribution_downtime_vector
    }

    /// Energy per bin and its total.
    pub fn energy(self) -> EnergyYield {
        let energy_vector: Vec<f64> = self
            .power_curve_vector()
            .iter()
            .zip(&self.hourly_distribution_downtime_vector)
            .map(|(p, t)| p * t)
            .collect();
        let energy_production = energy_vector.iter().sum();
        debug!(energy_production_wh = energy_production, "integrated energy production");
        EnergyYield {
            derated: self,
            energy_vector,
            energy_production,
        }
    }
}

/// Average power per bin and over the whole period.
#[derive(Clone, Debug, PartialEq)]
pub struct AveragePower {
    /// Energy over calendar hours per bin, zero where a bin has no hours (W)
    pub average_power_vector: Vec<f64>,
    pub average_power_value: Power,
}

/// Energy produced per bin over the period.
#[derive(Clone, Debug)]
pub struct EnergyYield {
    derated: DeratedTurbine,
    energy_vector: Vec<f64>,
    energy_production: f64,
}

impl Deref for EnergyYield {
    type Target = DeratedTurbine;

    fn deref(&self) -> &DeratedTurbine {
        &self.derated
    }
}

impl EnergyYield {
    /// Energy per bin (Wh).
    pub fn energy_vector(&self) -> &[f64] {
        &self.energy_vector
    }

    pub fn energy_production(&self) -> Energy {
        wh(self.energy_production)
    }

    /// Total energy in watt-hours.
    pub fn energy_production_wh(&self) -> f64 {
        self.energy_production
    }

    /// # Errors
    /// `DivisionByZero` when the period has no hours at all.
    pub fn average_power(&self) -> WindResult<AveragePower> {
        let total_hours: f64 = self.hourly_distribution_vector().iter().sum();
        if total_hours == 0.0 {
            return Err(WindError::DivisionByZero {
                what: "average power over zero total hours",
            });
        }
        let average_power_vector = self
            .energy_vector
            .iter()
            .zip(self.hourly_distribution_vector())
            .map(|(e, t)| if *t != 0.0 { e / t } else { 0.0 })
            .collect();
        Ok(AveragePower {
            average_power_vector,
            average_power_value: w(self.energy_production / total_hours),
        })
    }

    /// Equivalent hours at rated power per bin (h).
    ///
    /// # Errors
    /// `DivisionByZero` when rated power is zero.
    pub fn full_load_hours(&self) -> WindResult<Vec<f64>> {
        let rated = self.rated_power().value;
        if rated == 0.0 {
            return Err(WindError::DivisionByZero {
                what: "full-load hours with zero rated power",
            });
        }
        Ok(self.energy_vector.iter().map(|e| e / rated).collect())
    }
}
