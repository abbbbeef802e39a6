//! First-order tower wall thickness from closed-form bending.
//!
//! The tower is a thin-walled steel tube of diameter `D = ratio * H`. Three
//! load cases each give a required wall thickness:
//!
//! ```text
//! gravity:     t = m_nacelle * g / (2πR * (σ - H * rho_steel * g))
//! operating:   F = 0.5 * Ct * rho * A * u_rated^2
//! parked:      F = 0.5 * Cd * rho * solidity * A * u_extreme^2
//! bending:     t = 2 * F * H / (σ * π * R^2)
//! ```

use std::f64::consts::PI;

use tracing::debug;
use wy_core::units::{kg, m, Length, Mass};

use crate::config::TowerConfig;
use crate::error::{WindError, WindResult};
use crate::turbine::PowerCurve;

/// Required wall thickness per load case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerSizing {
    pub tower_diameter: Length,
    pub nacelle_mass: Mass,
    pub thickness_gravity: Length,
    pub thickness_aerodynamic: Length,
    pub thickness_extreme_wind: Length,
}

impl TowerSizing {
    /// The thickest of the three load cases.
    pub fn governing_thickness(&self) -> Length {
        let t = self
            .thickness_gravity
            .value
            .max(self.thickness_aerodynamic.value)
            .max(self.thickness_extreme_wind.value);
        m(t)
    }
}

/// Size the tower under `turbine` using its rated power, rated speed,
/// swept area and hub height.
///
/// # Errors
/// Domain error when the tower cannot carry its own weight at the allowed
/// stress.
pub fn size_tower(turbine: &PowerCurve, config: &TowerConfig) -> WindResult<TowerSizing> {
    config.validate()?;

    let height = turbine.height().value;
    let area = turbine.area().value;
    let rho = turbine.air_density();
    let radius = height * config.diameter_ratio / 2.0;
    let sigma = config.allowed_stress;

    let nacelle_mass = config.nacelle_specific_mass * turbine.rated_power().value / 1000.0;
    let self_weight_stress = height * config.steel_density * config.gravity;
    if self_weight_stress >= sigma {
        return Err(WindError::Domain {
            what: "tower self-weight stress exceeds allowed stress",
            value: self_weight_stress,
        });
    }
    let thickness_gravity =
        (1.0 / (2.0 * PI * radius)) * (nacelle_mass * config.gravity / (sigma - self_weight_stress));

    let bending_thickness = |force: f64| 2.0 * force * height / (sigma * PI * radius.powi(2));

    let force_aerodynamic =
        0.5 * config.thrust_coefficient * rho * area * turbine.speed_rated().value.powi(2);
    let force_extreme = 0.5
        * config.drag_coefficient
        * rho
        * config.solidity
        * area
        * config.extreme_wind_speed.powi(2);

    let sizing = TowerSizing {
        tower_diameter: m(2.0 * radius),
        nacelle_mass: kg(nacelle_mass),
        thickness_gravity: m(thickness_gravity),
        thickness_aerodynamic: m(bending_thickness(force_aerodynamic)),
        thickness_extreme_wind: m(bending_thickness(force_extreme)),
    };
    debug!(
        gravity_m = sizing.thickness_gravity.value,
        aerodynamic_m = sizing.thickness_aerodynamic.value,
        extreme_m = sizing.thickness_extreme_wind.value,
        "sized tower wall"
    );
    Ok(sizing)
}
