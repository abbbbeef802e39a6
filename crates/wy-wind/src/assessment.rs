//! End-to-end yield assessment for one turbine at one site.

use tracing::info;
use wy_core::units::{kgpm3, Length};

use crate::config::{DesignConfig, TowerConfig};
use crate::error::WindResult;
use crate::resource::{DesignWind, WindResource, WindSite};
use crate::tower::{size_tower, TowerSizing};
use crate::turbine::{AveragePower, EnergyYield, Turbine, TurbineSpec};

/// Everything a run needs, fixed for its whole lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct AssessmentInputs {
    pub site: WindSite,
    pub roughness_length: Length,
    /// Weibull shape factor of the site
    pub shape_k: f64,
    pub turbine: TurbineSpec,
    pub design: DesignConfig,
    pub tower: TowerConfig,
}

/// Results of a full assessment.
#[derive(Clone, Debug)]
pub struct Assessment {
    pub wind: DesignWind,
    pub turbine: EnergyYield,
    /// Expected wind power through the rotor per bin (W)
    pub wind_power_distribution_vector: Vec<f64>,
    /// Wind power after Cp and drivetrain losses per bin (W)
    pub turbine_power_distribution_vector: Vec<f64>,
    pub average_power: AveragePower,
    /// Equivalent hours at rated power per bin (h)
    pub full_load_hours_vector: Vec<f64>,
    /// Wind energy through the swept area per bin (Wh)
    pub available_wind_energy_vector: Vec<f64>,
    pub tower: TowerSizing,
}

impl Assessment {
    pub fn full_load_hours(&self) -> f64 {
        self.full_load_hours_vector.iter().sum()
    }
}

/// Run the wind resource and turbine stages in dependency order, then size
/// the tower.
pub fn assess(inputs: &AssessmentInputs) -> WindResult<Assessment> {
    let design = &inputs.design;

    let wind = WindResource::new(inputs.site, design)?
        .wind_profile(inputs.turbine.hub_height, inputs.roughness_length)?
        .weibull(inputs.shape_k)?
        .hourly_distribution(design.hours_per_period)?
        .energy_density_distribution()?
        .design_speeds(design.rated_limit, design.cutout_limit)?;

    let turbine = Turbine::new(
        inputs.turbine,
        wind.speed_vector().to_vec(),
        kgpm3(design.air_density),
    )?;
    let wind_power_distribution_vector = wind.wind_power_distribution(turbine.area())?;

    let rated = turbine.calculate_rated_power(wind.speed_rated())?;
    let turbine_power_distribution_vector =
        rated.turbine_power_distribution(&wind_power_distribution_vector)?;

    let curve = rated
        .cutin_speed(design.cutin_limit)?
        .power_curve(wind.speed_cutout(), wind.speed_rated())?;
    let tower = size_tower(&curve, &inputs.tower)?;

    let turbine = curve
        .hourly_distribution_downtime(wind.hour_distribution_vector())?
        .energy();
    let average_power = turbine.average_power()?;
    let full_load_hours_vector = turbine.full_load_hours()?;

    let area = turbine.area().value;
    let available_wind_energy_vector = wind
        .energy_distribution_vector()
        .iter()
        .map(|e| e * area)
        .collect();

    info!(
        hub_speed = wind.hub_speed().value,
        rated_power_w = turbine.rated_power().value,
        energy_wh = turbine.energy_production_wh(),
        "assessment complete"
    );

    Ok(Assessment {
        wind,
        turbine,
        wind_power_distribution_vector,
        turbine_power_distribution_vector,
        average_power,
        full_load_hours_vector,
        available_wind_energy_vector,
        tower,
    })
}
