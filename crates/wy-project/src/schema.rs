//! Project schema definitions.
//!
//! Site and turbine fields are flat and keep the units engineers write them
//! in: roughness length in millimetres and downtime in percent.

use serde::{Deserialize, Serialize};
use wy_core::units::{m, mm, mps};
use wy_wind::{AssessmentInputs, DesignConfig, TowerConfig, TurbineSpec, WindSite};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_name")]
    pub name: String,
    /// Weibull shape factor
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub k_factor: f64,
    /// Mean wind speed at the measurement height (m/s)
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub avg_u_speed: f64,
    /// Measurement height (m)
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub avg_u_height: f64,
    /// Surface roughness length (mm)
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub z0: f64,
    /// Turbine unavailability (%)
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub down_time: f64,
    /// Rotor diameter (m)
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub turbine_diameter: f64,
    /// Hub height (m)
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub hub_height: f64,
    /// Power coefficient
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub cp: f64,
    /// Drivetrain efficiency
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub dt_efficiency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<DesignDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tower: Option<TowerDef>,
}

fn default_version() -> u32 {
    crate::LATEST_VERSION
}

fn default_name() -> String {
    "Wind turbine".to_string()
}

/// Overrides for [`DesignConfig`]; missing fields keep the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DesignDef {
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub speed_step: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub speed_max: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub hours_per_period: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub cutin_limit: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub rated_limit: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub cutout_limit: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub air_density: Option<f64>,
}

/// Overrides for [`TowerConfig`]; stress is given in MPa.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TowerDef {
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_stress_mpa: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub diameter_ratio: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub nacelle_specific_mass: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub solidity: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_coefficient: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub thrust_coefficient: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub steel_density: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub extreme_wind_speed: Option<f64>,
}

impl Project {
    pub fn design_config(&self) -> DesignConfig {
        let base = DesignConfig::default();
        let Some(def) = &self.design else {
            return base;
        };
        DesignConfig {
            speed_step: def.speed_step.unwrap_or(base.speed_step),
            speed_max: def.speed_max.unwrap_or(base.speed_max),
            hours_per_period: def.hours_per_period.unwrap_or(base.hours_per_period),
            cutin_limit: def.cutin_limit.unwrap_or(base.cutin_limit),
            rated_limit: def.rated_limit.unwrap_or(base.rated_limit),
            cutout_limit: def.cutout_limit.unwrap_or(base.cutout_limit),
            air_density: def.air_density.unwrap_or(base.air_density),
        }
    }

    pub fn tower_config(&self) -> TowerConfig {
        let base = TowerConfig::default();
        let Some(def) = &self.tower else {
            return base;
        };
        TowerConfig {
            allowed_stress: def
                .allowed_stress_mpa
                .map(|v| v * 1.0e6)
                .unwrap_or(base.allowed_stress),
            diameter_ratio: def.diameter_ratio.unwrap_or(base.diameter_ratio),
            nacelle_specific_mass: def
                .nacelle_specific_mass
                .unwrap_or(base.nacelle_specific_mass),
            solidity: def.solidity.unwrap_or(base.solidity),
            drag_coefficient: def.drag_coefficient.unwrap_or(base.drag_coefficient),
            thrust_coefficient: def.thrust_coefficient.unwrap_or(base.thrust_coefficient),
            steel_density: def.steel_density.unwrap_or(base.steel_density),
            gravity: base.gravity,
            extreme_wind_speed: def.extreme_wind_speed.unwrap_or(base.extreme_wind_speed),
        }
    }

    /// Roughness length in metres.
    pub fn roughness_length_m(&self) -> f64 {
        self.z0 / 1000.0
    }

    /// Downtime as a fraction of the period.
    pub fn downtime_fraction(&self) -> f64 {
        self.down_time / 100.0
    }

    pub fn assessment_inputs(&self) -> AssessmentInputs {
        AssessmentInputs {
            site: WindSite {
                reference_speed: mps(self.avg_u_speed),
                reference_height: m(self.avg_u_height),
            },
            roughness_length: mm(self.z0),
            shape_k: self.k_factor,
            turbine: TurbineSpec {
                diameter: m(self.turbine_diameter),
                hub_height: m(self.hub_height),
                cp: self.cp,
                drivetrain_efficiency: self.dt_efficiency,
                downtime_fraction: self.downtime_fraction(),
            },
            design: self.design_config(),
            tower: self.tower_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> &'static str {
        r#"{
            "k_factor": "2",
            "avg_u_speed": 6.0,
            "avg_u_height": 10,
            "z0": 50,
            "down_time": 3,
            "turbine_diameter": 80,
            "hub_height": 80,
            "cp": 0.4,
            "dt_efficiency": 0.9
        }"#
    }

    #[test]
    fn defaults_fill_in() {
        let project: Project = serde_json::from_str(minimal_json()).unwrap();
        assert_eq!(project.version, crate::LATEST_VERSION);
        assert_eq!(project.k_factor, 2.0);
        assert_eq!(project.design_config(), DesignConfig::default());
        assert_eq!(project.tower_config(), TowerConfig::default());
    }

    #[test]
    fn unit_conversions() {
        let project: Project = serde_json::from_str(minimal_json()).unwrap();
        assert!((project.roughness_length_m() - 0.05).abs() < 1e-15);
        assert!((project.downtime_fraction() - 0.03).abs() < 1e-15);
        let inputs = project.assessment_inputs();
        assert!((inputs.roughness_length.value - 0.05).abs() < 1e-15);
        assert!((inputs.turbine.downtime_fraction - 0.03).abs() < 1e-15);
    }

    #[test]
    fn partial_overrides() {
        let mut project: Project = serde_json::from_str(minimal_json()).unwrap();
        project.design = Some(DesignDef {
            rated_limit: Some(0.4),
            ..DesignDef::default()
        });
        project.tower = Some(TowerDef {
            allowed_stress_mpa: Some(200.0),
            ..TowerDef::default()
        });
        let design = project.design_config();
        assert_eq!(design.rated_limit, 0.4);
        assert_eq!(design.cutout_limit, DesignConfig::default().cutout_limit);
        assert_eq!(project.tower_config().allowed_stress, 200.0e6);
    }

    #[test]
    fn missing_required_field_fails() {
        let json = r#"{ "k_factor": 2.0 }"#;
        assert!(serde_json::from_str::<Project>(json).is_err());
    }
}
