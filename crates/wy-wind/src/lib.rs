//! wy-wind: wind resource and turbine yield model.
//!
//! Builds a Weibull wind-speed distribution at hub height, derives the energy
//! distribution and its CDF, picks rated and cut-out speeds from that CDF,
//! synthesizes a clipped power curve and integrates annual energy with a
//! downtime derating. A closed-form tower sizing step sits on top.
//!
//! # Example
//!
//! ```no_run
//! use wy_core::units::{m, mm, mps};
//! use wy_wind::{assess, AssessmentInputs, DesignConfig, TowerConfig, TurbineSpec, WindSite};
//!
//! let inputs = AssessmentInputs {
//!     site: WindSite { reference_speed: mps(6.0), reference_height: m(10.0) },
//!     roughness_length: mm(50.0),
//!     shape_k: 2.0,
//!     turbine: TurbineSpec {
//!         diameter: m(80.0),
//!         hub_height: m(80.0),
//!         cp: 0.4,
//!         drivetrain_efficiency: 0.9,
//!         downtime_fraction: 0.03,
//!     },
//!     design: DesignConfig::default(),
//!     tower: TowerConfig::default(),
//! };
//!
//! let result = assess(&inputs).unwrap();
//! println!("AEP: {:.2} MWh", result.turbine.energy_production_wh() / 1.0e6);
//! ```

pub mod assessment;
pub mod config;
pub mod cumulative;
pub mod error;
pub mod resource;
pub mod tower;
pub mod turbine;
pub mod weibull;

// Re-exports
pub use assessment::{assess, Assessment, AssessmentInputs};
pub use config::{speed_grid, DesignConfig, TowerConfig, MAX_SPEED_BINS};
pub use cumulative::cumulative_share;
pub use error::{WindError, WindResult};
pub use resource::{
    log_wind_profile, DesignWind, EnergyWind, HourlyWind, HubWind, WeibullWind, WindResource,
    WindSite,
};
pub use tower::{size_tower, TowerSizing};
pub use turbine::{
    AveragePower, CutInTurbine, DeratedTurbine, EnergyYield, PowerCurve, RatedTurbine, Turbine,
    TurbineSpec,
};
pub use weibull::{gamma, weibull_cdf, weibull_pdf, weibull_scale, Weibull};
