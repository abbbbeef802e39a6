//! Result data types.

use serde::{Deserialize, Serialize};

use crate::{ResultsError, ResultsResult};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub project_name: String,
    pub timestamp: String,
    pub model_version: String,
    pub summary: AssessmentSummary,
}

impl RunManifest {
    /// Manifest stamped with the current UTC time.
    pub fn new(
        run_id: RunId,
        project_name: String,
        model_version: String,
        summary: AssessmentSummary,
    ) -> Self {
        Self {
            run_id,
            project_name,
            timestamp: chrono::Utc::now().to_rfc3339(),
            model_version,
            summary,
        }
    }
}

/// Scalar outputs of an assessment, SI units unless the name says otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentSummary {
    pub hub_speed_mps: f64,
    pub weibull_k: f64,
    pub weibull_c_mps: f64,
    pub swept_area_m2: f64,
    pub hub_height_m: f64,
    pub rated_power_w: f64,
    pub speed_cutin_mps: f64,
    pub speed_rated_mps: f64,
    pub speed_cutout_mps: f64,
    pub energy_production_wh: f64,
    pub full_load_hours: f64,
    pub average_power_w: f64,
    pub tower_diameter_m: f64,
    pub thickness_gravity_m: f64,
    pub thickness_aerodynamic_m: f64,
    pub thickness_extreme_wind_m: f64,
}

/// One speed bin of an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BinRecord {
    pub speed_mps: f64,
    pub probability: f64,
    pub hours: f64,
    pub energy_density_wh_m2: f64,
    pub energy_cdf: f64,
    pub wind_power_w: f64,
    pub turbine_power_w: f64,
    pub power_curve_w: f64,
    pub derated_hours: f64,
    pub energy_wh: f64,
    pub average_power_w: f64,
    pub full_load_hours: f64,
    pub available_wind_energy_wh: f64,
}

/// Per-bin columns that can be exported.
pub const BIN_COLUMNS: [&str; 12] = [
    "probability",
    "hours",
    "energy_density",
    "energy_cdf",
    "wind_power",
    "turbine_power",
    "power_curve",
    "derated_hours",
    "energy",
    "average_power",
    "full_load_hours",
    "available_wind_energy",
];

impl BinRecord {
    pub fn column(&self, name: &str) -> ResultsResult<f64> {
        let value = match name {
            "probability" => self.probability,
            "hours" => self.hours,
            "energy_density" => self.energy_density_wh_m2,
            "energy_cdf" => self.energy_cdf,
            "wind_power" => self.wind_power_w,
            "turbine_power" => self.turbine_power_w,
            "power_curve" => self.power_curve_w,
            "derated_hours" => self.derated_hours,
            "energy" => self.energy_wh,
            "average_power" => self.average_power_w,
            "full_load_hours" => self.full_load_hours,
            "available_wind_energy" => self.available_wind_energy_wh,
            _ => {
                return Err(ResultsError::UnknownColumn {
                    name: name.to_string(),
                });
            }
        };
        Ok(value)
    }
}

/// `(speed, value)` pairs for one column.
pub fn extract_column(records: &[BinRecord], name: &str) -> ResultsResult<Vec<(f64, f64)>> {
    records
        .iter()
        .map(|r| Ok((r.speed_mps, r.column(name)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(speed: f64) -> BinRecord {
        BinRecord {
            speed_mps: speed,
            probability: 0.1,
            hours: 876.6,
            energy_density_wh_m2: 1.0,
            energy_cdf: 0.5,
            wind_power_w: 2.0,
            turbine_power_w: 0.7,
            power_curve_w: 3.0,
            derated_hours: 850.0,
            energy_wh: 4.0,
            average_power_w: 5.0,
            full_load_hours: 6.0,
            available_wind_energy_wh: 7.0,
        }
    }

    #[test]
    fn every_listed_column_resolves() {
        let r = record(1.0);
        for name in BIN_COLUMNS {
            assert!(r.column(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn unknown_column_rejected() {
        assert!(matches!(
            record(1.0).column("torque"),
            Err(ResultsError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn extract_pairs_speed_with_value() {
        let series = extract_column(&[record(0.0), record(1.0)], "energy").unwrap();
        assert_eq!(series, vec![(0.0, 4.0), (1.0, 4.0)]);
    }
}
