//! Running assessments and managing the run cache.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};
use wy_project::Project;
use wy_results::{AssessmentSummary, BinRecord, RunManifest, RunStore, compute_run_id};
use wy_wind::{Assessment, assess};

use crate::error::AppResult;
use crate::project_service;

/// Version stamped into run ids so a model change invalidates the cache.
pub const MODEL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub model_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            model_version: MODEL_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunRequest<'a> {
    pub project_path: &'a Path,
    pub options: RunOptions,
}

#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub loaded_from_cache: bool,
    pub elapsed_s: f64,
}

/// Run the full pipeline for a validated project.
pub fn run_assessment(project: &Project) -> AppResult<Assessment> {
    Ok(assess(&project.assessment_inputs())?)
}

/// Scalar outputs of an assessment.
pub fn summarize(assessment: &Assessment) -> AssessmentSummary {
    let wind = &assessment.wind;
    let turbine = &assessment.turbine;
    let tower = &assessment.tower;
    AssessmentSummary {
        hub_speed_mps: wind.hub_speed().value,
        weibull_k: wind.shape_k(),
        weibull_c_mps: wind.scale_c(),
        swept_area_m2: turbine.area().value,
        hub_height_m: turbine.height().value,
        rated_power_w: turbine.rated_power().value,
        speed_cutin_mps: turbine.speed_cutin().value,
        speed_rated_mps: turbine.speed_rated().value,
        speed_cutout_mps: turbine.speed_cutout().value,
        energy_production_wh: turbine.energy_production_wh(),
        full_load_hours: assessment.full_load_hours(),
        average_power_w: assessment.average_power.average_power_value.value,
        tower_diameter_m: tower.tower_diameter.value,
        thickness_gravity_m: tower.thickness_gravity.value,
        thickness_aerodynamic_m: tower.thickness_aerodynamic.value,
        thickness_extreme_wind_m: tower.thickness_extreme_wind.value,
    }
}

/// One record per speed bin.
pub fn bin_records(assessment: &Assessment) -> Vec<BinRecord> {
    let wind = &assessment.wind;
    let turbine = &assessment.turbine;
    (0..wind.speed_vector().len())
        .map(|i| BinRecord {
            speed_mps: wind.speed_vector()[i],
            probability: wind.speed_probability_vector()[i],
            hours: wind.hour_distribution_vector()[i],
            energy_density_wh_m2: wind.energy_distribution_vector()[i],
            energy_cdf: wind.energy_cdf_vector()[i],
            wind_power_w: assessment.wind_power_distribution_vector[i],
            turbine_power_w: assessment.turbine_power_distribution_vector[i],
            power_curve_w: turbine.power_curve_vector()[i],
            derated_hours: turbine.hourly_distribution_downtime_vector()[i],
            energy_wh: turbine.energy_vector()[i],
            average_power_w: assessment.average_power.average_power_vector[i],
            full_load_hours: assessment.full_load_hours_vector[i],
            available_wind_energy_wh: assessment.available_wind_energy_vector[i],
        })
        .collect()
}

/// Run the assessment for a project file, reusing a cached run with the same
/// inputs unless caching is disabled.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    let started = Instant::now();

    let project = project_service::load_project(request.project_path)?;
    let run_id = compute_run_id(&project, &request.options.model_version)?;
    let store = RunStore::for_project(request.project_path)?;

    if request.options.use_cache && store.has_run(&run_id) {
        let manifest = store.load_manifest(&run_id)?;
        info!(run_id = %run_id, "loaded cached run");
        return Ok(RunResponse {
            run_id,
            manifest,
            loaded_from_cache: true,
            elapsed_s: started.elapsed().as_secs_f64(),
        });
    }

    let assessment = run_assessment(&project)?;
    let manifest = RunManifest::new(
        run_id.clone(),
        project.name.clone(),
        request.options.model_version.clone(),
        summarize(&assessment),
    );
    let records = bin_records(&assessment);
    store.save_run(&manifest, &records)?;
    debug!(run_id = %run_id, bins = records.len(), "saved run");

    Ok(RunResponse {
        run_id,
        manifest,
        loaded_from_cache: false,
        elapsed_s: started.elapsed().as_secs_f64(),
    })
}

pub fn list_runs(project_path: &Path) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_project(project_path)?;
    Ok(store.list_runs()?)
}

pub fn load_run(project_path: &Path, run_id: &str) -> AppResult<(RunManifest, Vec<BinRecord>)> {
    let store = RunStore::for_project(project_path)?;
    let manifest = store.load_manifest(run_id)?;
    let records = store.load_bins(run_id)?;
    Ok((manifest, records))
}
