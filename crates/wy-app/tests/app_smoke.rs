//! Smoke test for the wy-app service layer.

use std::path::PathBuf;
use wy_app::{load_project, render_report, run_assessment, summarize, validate_project};

fn reference_project_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("projects");
    path.push("reference.json");
    path
}

#[test]
fn test_load_reference_project() {
    let path = reference_project_path();
    if !path.exists() {
        eprintln!("Skipping test: reference project not found at {:?}", path);
        return;
    }

    let project = load_project(&path).expect("Failed to load project");
    validate_project(&project).expect("Validation should succeed");

    let assessment = run_assessment(&project).expect("assessment should run");
    let summary = summarize(&assessment);
    assert!(summary.speed_cutin_mps < summary.speed_rated_mps);
    assert!(summary.speed_rated_mps < summary.speed_cutout_mps);
    assert!(summary.energy_production_wh > 0.0);

    let report = render_report(&project.name, &summary);
    assert!(report.contains("One year energy production"));
}

#[test]
fn missing_project_is_read_error() {
    let err = load_project(std::path::Path::new("/nonexistent/windyield/site.json")).unwrap_err();
    assert!(matches!(err, wy_app::AppError::ProjectFileRead { .. }));
}
