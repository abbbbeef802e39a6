use std::path::PathBuf;
use wy_app::*;

fn project_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

const PROJECT_JSON: &str = r#"{
    "name": "Persistence test",
    "k_factor": 2.0,
    "avg_u_speed": 6.5,
    "avg_u_height": 10.0,
    "z0": 30.0,
    "down_time": 2.0,
    "turbine_diameter": 90.0,
    "hub_height": 90.0,
    "cp": 0.42,
    "dt_efficiency": 0.92
}"#;

#[test]
fn second_run_comes_from_cache() {
    let dir = project_dir("wy_app_cache_test");
    let path = dir.join("project.json");
    std::fs::write(&path, PROJECT_JSON).unwrap();

    let request = RunRequest {
        project_path: &path,
        options: RunOptions::default(),
    };

    let first = ensure_run(&request).unwrap();
    assert!(!first.loaded_from_cache);

    let second = ensure_run(&request).unwrap();
    assert!(second.loaded_from_cache);
    assert_eq!(first.run_id, second.run_id);
    let e1 = first.manifest.summary.energy_production_wh;
    let e2 = second.manifest.summary.energy_production_wh;
    assert!((e1 - e2).abs() <= 1e-9 * e1);

    let runs = list_runs(&path).unwrap();
    assert_eq!(runs.len(), 1);

    let (manifest, bins) = load_run(&path, &first.run_id).unwrap();
    assert_eq!(manifest.project_name, "Persistence test");
    assert_eq!(bins.len(), 30);

    let series = extract_bin_series(&bins, "power_curve").unwrap();
    let peak = series.iter().map(|(_, p)| *p).fold(0.0, f64::max);
    assert_eq!(peak, manifest.summary.rated_power_w);

    let wind = extract_bin_series(&bins, "wind_power").unwrap();
    let turbine = extract_bin_series(&bins, "turbine_power").unwrap();
    for ((_, pw), (_, pt)) in wind.iter().zip(&turbine) {
        assert!((pt - pw * 0.42 * 0.92).abs() <= 1e-9 * pw.max(1.0));
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn run_missing_bins_is_recomputed() {
    let dir = project_dir("wy_app_missing_bins");
    let path = dir.join("project.json");
    std::fs::write(&path, PROJECT_JSON).unwrap();
    let request = RunRequest {
        project_path: &path,
        options: RunOptions::default(),
    };

    let first = ensure_run(&request).unwrap();
    let bins_path = dir
        .join(".windyield")
        .join("runs")
        .join(&first.run_id)
        .join("bins.jsonl");
    std::fs::remove_file(&bins_path).unwrap();

    let second = ensure_run(&request).unwrap();
    assert!(!second.loaded_from_cache);
    assert_eq!(first.run_id, second.run_id);

    let (_, bins) = load_run(&path, &second.run_id).unwrap();
    assert_eq!(bins.len(), 30);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn no_cache_reruns() {
    let dir = project_dir("wy_app_no_cache_test");
    let path = dir.join("project.json");
    std::fs::write(&path, PROJECT_JSON).unwrap();

    let request = RunRequest {
        project_path: &path,
        options: RunOptions {
            use_cache: false,
            ..RunOptions::default()
        },
    };
    ensure_run(&request).unwrap();
    let again = ensure_run(&request).unwrap();
    assert!(!again.loaded_from_cache);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn changed_inputs_change_run_id() {
    let dir = project_dir("wy_app_changed_inputs");
    let path = dir.join("project.json");
    std::fs::write(&path, PROJECT_JSON).unwrap();
    let request = RunRequest {
        project_path: &path,
        options: RunOptions::default(),
    };
    let first = ensure_run(&request).unwrap();

    std::fs::write(&path, PROJECT_JSON.replace("\"cp\": 0.42", "\"cp\": 0.45")).unwrap();
    let second = ensure_run(&request).unwrap();
    assert_ne!(first.run_id, second.run_id);
    assert!(!second.loaded_from_cache);
    assert!(second.manifest.summary.rated_power_w > first.manifest.summary.rated_power_w);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_run_is_not_found() {
    let dir = project_dir("wy_app_unknown_run");
    let path = dir.join("project.json");
    std::fs::write(&path, PROJECT_JSON).unwrap();
    assert!(matches!(
        load_run(&path, "deadbeef"),
        Err(AppError::RunNotFound(_))
    ));
    let _ = std::fs::remove_dir_all(&dir);
}
