use std::path::PathBuf;
use wy_project::*;

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("wy_project_roundtrip");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn sample() -> Project {
    Project {
        version: 1,
        name: "Ridge".to_string(),
        k_factor: 2.2,
        avg_u_speed: 7.1,
        avg_u_height: 10.0,
        z0: 30.0,
        down_time: 2.5,
        turbine_diameter: 90.0,
        hub_height: 95.0,
        cp: 0.42,
        dt_efficiency: 0.92,
        design: Some(DesignDef {
            speed_step: Some(0.5),
            ..DesignDef::default()
        }),
        tower: None,
    }
}

#[test]
fn json_roundtrip() {
    let path = temp_path("ridge.json");
    save(&path, &sample()).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn yaml_roundtrip() {
    let path = temp_path("ridge.yaml");
    save(&path, &sample()).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn string_numbers_load() {
    let path = temp_path("strings.json");
    std::fs::write(
        &path,
        r#"{
            "k_factor": "2",
            "avg_u_speed": "6",
            "avg_u_height": "10",
            "z0": "50",
            "down_time": "3",
            "turbine_diameter": "80",
            "hub_height": "80",
            "cp": "0.4",
            "dt_efficiency": "0.9"
        }"#,
    )
    .unwrap();
    let project = load(&path).unwrap();
    assert_eq!(project.turbine_diameter, 80.0);
    assert_eq!(project.cp, 0.4);
}

#[test]
fn invalid_project_not_saved() {
    let path = temp_path("invalid.json");
    let _ = std::fs::remove_file(&path);
    let mut project = sample();
    project.cp = 0.0;
    assert!(matches!(
        save(&path, &project),
        Err(ProjectError::Validation(_))
    ));
    assert!(!path.exists());
}

#[test]
fn reference_projects_load() {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates
    dir.pop(); // repo root
    dir.push("projects");

    for name in ["reference.json", "reference.yaml"] {
        let path = dir.join(name);
        if !path.exists() {
            eprintln!("Skipping: reference project not found at {:?}", path);
            continue;
        }
        let project = load(&path).expect("reference project should load");
        assert_eq!(project.k_factor, 2.0);
    }
}
