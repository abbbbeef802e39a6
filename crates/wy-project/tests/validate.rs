use wy_project::*;

fn base_project() -> Project {
    Project {
        version: 1,
        name: "Coastal site".to_string(),
        k_factor: 2.0,
        avg_u_speed: 6.0,
        avg_u_height: 10.0,
        z0: 50.0,
        down_time: 3.0,
        turbine_diameter: 80.0,
        hub_height: 80.0,
        cp: 0.4,
        dt_efficiency: 0.9,
        design: None,
        tower: None,
    }
}

#[test]
fn base_project_validates() {
    validate_project(&base_project()).expect("base project should validate");
}

#[test]
fn future_version_rejected() {
    let mut project = base_project();
    project.version = LATEST_VERSION + 1;
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::UnsupportedVersion { .. })
    ));
}

#[test]
fn out_of_range_fields_rejected() {
    let cases: [(&str, fn(&mut Project)); 7] = [
        ("k_factor", |p: &mut Project| p.k_factor = 0.0),
        ("avg_u_speed", |p: &mut Project| p.avg_u_speed = -1.0),
        ("z0", |p: &mut Project| p.z0 = 0.0),
        ("cp", |p: &mut Project| p.cp = 1.5),
        ("dt_efficiency", |p: &mut Project| p.dt_efficiency = f64::NAN),
        ("down_time", |p: &mut Project| p.down_time = 100.0),
        ("hub_height", |p: &mut Project| p.hub_height = 0.01),
    ];

    for (field, mutate) in cases {
        let mut project = base_project();
        mutate(&mut project);
        match validate_project(&project) {
            Err(ValidationError::InvalidValue { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected {field} to be rejected, got {other:?}"),
        }
    }
}

#[test]
fn measurement_height_below_roughness_rejected() {
    let mut project = base_project();
    // 2 m roughness above a 1 m mast
    project.z0 = 2000.0;
    project.avg_u_height = 1.0;
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::InvalidValue { .. })
    ));
}

#[test]
fn short_tower_under_large_rotor_accepted() {
    let mut project = base_project();
    project.hub_height = 30.0;
    validate_project(&project).expect("hub height below the rotor radius is allowed");
}

#[test]
fn oversized_speed_grid_rejected() {
    let mut project = base_project();
    project.design = Some(DesignDef {
        speed_step: Some(1e-9),
        ..DesignDef::default()
    });
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::InvalidDesign { .. })
    ));
}

#[test]
fn inverted_design_limits_rejected() {
    let mut project = base_project();
    project.design = Some(DesignDef {
        rated_limit: Some(0.9),
        cutout_limit: Some(0.5),
        ..DesignDef::default()
    });
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::InvalidDesign { .. })
    ));
}

#[test]
fn bad_tower_override_rejected() {
    let mut project = base_project();
    project.tower = Some(TowerDef {
        solidity: Some(-0.1),
        ..TowerDef::default()
    });
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::InvalidDesign { .. })
    ));
}
