//! Project validation logic.

use crate::schema::Project;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid design settings: {reason}")]
    InvalidDesign { reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn require_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

fn require_unit_interval(field: &str, value: f64) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be in (0, 1]"))
    }
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    require_positive("k_factor", project.k_factor)?;
    require_positive("avg_u_speed", project.avg_u_speed)?;
    require_positive("avg_u_height", project.avg_u_height)?;
    require_positive("z0", project.z0)?;
    require_positive("turbine_diameter", project.turbine_diameter)?;
    require_positive("hub_height", project.hub_height)?;
    require_unit_interval("cp", project.cp)?;
    require_unit_interval("dt_efficiency", project.dt_efficiency)?;

    require_finite("down_time", project.down_time)?;
    if !(0.0..100.0).contains(&project.down_time) {
        return Err(invalid(
            "down_time",
            project.down_time,
            "must be in [0, 100) percent",
        ));
    }

    let z0_m = project.roughness_length_m();
    if project.avg_u_height <= z0_m {
        return Err(invalid(
            "avg_u_height",
            project.avg_u_height,
            "must be above the roughness length",
        ));
    }
    if project.hub_height <= z0_m {
        return Err(invalid(
            "hub_height",
            project.hub_height,
            "must be above the roughness length",
        ));
    }

    project
        .design_config()
        .validate()
        .map_err(|e| ValidationError::InvalidDesign {
            reason: e.to_string(),
        })?;
    project
        .tower_config()
        .validate()
        .map_err(|e| ValidationError::InvalidDesign {
            reason: e.to_string(),
        })?;

    Ok(())
}
