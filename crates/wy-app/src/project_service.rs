//! Project loading, saving and validation.

use std::path::Path;
use wy_project::{Project, ProjectError};

use crate::error::{AppError, AppResult};

/// Load and validate a project from a `.json`, `.yaml` or `.yml` file.
pub fn load_project(path: &Path) -> AppResult<Project> {
    wy_project::load(path).map_err(|e| match e {
        ProjectError::Io(source) => AppError::ProjectFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    wy_project::save(path, project)?;
    Ok(())
}

pub fn validate_project(project: &Project) -> AppResult<()> {
    wy_project::validate_project(project).map_err(|e| AppError::Validation(e.to_string()))
}
