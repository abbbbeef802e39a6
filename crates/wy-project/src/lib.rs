//! wy-project: project file format, validation, and conversion into model
//! inputs.

pub mod lenient;
pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_project};

/// Highest project file version this build understands.
pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported project file extension: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encodings of a project file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFormat {
    Json,
    Yaml,
}

impl ProjectFormat {
    pub fn from_path(path: &std::path::Path) -> ProjectResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ProjectError::UnsupportedFormat { extension }),
        }
    }
}

/// Load a project, picking the parser from the file extension.
pub fn load(path: &std::path::Path) -> ProjectResult<Project> {
    match ProjectFormat::from_path(path)? {
        ProjectFormat::Json => load_json(path),
        ProjectFormat::Yaml => load_yaml(path),
    }
}

/// Save a project, picking the encoding from the file extension.
pub fn save(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    match ProjectFormat::from_path(path)? {
        ProjectFormat::Json => save_json(path, project),
        ProjectFormat::Yaml => save_yaml(path, project),
    }
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_yaml::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_yaml(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_json::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_json(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_json::to_string_pretty(project)?;
    std::fs::write(path, content)?;
    Ok(())
}
