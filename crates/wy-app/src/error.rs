//! Error types for the application layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to frontends.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read project file: {path}")]
    ProjectFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Model error: {0}")]
    Model(#[from] wy_wind::WindError),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wy-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<wy_project::ProjectError> for AppError {
    fn from(err: wy_project::ProjectError) -> Self {
        match err {
            wy_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<wy_results::ResultsError> for AppError {
    fn from(err: wy_results::ResultsError) -> Self {
        match err {
            wy_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}
