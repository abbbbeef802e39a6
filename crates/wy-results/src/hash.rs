//! Content-based hashing for run IDs.

use sha2::{Digest, Sha256};
use wy_project::Project;

use crate::ResultsResult;

/// SHA-256 over the project's JSON form and the model version.
pub fn compute_run_id(project: &Project, model_version: &str) -> ResultsResult<String> {
    let project_json = serde_json::to_vec(project)?;

    let mut hasher = Sha256::new();
    hasher.update(&project_json);
    hasher.update(model_version.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
