//! Shared application service layer for windyield.
//!
//! Centralizes project loading, running the yield assessment, caching runs,
//! querying per-bin results and rendering the text report, so frontends
//! stay thin.

pub mod error;
pub mod project_service;
pub mod query;
pub mod report;
pub mod run_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use project_service::{load_project, save_project, validate_project};
pub use query::{export_csv, extract_bin_series};
pub use report::render_report;
pub use run_service::{
    bin_records, ensure_run, list_runs, load_run, run_assessment, summarize, RunOptions,
    RunRequest, RunResponse, MODEL_VERSION,
};
