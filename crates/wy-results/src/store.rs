//! On-disk run cache.
//!
//! Layout under the runs directory:
//!
//! ```text
//! <run_id>/manifest.json   scalar summary, written last
//! <run_id>/bins.jsonl      one BinRecord per line
//! .<run_id>.partial/       staging directory while a run is being written
//! ```
//!
//! A run is only visible once both files exist in its final directory. The
//! staging directory is renamed into place after both are flushed, so an
//! interrupted save never looks like a cached run.

use crate::types::{BinRecord, RunManifest};
use crate::{ResultsError, ResultsResult};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "manifest.json";
const BINS_FILE: &str = "bins.jsonl";

#[derive(Clone, Debug)]
pub struct RunStore {
    runs_dir: PathBuf,
}

impl RunStore {
    pub fn new(runs_dir: PathBuf) -> ResultsResult<Self> {
        fs::create_dir_all(&runs_dir)?;
        Ok(Self { runs_dir })
    }

    /// Store at `<project dir>/.windyield/runs`.
    pub fn for_project(project_path: &Path) -> ResultsResult<Self> {
        let project_dir = project_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: format!("{} has no parent directory", project_path.display()),
            })?;
        Self::new(project_dir.join(".windyield").join("runs"))
    }

    pub fn runs_dir(&self) -> &Path {
        &self.runs_dir
    }

    fn run_dir(&self, run_id: &str) -> PathBuf {
        self.runs_dir.join(run_id)
    }

    fn staging_dir(&self, run_id: &str) -> PathBuf {
        self.runs_dir.join(format!(".{run_id}.partial"))
    }

    /// True only for a complete run: manifest and bins both present.
    pub fn has_run(&self, run_id: &str) -> bool {
        let dir = self.run_dir(run_id);
        dir.join(MANIFEST_FILE).is_file() && dir.join(BINS_FILE).is_file()
    }

    /// Write a run, replacing any earlier or incomplete run with the same id.
    pub fn save_run(&self, manifest: &RunManifest, records: &[BinRecord]) -> ResultsResult<()> {
        let staging = self.staging_dir(&manifest.run_id);
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }
        fs::create_dir_all(&staging)?;

        let mut bins = BufWriter::new(File::create(staging.join(BINS_FILE))?);
        for record in records {
            serde_json::to_writer(&mut bins, record)?;
            bins.write_all(b"\n")?;
        }
        bins.flush()?;

        let mut manifest_out = BufWriter::new(File::create(staging.join(MANIFEST_FILE))?);
        serde_json::to_writer_pretty(&mut manifest_out, manifest)?;
        manifest_out.flush()?;

        let target = self.run_dir(&manifest.run_id);
        if target.exists() {
            fs::remove_dir_all(&target)?;
        }
        fs::rename(&staging, &target)?;
        Ok(())
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        self.require_run(run_id)?;
        let file = File::open(self.run_dir(run_id).join(MANIFEST_FILE))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn load_bins(&self, run_id: &str) -> ResultsResult<Vec<BinRecord>> {
        self.require_run(run_id)?;
        let content = fs::read_to_string(self.run_dir(run_id).join(BINS_FILE))?;
        serde_json::Deserializer::from_str(&content)
            .into_iter::<BinRecord>()
            .map(|record| record.map_err(ResultsError::from))
            .collect()
    }

    /// Complete runs, newest first. Staging and incomplete directories are
    /// skipped.
    pub fn list_runs(&self) -> ResultsResult<Vec<RunManifest>> {
        let mut manifests = Vec::new();
        for entry in fs::read_dir(&self.runs_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || !self.has_run(&name) {
                continue;
            }
            manifests.push(self.load_manifest(&name)?);
        }
        manifests.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(manifests)
    }

    pub fn delete_run(&self, run_id: &str) -> ResultsResult<()> {
        for dir in [self.run_dir(run_id), self.staging_dir(run_id)] {
            if dir.exists() {
                fs::remove_dir_all(dir)?;
            }
        }
        Ok(())
    }

    fn require_run(&self, run_id: &str) -> ResultsResult<()> {
        if self.has_run(run_id) {
            Ok(())
        } else {
            Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            })
        }
    }
}
