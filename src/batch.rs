//! Directory sweeps. Every snapshot is independent, so files are mapped in
//! parallel; the file list is sorted by name first and rayon preserves that
//! order in the collected output, keeping result tables deterministic.

use crate::io::table::{InteractionRecord, RmseRecord};
use crate::io::{shifts, xyz};
use crate::probe::{self, ProbeConfig};
use crate::shift::{self, Reference};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to list directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Read(#[from] crate::io::Error),

    #[error(transparent)]
    Probe(#[from] probe::Error),
}

/// A file that failed to process; the sweep continues past it.
#[derive(Debug)]
pub struct Failure {
    pub file: String,
    pub error: Error,
}

#[derive(Debug)]
pub struct BatchOutcome<T> {
    pub records: Vec<T>,
    pub failures: Vec<Failure>,
}

impl<T> BatchOutcome<T> {
    pub fn processed(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Lists `dir` entries with the given extension, sorted by file name.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, Error> {
    let entries = std::fs::read_dir(dir).map_err(|source| Error::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Classifies every `.xyz` snapshot under `dir`. A failing file is recorded
/// and skipped, never aborting the sweep. `on_file` fires once per finished
/// file (for progress display).
pub fn sweep_snapshots<F>(
    dir: &Path,
    config: &ProbeConfig,
    on_file: F,
) -> Result<BatchOutcome<InteractionRecord>, Error>
where
    F: Fn(&Path) + Sync,
{
    let files = list_files(dir, "xyz")?;
    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            let result = classify_one(path, config);
            on_file(path);
            (path, result)
        })
        .collect();

    Ok(partition(results))
}

fn classify_one(path: &Path, config: &ProbeConfig) -> Result<InteractionRecord, Error> {
    let snapshot = xyz::read_file(path)?;
    let report = probe::probe(&snapshot, config)?;
    Ok(report.into_record(display_name(path)))
}

/// Scores every shift-prediction `.csv` under `dir` against the experimental
/// reference. Row identifiers are the file stems with `strip_suffix`
/// removed, so they line up with the snapshot stems of the hydrogen-bond
/// table.
pub fn sweep_predictions<F>(
    dir: &Path,
    reference: &Reference,
    strip_suffix: &str,
    on_file: F,
) -> Result<BatchOutcome<RmseRecord>, Error>
where
    F: Fn(&Path) + Sync,
{
    let files = list_files(dir, "csv")?;
    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            let result = score_one(path, reference, strip_suffix);
            on_file(path);
            (path, result)
        })
        .collect();

    Ok(partition(results))
}

fn score_one(path: &Path, reference: &Reference, strip_suffix: &str) -> Result<RmseRecord, Error> {
    let predictions = shifts::read_predictions_file(path)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| display_name(path));
    let key = stem.strip_suffix(strip_suffix).unwrap_or(&stem).to_string();
    Ok(shift::summarize(key, reference, &predictions))
}

fn partition<T>(results: Vec<(&PathBuf, Result<T, Error>)>) -> BatchOutcome<T> {
    let mut outcome = BatchOutcome {
        records: Vec::with_capacity(results.len()),
        failures: Vec::new(),
    };

    for (path, result) in results {
        match result {
            Ok(record) => outcome.records.push(record),
            Err(error) => {
                let file = display_name(path);
                log::warn!("{}: {}", file, error);
                outcome.failures.push(Failure { file, error });
            }
        }
    }

    outcome
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
