// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch orchestration over a directory of point files.
//!
//! Files are processed one at a time in lexicographic name order. A failure
//! in one file is recorded and the run continues; the run log is closed
//! once every file has been attempted.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use surfvol_geometry::{DelaunayTriangulator, SurfaceBuilder, Triangulator};

use crate::config::BatchConfig;
use crate::error::{Error, FailureKind, Result};
use crate::pipeline::{mesh_path_for, process_file, ProcessedFile};
use crate::run_log::{log_file_name, unix_timestamp, BatchLog, VolumeRecord};

/// A point file that could not be processed.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub file_name: String,
    pub kind: FailureKind,
    pub error: String,
}

/// Summary of a completed batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Unix timestamp the run started at (embedded in the log name).
    pub timestamp: u64,
    pub log_path: PathBuf,
    /// Records written to the log, in processing order.
    pub records: Vec<VolumeRecord>,
    pub failures: Vec<FileFailure>,
    /// Files whose mesh was overwritten by a later file with the same stem.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replaced_meshes: Vec<String>,
    pub elapsed_ms: u64,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.records.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Regular files in `dir`, sorted by file name.
///
/// Directory iteration order is not stable across filesystems, so the
/// listing is always sorted before use.
pub fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Append the record for a processed file to the run log.
///
/// A file only counts as processed once its record is in the log, so the
/// mesh is removed again when the append fails.
fn log_processed<W: Write>(
    log: &mut BatchLog<W>,
    file_name: &str,
    processed: &ProcessedFile,
) -> Result<VolumeRecord> {
    let record = VolumeRecord::new(file_name, processed.volume);
    if let Err(e) = log.append(&record) {
        if let Err(remove_err) = std::fs::remove_file(&processed.mesh_path) {
            tracing::warn!(
                mesh = %processed.mesh_path.display(),
                error = %remove_err,
                "Could not remove mesh of unlogged file"
            );
        }
        return Err(e);
    }
    Ok(record)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Drives every point file of a directory through the pipeline.
#[derive(Debug, Clone)]
pub struct BatchRunner<T: Triangulator = DelaunayTriangulator> {
    config: BatchConfig,
    builder: SurfaceBuilder<T>,
}

impl BatchRunner {
    pub fn new(config: BatchConfig) -> Self {
        Self {
            config,
            builder: SurfaceBuilder::new(),
        }
    }
}

impl<T: Triangulator> BatchRunner<T> {
    /// Runner using a custom surface builder
    pub fn with_builder(config: BatchConfig, builder: SurfaceBuilder<T>) -> Self {
        Self { config, builder }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Run the batch, naming the log after the current time.
    pub fn run(&self) -> Result<BatchReport> {
        self.run_at(unix_timestamp())
    }

    /// Run the batch with an explicit start timestamp.
    ///
    /// Returns `Err` only when the run cannot start: the input directory is
    /// missing or unreadable, or the output/log directories cannot be
    /// prepared. Per-file failures end up in [`BatchReport::failures`].
    pub fn run_at(&self, timestamp: u64) -> Result<BatchReport> {
        let started = Instant::now();
        let config = &self.config;

        if !config.input_dir.is_dir() {
            return Err(Error::InvalidInputDir {
                path: config.input_dir.clone(),
                reason: "not a directory".into(),
            });
        }
        let files = list_input_files(&config.input_dir).map_err(|e| match e {
            Error::Io { path, source } => Error::InvalidInputDir {
                path,
                reason: source.to_string(),
            },
            other => other,
        })?;

        std::fs::create_dir_all(&config.output_dir)
            .map_err(|e| Error::io(&config.output_dir, e))?;
        std::fs::create_dir_all(&config.log_dir).map_err(|e| Error::io(&config.log_dir, e))?;

        let log_name = log_file_name(&config.log_template, &config.log_placeholder, timestamp);
        let mut log = BatchLog::create(config.log_dir.join(log_name))?;

        tracing::info!(
            input_dir = %config.input_dir.display(),
            output_dir = %config.output_dir.display(),
            log = %log.path().display(),
            files = files.len(),
            "Starting batch"
        );

        let mut records = Vec::with_capacity(files.len());
        let mut failures = Vec::new();
        let mut replaced_meshes = Vec::new();
        // Mesh path -> file that produced it
        let mut written_meshes: HashMap<PathBuf, String> = HashMap::new();

        for input in &files {
            let file_name = display_name(input);
            let mesh_path = mesh_path_for(input, &config.output_dir, &config.mesh_extension);

            let outcome = process_file(input, &mesh_path, &self.builder).and_then(|processed| {
                let record = log_processed(&mut log, &file_name, &processed)?;
                Ok((processed, record))
            });

            match outcome {
                Ok((processed, record)) => {
                    tracing::info!(
                        file = %file_name,
                        points = processed.points,
                        triangles = processed.triangles,
                        volume = processed.volume,
                        mesh = %processed.mesh_path.display(),
                        "Processed file"
                    );
                    if let Some(previous) = written_meshes.insert(mesh_path, file_name) {
                        tracing::warn!(
                            file = %record.file_name,
                            replaced = %previous,
                            mesh = %processed.mesh_path.display(),
                            "Mesh of an earlier file was overwritten"
                        );
                        replaced_meshes.push(previous);
                    }
                    records.push(record);
                }
                Err(e) => {
                    tracing::error!(file = %file_name, error = %e, "Failed to process file");
                    failures.push(FileFailure {
                        file_name,
                        kind: e.kind(),
                        error: e.to_string(),
                    });
                }
            }
        }

        let log_path = log.path().to_path_buf();
        if let Err(e) = log.finish() {
            tracing::error!(log = %log_path.display(), error = %e, "Failed to close run log");
        }
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        tracing::info!(
            processed = records.len(),
            failed = failures.len(),
            log = %log_path.display(),
            elapsed_ms = elapsed_ms,
            "Batch complete"
        );

        Ok(BatchReport {
            timestamp,
            log_path,
            records,
            failures,
            replaced_meshes,
            elapsed_ms,
        })
    }
}

/// Run a batch with Delaunay triangulation.
pub fn run_batch(config: BatchConfig) -> Result<BatchReport> {
    BatchRunner::new(config).run()
}
