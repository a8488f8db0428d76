// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run log: a CSV file with one volume record per processed point file.
//!
//! ```text
//! Filename,Volume
//! hill.csv,0.9981627
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::error::{Error, Result};

/// Header line of every run log.
pub const LOG_HEADER: &str = "Filename,Volume";

/// Volume computed for one source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeRecord {
    pub file_name: String,
    pub volume: f64,
}

impl VolumeRecord {
    pub fn new(file_name: impl Into<String>, volume: f64) -> Self {
        Self {
            file_name: file_name.into(),
            volume,
        }
    }

    /// CSV line for this record, without trailing newline.
    pub fn to_csv_line(&self) -> String {
        format!("{},{}", csv_field(&self.file_name), self.volume)
    }
}

/// Quote a CSV field when it holds a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Current UTC time as whole seconds since the Unix epoch.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Build a run log file name from a template.
///
/// Every occurrence of `placeholder` is replaced by `timestamp`. A template
/// without the placeholder gets `_<timestamp>` inserted before its extension.
pub fn log_file_name(template: &str, placeholder: &str, timestamp: u64) -> String {
    let ts = timestamp.to_string();
    if !placeholder.is_empty() && template.contains(placeholder) {
        return template.replace(placeholder, &ts);
    }

    match template.rfind('.') {
        Some(dot) if dot > 0 => format!("{}_{}{}", &template[..dot], ts, &template[dot..]),
        _ => format!("{}_{}", template, ts),
    }
}

/// An open run log.
///
/// The header is written on creation, so a run where every file fails
/// still leaves a valid, empty log behind.
#[derive(Debug)]
pub struct BatchLog<W: Write = BufWriter<File>> {
    path: PathBuf,
    writer: W,
    records: usize,
}

impl BatchLog {
    /// Create (or truncate) the log at `path` and write its header.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
        Self::from_writer(path, BufWriter::new(file))
    }
}

impl<W: Write> BatchLog<W> {
    /// Wrap an already opened writer; `path` is only used for reporting.
    pub fn from_writer(path: impl Into<PathBuf>, mut writer: W) -> Result<Self> {
        let path = path.into();
        writeln!(writer, "{}", LOG_HEADER).map_err(|e| Error::io(&path, e))?;
        writer.flush().map_err(|e| Error::io(&path, e))?;

        tracing::debug!(path = %path.display(), "Created run log");

        Ok(Self {
            path,
            writer,
            records: 0,
        })
    }

    /// Append one record and flush it to disk.
    pub fn append(&mut self, record: &VolumeRecord) -> Result<()> {
        writeln!(self.writer, "{}", record.to_csv_line())
            .and_then(|_| self.writer.flush())
            .map_err(|e| Error::io(&self.path, e))?;
        self.records += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records appended so far.
    pub fn record_count(&self) -> usize {
        self.records
    }

    /// Flush and close the log, returning its path.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush().map_err(|e| Error::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), records = self.records, "Closed run log");
        Ok(self.path)
    }
}
