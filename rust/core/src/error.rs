// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for point file loading and mesh encoding/decoding.

use std::path::PathBuf;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading point files or mesh files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A point line did not hold exactly three numeric fields.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A recognised mesh line held an unparsable or out-of-range field.
    #[error("mesh line {line}: {reason}")]
    MeshFormat { line: usize, reason: String },

    /// A triangle referenced a point outside the point set.
    #[error("triangle {triangle} references point {index}, but only {len} points exist")]
    InvalidIndex {
        triangle: usize,
        index: usize,
        len: usize,
    },

    /// Opening, reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Error::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn mesh_format(line: usize, reason: impl Into<String>) -> Self {
        Error::MeshFormat {
            line,
            reason: reason.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
