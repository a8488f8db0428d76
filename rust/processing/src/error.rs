// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the batch pipeline.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Result type for batch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the batch pipeline.
///
/// Everything except [`Error::InvalidInputDir`] and failures to prepare the
/// output locations is file-local: the batch records it and moves on.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] surfvol_core::Error),

    #[error(transparent)]
    Geometry(#[from] surfvol_geometry::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input directory {}: {reason}", path.display())]
    InvalidInputDir { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Failure category of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::Core(surfvol_core::Error::Parse { .. }) => FailureKind::Parse,
            Error::Core(surfvol_core::Error::MeshFormat { .. })
            | Error::Core(surfvol_core::Error::InvalidIndex { .. }) => FailureKind::MeshFormat,
            Error::Core(surfvol_core::Error::Io { .. }) | Error::Io { .. } => FailureKind::Io,
            Error::Geometry(surfvol_geometry::Error::DegenerateInput(_)) => {
                FailureKind::DegenerateInput
            }
            Error::Geometry(surfvol_geometry::Error::CoreError(inner)) => match inner {
                surfvol_core::Error::Parse { .. } => FailureKind::Parse,
                surfvol_core::Error::Io { .. } => FailureKind::Io,
                _ => FailureKind::MeshFormat,
            },
            Error::InvalidInputDir { .. } => FailureKind::Io,
        }
    }
}

/// Failure categories reported per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Malformed point line
    Parse,
    /// Fewer than 3 points, or collinear points
    DegenerateInput,
    /// Unparsable field in a mesh line
    MeshFormat,
    /// File open/read/write failure
    Io,
}
