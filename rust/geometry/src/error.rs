// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a point set cannot be triangulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// Fewer than three points were given
    TooFewPoints(usize),
    /// All points lie on one line in the xy-plane
    Collinear,
    /// The triangulator produced no triangles for non-collinear input,
    /// e.g. coordinates too extreme for floating-point predicates
    TriangulationFailed,
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateReason::TooFewPoints(n) => {
                write!(f, "need at least 3 points to triangulate, got {}", n)
            }
            DegenerateReason::Collinear => write!(f, "all points are collinear in the xy-plane"),
            DegenerateReason::TriangulationFailed => {
                write!(f, "triangulation produced no triangles")
            }
        }
    }
}

/// Errors that can occur during surface reconstruction
#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate input: {0}")]
    DegenerateInput(DegenerateReason),

    #[error("Core error: {0}")]
    CoreError(#[from] surfvol_core::Error),
}
