// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface reconstruction by projection-based triangulation
//!
//! Points are projected onto the xy-plane, triangulated in 2D, and the
//! resulting index triples are attached to the original 3D points. The 2D
//! projection and the 3D point set share indexing, so no remapping happens.

use crate::error::{DegenerateReason, Error, Result};
use crate::triangulation::{DelaunayTriangulator, Triangulator};
use crate::{Mesh, PointSet};

/// Builds a triangle mesh over a point cloud.
#[derive(Debug, Clone, Default)]
pub struct SurfaceBuilder<T: Triangulator = DelaunayTriangulator> {
    triangulator: T,
}

impl SurfaceBuilder {
    /// Builder using Delaunay triangulation
    pub fn new() -> Self {
        Self {
            triangulator: DelaunayTriangulator,
        }
    }
}

impl<T: Triangulator> SurfaceBuilder<T> {
    /// Builder using a custom triangulation capability
    pub fn with_triangulator(triangulator: T) -> Self {
        Self { triangulator }
    }

    pub fn triangulator(&self) -> &T {
        &self.triangulator
    }

    /// Triangulate `points` and return the mesh over them.
    ///
    /// Fails with [`Error::DegenerateInput`] for fewer than 3 points or
    /// collinear input.
    pub fn build(&self, points: PointSet) -> Result<Mesh> {
        if points.len() < 3 {
            return Err(Error::DegenerateInput(DegenerateReason::TooFewPoints(
                points.len(),
            )));
        }

        let projected = points.project_xy();
        let triangles = self.triangulator.triangulate(&projected)?;

        tracing::debug!(
            points = points.len(),
            triangles = triangles.len(),
            "Surface triangulated"
        );

        Ok(Mesh::new(points, triangles)?)
    }
}

/// Build a Delaunay surface over `points`.
pub fn build_surface(points: PointSet) -> Result<Mesh> {
    SurfaceBuilder::new().build(points)
}
