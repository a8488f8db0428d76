// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D triangulation of projected point sets
//!
//! The [`Triangulator`] trait is the seam to the triangulation capability.
//! [`DelaunayTriangulator`] wraps the `delaunator` crate.

use crate::error::{DegenerateReason, Error, Result};
use crate::{Point2, Triangle};

/// A 2D triangulation capability.
///
/// Implementations receive the xy-projection of a point set and return index
/// triples into that same slice. Output contract:
///
/// - every triangle is counter-clockwise in the xy-plane
/// - triangles satisfy the Delaunay empty-circumcircle property
/// - ties between cocircular points are broken deterministically
/// - fewer than 3 points, all points collinear, or input the
///   implementation cannot triangulate is [`Error::DegenerateInput`]
///
/// Implementations must be safe to call from several threads at once.
pub trait Triangulator: Send + Sync {
    fn triangulate(&self, points: &[Point2<f64>]) -> Result<Vec<Triangle>>;
}

/// Twice the signed area of triangle (a, b, c); positive when counter-clockwise.
#[inline]
pub fn orient_2d(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Check whether every point lies on a single line (or coincides).
///
/// Offsets from the first point are scaled by a power of two close to their
/// largest component before the exact orientation test. The scaling is
/// exact, so very small or very large coordinates neither underflow nor
/// overflow the test.
pub fn all_collinear(points: &[Point2<f64>]) -> bool {
    let Some(origin) = points.first() else {
        return true;
    };
    let scale = points
        .iter()
        .map(|p| (p.x - origin.x).abs().max((p.y - origin.y).abs()))
        .fold(0.0, f64::max);
    if scale == 0.0 {
        // All points coincide
        return true;
    }
    if !scale.is_finite() {
        return false;
    }
    let exponent = (scale.log2().floor() as i32).clamp(-1000, 1000);
    let factor = 2.0_f64.powi(-exponent);

    let normalized: Vec<Point2<f64>> = points
        .iter()
        .map(|p| Point2::new((p.x - origin.x) * factor, (p.y - origin.y) * factor))
        .collect();
    let zero = Point2::origin();
    let Some(direction) = normalized.iter().find(|p| **p != zero) else {
        return true;
    };

    normalized
        .iter()
        .all(|p| orient_2d(&zero, direction, p) == 0.0)
}

/// Reorder a triangle so that it winds counter-clockwise.
///
/// Zero-area triangles are returned unchanged.
#[inline]
pub fn ensure_ccw(tri: Triangle, points: &[Point2<f64>]) -> Triangle {
    let [a, b, c] = tri;
    if orient_2d(&points[a], &points[b], &points[c]) < 0.0 {
        [a, c, b]
    } else {
        tri
    }
}

fn check_input(points: &[Point2<f64>]) -> Result<()> {
    if points.len() < 3 {
        return Err(Error::DegenerateInput(DegenerateReason::TooFewPoints(
            points.len(),
        )));
    }
    if all_collinear(points) {
        return Err(Error::DegenerateInput(DegenerateReason::Collinear));
    }
    Ok(())
}

/// Delaunay triangulation backed by `delaunator`.
///
/// Duplicate points are not referenced by any output triangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaunayTriangulator;

impl DelaunayTriangulator {
    pub fn new() -> Self {
        Self
    }
}

impl Triangulator for DelaunayTriangulator {
    fn triangulate(&self, points: &[Point2<f64>]) -> Result<Vec<Triangle>> {
        check_input(points)?;

        let coords: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();

        let triangulation = delaunator::triangulate(&coords);

        if triangulation.triangles.is_empty() {
            return Err(Error::DegenerateInput(
                DegenerateReason::TriangulationFailed,
            ));
        }

        let triangles: Vec<Triangle> = triangulation
            .triangles
            .chunks_exact(3)
            .map(|t| ensure_ccw([t[0], t[1], t[2]], points))
            .collect();

        tracing::trace!(
            points = points.len(),
            triangles = triangles.len(),
            hull = triangulation.hull.len(),
            "Delaunay triangulation complete"
        );

        Ok(triangles)
    }
}
