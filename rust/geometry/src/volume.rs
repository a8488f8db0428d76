// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume between a triangulated surface and the z = 0 plane
//!
//! Each triangle contributes the volume of the prism below it: its signed
//! xy-area times the mean height of its vertices,
//!
//! ```text
//! signed_area = ((x2-x1)(y3-y1) - (x3-x1)(y2-y1)) / 2
//! volume      = (z1 + z2 + z3) * signed_area / 3
//! ```
//!
//! The sign follows vertex winding: counter-clockwise triangles above the
//! plane are positive. Winding is taken as given; nothing here re-orients
//! triangles.

use crate::{Mesh, Point3};

/// Signed area of the triangle's projection onto the xy-plane.
///
/// Positive = counter-clockwise, Negative = clockwise
#[inline]
pub fn signed_area_xy(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> f64 {
    ((p2.x - p1.x) * (p3.y - p1.y) - (p3.x - p1.x) * (p2.y - p1.y)) / 2.0
}

/// Signed volume between one triangle and the z = 0 plane.
#[inline]
pub fn volume_under_triangle(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> f64 {
    (p1.z + p2.z + p3.z) * signed_area_xy(p1, p2, p3) / 3.0
}

/// Total signed volume under a mesh. A mesh without triangles yields 0.
pub fn volume_under_surface(mesh: &Mesh) -> f64 {
    mesh.triangle_vertices()
        .map(|(p1, p2, p3)| volume_under_triangle(p1, p2, p3))
        .sum()
}
