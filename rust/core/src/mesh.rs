// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point set and triangle mesh data structures

use nalgebra::{Point2, Point3};

use crate::error::{Error, Result};

/// Triangle as three 0-based indices into a [`PointSet`].
pub type Triangle = [usize; 3];

/// Ordered sequence of 3D points.
///
/// Order is significant: triangles refer to points by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point3<f64>>,
}

impl PointSet {
    /// Create an empty point set
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a point set with capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point
    #[inline]
    pub fn push(&mut self, point: Point3<f64>) {
        self.points.push(point);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Point3<f64>> {
        self.points.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.points.iter()
    }

    /// Projection onto the xy-plane, index for index.
    pub fn project_xy(&self) -> Vec<Point2<f64>> {
        self.points.iter().map(|p| Point2::new(p.x, p.y)).collect()
    }

    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }
}

impl From<Vec<Point3<f64>>> for PointSet {
    fn from(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point3<f64>> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Triangle mesh: a point set plus triangles indexing into it.
///
/// Every triangle index is guaranteed to be in bounds. Degenerate triangles
/// (zero or negative projected area) are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    points: PointSet,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a mesh, checking every triangle index against the point set.
    pub fn new(points: PointSet, triangles: Vec<Triangle>) -> Result<Self> {
        let len = points.len();
        for (triangle, tri) in triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i >= len) {
                return Err(Error::InvalidIndex {
                    triangle,
                    index,
                    len,
                });
            }
        }
        Ok(Self { points, triangles })
    }

    /// Mesh with points but no triangles
    pub fn from_points(points: PointSet) -> Self {
        Self {
            points,
            triangles: Vec::new(),
        }
    }

    #[inline]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Resolve each triangle to its three vertex positions.
    pub fn triangle_vertices(
        &self,
    ) -> impl Iterator<Item = (&Point3<f64>, &Point3<f64>, &Point3<f64>)> + '_ {
        let pts = self.points.as_slice();
        self.triangles
            .iter()
            .map(move |&[a, b, c]| (&pts[a], &pts[b], &pts[c]))
    }

    /// Apply `f` to every point in place, keeping connectivity.
    pub fn map_points(&mut self, mut f: impl FnMut(&mut Point3<f64>)) {
        self.points.points.iter_mut().for_each(|p| f(p));
    }

    pub fn into_parts(self) -> (PointSet, Vec<Triangle>) {
        (self.points, self.triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> PointSet {
        PointSet::from(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_mesh_accepts_in_bounds_triangles() {
        let mesh = Mesh::new(unit_square(), vec![[0, 1, 2], [0, 2, 3]]).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_mesh_rejects_out_of_bounds_index() {
        let err = Mesh::new(unit_square(), vec![[0, 1, 2], [0, 2, 4]]).unwrap_err();
        match err {
            Error::InvalidIndex {
                triangle,
                index,
                len,
            } => {
                assert_eq!(triangle, 1);
                assert_eq!(index, 4);
                assert_eq!(len, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_degenerate_triangles_are_kept() {
        let mesh = Mesh::new(unit_square(), vec![[0, 0, 1], [1, 1, 1]]).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_project_xy_keeps_order() {
        let projected = unit_square().project_xy();
        assert_eq!(projected.len(), 4);
        assert_eq!(projected[2], Point2::new(1.0, 1.0));
        assert_eq!(projected[3], Point2::new(0.0, 1.0));
    }

    #[test]
    fn test_triangle_vertices_resolves_positions() {
        let mesh = Mesh::new(unit_square(), vec![[3, 1, 2]]).unwrap();
        let (a, b, c) = mesh.triangle_vertices().next().unwrap();
        assert_eq!(*a, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(*b, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(*c, Point3::new(1.0, 1.0, 0.0));
    }
}
