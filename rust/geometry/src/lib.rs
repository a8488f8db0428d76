//! Surfvol Geometry Processing
//!
//! Surface reconstruction over point clouds using Delaunay triangulation of
//! the xy-projection, and closed-form volume integration against the z = 0
//! plane.

pub mod error;
pub mod surface;
pub mod triangulation;
pub mod volume;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3};

pub use surfvol_core::{Mesh, PointSet, Triangle};

pub use error::{DegenerateReason, Error, Result};
pub use surface::{build_surface, SurfaceBuilder};
pub use triangulation::{DelaunayTriangulator, Triangulator};
pub use volume::{signed_area_xy, volume_under_surface, volume_under_triangle};
