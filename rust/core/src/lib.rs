// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Surfvol Core
//!
//! Data model and plaintext formats for surface volume reconstruction.
//!
//! ## Overview
//!
//! - **Data model**: [`PointSet`] (ordered 3D points) and [`Mesh`]
//!   (points plus index triangles, bounds-checked on construction)
//! - **Point files**: `x,y,z` per line, parsed with
//!   [fast-float](https://docs.rs/fast-float)
//! - **Mesh files**: OBJ subset (`v` / `f` lines) with fixed 8-decimal
//!   coordinates and 1-based faces; unknown line kinds are tolerated
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use surfvol_core::{load_points, encode_obj, decode_obj, Mesh};
//!
//! let points = load_points("input/scan.csv")?;
//! let mesh = Mesh::new(points, vec![[0, 1, 2]])?;
//!
//! let text = encode_obj(&mesh);
//! let decoded = decode_obj(&text)?;
//! assert_eq!(encode_obj(&decoded.mesh), text);
//! ```

pub mod error;
pub mod mesh;
pub mod obj;
pub mod points;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3};

pub use error::{Error, Result};
pub use mesh::{Mesh, PointSet, Triangle};
pub use obj::{decode_obj, encode_obj, load_obj, save_obj, write_obj, DecodedMesh};
pub use points::{load_points, parse_point_line, parse_points};
