// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-file pipeline: load, build, integrate, encode.

use std::path::{Path, PathBuf};

use surfvol_core::{load_points, save_obj};
use surfvol_geometry::{volume_under_surface, SurfaceBuilder, Triangulator};

use crate::error::Result;

/// Outcome of running one point file through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedFile {
    pub points: usize,
    pub triangles: usize,
    pub volume: f64,
    pub mesh_path: PathBuf,
}

/// Mesh path for an input file: its stem plus `extension`, under `output_dir`.
pub fn mesh_path_for(input: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("mesh"));
    output_dir.join(name.with_extension(extension))
}

/// Run one point file through load → build → integrate → encode.
///
/// The mesh is written to `mesh_path`. Nothing is logged to the run log
/// here; the caller appends the record once this returns `Ok`.
pub fn process_file<T: Triangulator>(
    input: &Path,
    mesh_path: &Path,
    builder: &SurfaceBuilder<T>,
) -> Result<ProcessedFile> {
    let points = load_points(input)?;
    let point_count = points.len();
    tracing::debug!(file = %input.display(), points = point_count, "Read point data");

    let mesh = builder.build(points)?;
    tracing::debug!(
        file = %input.display(),
        triangles = mesh.triangle_count(),
        "Computed triangulation"
    );

    let volume = volume_under_surface(&mesh);
    tracing::debug!(file = %input.display(), volume = volume, "Computed volume");

    save_obj(mesh_path, &mesh)?;
    tracing::debug!(file = %input.display(), mesh = %mesh_path.display(), "Wrote mesh");

    Ok(ProcessedFile {
        points: point_count,
        triangles: mesh.triangle_count(),
        volume,
        mesh_path: mesh_path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use surfvol_core::load_obj;

    #[test]
    fn test_mesh_path_for() {
        let out = Path::new("out");
        assert_eq!(
            mesh_path_for(Path::new("in/samples.csv"), out, "obj"),
            PathBuf::from("out/samples.obj")
        );
        assert_eq!(
            mesh_path_for(Path::new("in/data"), out, "obj"),
            PathBuf::from("out/data.obj")
        );
        assert_eq!(
            mesh_path_for(Path::new("scan.v2.txt"), out, "obj"),
            PathBuf::from("out/scan.v2.obj")
        );
    }

    #[test]
    fn test_process_file_writes_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("plane.csv");
        std::fs::write(&input, "0,0,0\n1,0,1\n1,1,2\n0,1,1\n").unwrap();
        let mesh_path = dir.path().join("plane.obj");

        let result = process_file(&input, &mesh_path, &SurfaceBuilder::new()).unwrap();
        assert_eq!(result.points, 4);
        assert_eq!(result.triangles, 2);
        assert_relative_eq!(result.volume, 1.0, epsilon = 1e-12);

        let decoded = load_obj(&mesh_path).unwrap();
        assert_eq!(decoded.mesh.vertex_count(), 4);
        assert_eq!(decoded.mesh.triangle_count(), 2);
    }

    #[test]
    fn test_process_file_parse_error_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.csv");
        std::fs::write(&input, "0,0,0\n1,0\n").unwrap();
        let mesh_path = dir.path().join("bad.obj");

        let err = process_file(&input, &mesh_path, &SurfaceBuilder::new()).unwrap_err();
        assert_eq!(err.kind(), crate::FailureKind::Parse);
        assert!(!mesh_path.exists());
    }

    #[test]
    fn test_process_file_degenerate() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("line.csv");
        std::fs::write(&input, "0,0,0\n1,1,1\n2,2,2\n").unwrap();

        let err = process_file(&input, &dir.path().join("line.obj"), &SurfaceBuilder::new())
            .unwrap_err();
        assert_eq!(err.kind(), crate::FailureKind::DegenerateInput);
    }
}
