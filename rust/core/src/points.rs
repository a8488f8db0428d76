// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point file loading
//!
//! A point file is plain text with one point per line, written as
//! `x,y,z` decimal reals and no header:
//!
//! ```text
//! 0.1250, 0.5000, 0.6250
//! 0.7500,0.2500,1.0000
//! ```
//!
//! Whitespace around each field is ignored. Every line must hold exactly
//! three finite numbers; empty lines are rejected.

use std::path::Path;

use nalgebra::Point3;

use crate::error::{Error, Result};
use crate::mesh::PointSet;

/// Field separator in point files
pub const FIELD_SEPARATOR: char = ',';

/// Parse one `x,y,z` line. `line_no` is 1-based and only used for errors.
#[inline]
pub fn parse_point_line(line: &str, line_no: usize) -> Result<Point3<f64>> {
    if line.trim().is_empty() {
        return Err(Error::parse(line_no, "empty line"));
    }

    let mut coords = [0.0f64; 3];
    let mut count = 0usize;

    for field in line.split(FIELD_SEPARATOR) {
        if count == 3 {
            count += 1;
            break;
        }
        let field = field.trim();
        let value: f64 = fast_float::parse(field)
            .map_err(|_| Error::parse(line_no, format!("invalid number '{}'", field)))?;
        if !value.is_finite() {
            return Err(Error::parse(
                line_no,
                format!("non-finite coordinate '{}'", field),
            ));
        }
        coords[count] = value;
        count += 1;
    }

    if count != 3 {
        let found = line.split(FIELD_SEPARATOR).count();
        return Err(Error::parse(
            line_no,
            format!("expected 3 fields, found {}", found),
        ));
    }

    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

/// Parse the contents of a point file, preserving line order.
pub fn parse_points(content: &str) -> Result<PointSet> {
    // Rough estimate: ~30 bytes per line
    let mut points = PointSet::with_capacity(content.len() / 30);

    for (idx, line) in content.lines().enumerate() {
        points.push(parse_point_line(line, idx + 1)?);
    }

    Ok(points)
}

/// Load a point file from disk.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<PointSet> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let points = parse_points(&content)?;
    tracing::debug!(path = %path.display(), points = points.len(), "Loaded point file");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points_preserves_order() {
        let content = "0.0,0.0,1.0\n1.0,0.0,2.0\n0.0,1.0,3.0\n";
        let points = parse_points(content).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points.get(0), Some(&Point3::new(0.0, 0.0, 1.0)));
        assert_eq!(points.get(1), Some(&Point3::new(1.0, 0.0, 2.0)));
        assert_eq!(points.get(2), Some(&Point3::new(0.0, 1.0, 3.0)));
    }

    #[test]
    fn test_parse_points_trims_fields() {
        // Generator output uses ", " separators
        let content = "0.2500000000000000, 0.5000000000000000, -1.2500000000000000\r\n";
        let points = parse_points(content).unwrap();
        assert_eq!(points.get(0), Some(&Point3::new(0.25, 0.5, -1.25)));
    }

    #[test]
    fn test_parse_points_accepts_exponents() {
        let points = parse_points("1e-3,-2.5E2,3").unwrap();
        assert_eq!(points.get(0), Some(&Point3::new(0.001, -250.0, 3.0)));
    }

    #[test]
    fn test_two_fields_is_parse_error() {
        let err = parse_points("0,0,0\n1.0,2.0\n").unwrap_err();
        match err {
            Error::Parse { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 3 fields, found 2"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_four_fields_is_parse_error() {
        let err = parse_points("1,2,3,4").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
        assert!(err.to_string().contains("found 4"));
    }

    #[test]
    fn test_non_numeric_field_is_parse_error() {
        let err = parse_points("1,abc,3").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_empty_line_is_parse_error() {
        let err = parse_points("1,2,3\n\n4,5,6\n").unwrap_err();
        match err {
            Error::Parse { line, reason } => {
                assert_eq!(line, 2);
                assert_eq!(reason, "empty line");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_is_parse_error() {
        assert!(parse_points("inf,0,0").is_err());
        assert!(parse_points("0,NaN,0").is_err());
    }

    #[test]
    fn test_empty_content_is_empty_set() {
        assert!(parse_points("").unwrap().is_empty());
    }

    #[test]
    fn test_load_points_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_points(dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_points_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloud.csv");
        std::fs::write(&path, "0.5,0.25,0.125\n").unwrap();
        let points = load_points(&path).unwrap();
        assert_eq!(points.len(), 1);
    }
}
