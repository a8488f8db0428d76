// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plaintext OBJ mesh codec
//!
//! Only two line kinds carry data:
//!
//! ```text
//! v 0.00000000 0.00000000 1.00000000
//! f 1 2 3
//! ```
//!
//! Vertex coordinates are written with fixed 8-decimal precision, in point
//! order. Face indices are 1-based on disk and 0-based in memory.
//!
//! Decoding skips `#` comments and blank lines. Any other line kind (`vn`,
//! `vt`, `o`, `usemtl`, ...) is skipped with a warning so that files written
//! by newer producers still load. Numeric fields after the third coordinate
//! of a `v` line (`v x y z w`, `v x y z r g b`) are ignored with a warning.
//! A malformed field inside a `v` or `f` line fails the whole decode.

use std::fmt::Write as _;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;

use crate::error::{Error, Result};
use crate::mesh::{Mesh, PointSet, Triangle};

/// Marker of a vertex line
pub const VERTEX_MARKER: &str = "v";
/// Marker of a face line
pub const FACE_MARKER: &str = "f";
/// Lines starting with this character are comments
pub const COMMENT_MARKER: char = '#';
/// Decimal places written for each vertex coordinate
pub const COORDINATE_PRECISION: usize = 8;

/// Decoded mesh plus the line numbers that were skipped as unknown kinds.
#[derive(Debug, Clone)]
pub struct DecodedMesh {
    pub mesh: Mesh,
    /// 1-based line numbers of unrecognised lines
    pub skipped_lines: Vec<usize>,
}

/// Encode a mesh to an OBJ string.
pub fn encode_obj(mesh: &Mesh) -> String {
    // ~40 bytes per vertex line, ~20 per face line
    let mut out = String::with_capacity(mesh.vertex_count() * 40 + mesh.triangle_count() * 20);
    for p in mesh.points().iter() {
        let _ = writeln!(
            out,
            "{} {:.prec$} {:.prec$} {:.prec$}",
            VERTEX_MARKER,
            p.x,
            p.y,
            p.z,
            prec = COORDINATE_PRECISION
        );
    }
    for &[a, b, c] in mesh.triangles() {
        let _ = writeln!(out, "{} {} {} {}", FACE_MARKER, a + 1, b + 1, c + 1);
    }
    out
}

/// Write a mesh as OBJ text into any writer.
pub fn write_obj<W: Write>(mesh: &Mesh, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(encode_obj(mesh).as_bytes())
}

/// Save a mesh to an OBJ file, replacing any existing file.
pub fn save_obj<P: AsRef<Path>>(path: P, mesh: &Mesh) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_obj(mesh, &mut writer).map_err(|e| Error::io(path, e))?;
    writer.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Parse a vertex coordinate field
#[inline]
fn parse_coordinate(field: &str, line_no: usize) -> Result<f64> {
    let value: f64 = fast_float::parse(field)
        .map_err(|_| Error::mesh_format(line_no, format!("invalid coordinate '{}'", field)))?;
    if !value.is_finite() {
        return Err(Error::mesh_format(
            line_no,
            format!("non-finite coordinate '{}'", field),
        ));
    }
    Ok(value)
}

/// Parse a 1-based face field into a 0-based index.
///
/// Accepts `i`, `i/t`, `i//n` and `i/t/n`; only `i` is used.
#[inline]
fn parse_face_index(field: &str, line_no: usize) -> Result<usize> {
    let vertex = field.split('/').next().unwrap_or(field);
    let value = lexical_core::parse::<u64>(vertex.as_bytes())
        .map_err(|_| Error::mesh_format(line_no, format!("invalid face index '{}'", field)))?;
    if value == 0 {
        return Err(Error::mesh_format(
            line_no,
            "face index 0 is invalid (indices are 1-based)",
        ));
    }
    usize::try_from(value - 1)
        .map_err(|_| Error::mesh_format(line_no, format!("face index '{}' too large", field)))
}

/// Parse a vertex line's fields into a point.
///
/// Returns the point and the number of trailing fields that were ignored.
fn parse_vertex<'a>(
    mut fields: impl Iterator<Item = &'a str>,
    line_no: usize,
) -> Result<(Point3<f64>, usize)> {
    let mut coords = [0.0; 3];
    for (i, coord) in coords.iter_mut().enumerate() {
        let field = fields.next().ok_or_else(|| {
            Error::mesh_format(
                line_no,
                format!("'{}' line needs 3 fields, found {}", VERTEX_MARKER, i),
            )
        })?;
        *coord = parse_coordinate(field, line_no)?;
    }

    let mut extra = 0;
    for field in fields {
        parse_coordinate(field, line_no)?;
        extra += 1;
    }

    Ok((Point3::new(coords[0], coords[1], coords[2]), extra))
}

/// Collect exactly three fields of a recognised line.
#[inline]
fn three_fields<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    kind: &str,
    line_no: usize,
) -> Result<[&'a str; 3]> {
    let collected: Vec<&str> = fields.collect();
    match collected.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        other => Err(Error::mesh_format(
            line_no,
            format!("'{}' line needs 3 fields, found {}", kind, other.len()),
        )),
    }
}

/// Decode OBJ text into a mesh.
pub fn decode_obj(content: &str) -> Result<DecodedMesh> {
    let mut points = PointSet::new();
    let mut triangles: Vec<Triangle> = Vec::new();
    let mut face_lines: Vec<usize> = Vec::new();
    let mut skipped_lines = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        let mut fields = line.split_whitespace();
        let kind = fields.next().unwrap_or_default();

        match kind {
            VERTEX_MARKER => {
                let (point, extra) = parse_vertex(fields, line_no)?;
                if extra > 0 {
                    tracing::warn!(
                        line = line_no,
                        ignored = extra,
                        "Ignoring extra vertex fields"
                    );
                }
                points.push(point);
            }
            FACE_MARKER => {
                let [a, b, c] = three_fields(&mut fields, kind, line_no)?;
                triangles.push([
                    parse_face_index(a, line_no)?,
                    parse_face_index(b, line_no)?,
                    parse_face_index(c, line_no)?,
                ]);
                face_lines.push(line_no);
            }
            _ => {
                tracing::warn!(line = line_no, kind = %kind, "Skipping unrecognised mesh line");
                skipped_lines.push(line_no);
            }
        }
    }

    let mesh = Mesh::new(points, triangles).map_err(|e| match e {
        Error::InvalidIndex {
            triangle,
            index,
            len,
        } => Error::mesh_format(
            face_lines[triangle],
            format!(
                "face references vertex {} but only {} vertices are defined",
                index + 1,
                len
            ),
        ),
        other => other,
    })?;

    Ok(DecodedMesh {
        mesh,
        skipped_lines,
    })
}

/// Load and decode an OBJ file from disk.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<DecodedMesh> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    decode_obj(&content)
}
