//! Adapter from `stl_io` to [`GeometryBuffer`].

use std::io::Cursor;

use stlview_core::{ErrorKind, GeometryBuffer, StlError};
use tracing::debug;

/// Triangle mesh decoded from STL bytes.
///
/// `stl_io` merges identical vertices, so the mesh is always indexed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
}

impl DecodedMesh {
    /// Number of (deduplicated) vertices.
    pub fn num_vertices(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Borrow as the metrics input.
    pub fn geometry(&self) -> GeometryBuffer<'_> {
        GeometryBuffer::indexed(&self.positions, &self.indices)
    }

    /// Expand into an unindexed triangle soup, three vertices per face.
    /// Out-of-range indices are skipped.
    pub fn to_triangle_soup(&self) -> Vec<f32> {
        let mut soup = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            let Some(base) = (idx as usize).checked_mul(3) else {
                continue;
            };
            let vertex = base
                .checked_add(3)
                .and_then(|end| self.positions.get(base..end));
            if let Some(vertex) = vertex {
                soup.extend_from_slice(vertex);
            }
        }
        soup
    }
}

/// Decode STL `bytes` (ASCII or binary).
///
/// Decoder failures are reported as [`ErrorKind::CorruptedFile`] with the
/// decoder's message as details.
pub fn decode_stl(bytes: &[u8]) -> Result<DecodedMesh, StlError> {
    let mut cursor = Cursor::new(bytes);
    let stl = stl_io::read_stl(&mut cursor)
        .map_err(|e| ErrorKind::CorruptedFile.with_details(e.to_string()))?;

    debug!(
        vertices = stl.vertices.len(),
        triangles = stl.faces.len(),
        "decoded STL"
    );

    let mut positions = Vec::with_capacity(stl.vertices.len() * 3);
    for v in &stl.vertices {
        positions.extend_from_slice(&v.0);
    }

    let vertex_count = stl.vertices.len();
    let mut indices = Vec::with_capacity(stl.faces.len() * 3);
    for face in &stl.faces {
        for &vi in &face.vertices {
            if vi >= vertex_count {
                return Err(ErrorKind::CorruptedFile.with_details(format!(
                    "index {vi} out of range (vertex count = {vertex_count})"
                )));
            }
            let vi = u32::try_from(vi).map_err(|_| {
                ErrorKind::CorruptedFile.with_details(format!("vertex index {vi} exceeds u32"))
            })?;
            indices.push(vi);
        }
    }

    Ok(DecodedMesh { positions, indices })
}
