//! Summary statistics for a decoded triangle mesh.

use serde::Serialize;

/// Borrowed view of decoded geometry.
///
/// `positions` is a flat `[x0, y0, z0, x1, y1, z1, ...]` array. When
/// `indices` is present every three entries form one triangle and
/// vertices may be shared; otherwise each consecutive vertex triple is its
/// own triangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryBuffer<'a> {
    /// Flat vertex positions.
    pub positions: &'a [f32],
    /// Optional triangle index list.
    pub indices: Option<&'a [u32]>,
}

impl<'a> GeometryBuffer<'a> {
    /// Unindexed triangle soup.
    pub fn unindexed(positions: &'a [f32]) -> Self {
        Self {
            positions,
            indices: None,
        }
    }

    /// Indexed triangle list.
    pub fn indexed(positions: &'a [f32], indices: &'a [u32]) -> Self {
        Self {
            positions,
            indices: Some(indices),
        }
    }
}

/// Extent of the axis-aligned bounding box along each axis (`max - min`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BoundingBoxSize {
    /// Size along X.
    pub x: f32,
    /// Size along Y.
    pub y: f32,
    /// Size along Z.
    pub z: f32,
}

/// Metrics shown next to a loaded model.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Number of vertices (`positions.len() / 3`).
    pub vertex_count: usize,
    /// Number of triangles.
    pub face_count: usize,
    /// Bounding box size.
    pub bounding_box: BoundingBoxSize,
}

/// Compute [`ModelInfo`] for `geometry`.
///
/// A trailing partial vertex (positions length not a multiple of 3) is not
/// counted as a vertex, but the coordinates it does have still widen the
/// bounding box. A vertex count that is not a multiple of 3 yields a floored
/// face count. Neither is an error here; rejecting malformed meshes is the
/// decoder's job.
pub fn compute_model_info(geometry: &GeometryBuffer<'_>) -> ModelInfo {
    let vertex_count = geometry.positions.len() / 3;
    let face_count = match geometry.indices {
        Some(indices) => indices.len() / 3,
        None => vertex_count / 3,
    };

    ModelInfo {
        vertex_count,
        face_count,
        bounding_box: bounding_box_size(geometry.positions),
    }
}

/// Per-axis `max - min` over `positions`, read as `x, y, z` triples.
///
/// Fewer than three floats give an all-zero size.
pub fn bounding_box_size(positions: &[f32]) -> BoundingBoxSize {
    if positions.len() < 3 {
        return BoundingBoxSize::default();
    }

    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];

    for vertex in positions.chunks(3) {
        for (axis, &v) in vertex.iter().enumerate() {
            if v < min[axis] {
                min[axis] = v;
            }
            if v > max[axis] {
                max[axis] = v;
            }
        }
    }

    BoundingBoxSize {
        x: max[0] - min[0],
        y: max[1] - min[1],
        z: max[2] - min[2],
    }
}
