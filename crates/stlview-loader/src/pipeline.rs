//! Validate → decode → measure.

use std::path::Path;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use stlview_core::{
    compute_model_info, validate_with_limits, ErrorKind, GeometryBuffer, ModelInfo, SniffLimits,
    StlError,
};
use tracing::{debug, info};

use crate::decode::{decode_stl, DecodedMesh};

/// A file that passed validation and decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedModel {
    /// File name the bytes were loaded under.
    pub name: String,
    /// Decoded geometry.
    pub mesh: DecodedMesh,
    /// Metrics of the unshared triangle soup: three vertices per face, as a
    /// renderer fed with unindexed geometry counts them.
    pub info: ModelInfo,
}

/// Summary of a [`LoadedModel`] (no geometry).
///
/// Serializes as one flat struct:
/// `{ name, vertexCount, faceCount, boundingBox }`.
#[derive(Debug, Clone)]
pub struct ModelSummary<'a> {
    /// File name.
    pub name: &'a str,
    /// Metrics.
    pub info: ModelInfo,
}

impl Serialize for ModelSummary<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ModelSummary", 4)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("vertexCount", &self.info.vertex_count)?;
        state.serialize_field("faceCount", &self.info.face_count)?;
        state.serialize_field("boundingBox", &self.info.bounding_box)?;
        state.end()
    }
}

impl LoadedModel {
    /// Summary for display or JSON output.
    pub fn summary(&self) -> ModelSummary<'_> {
        ModelSummary {
            name: &self.name,
            info: self.info,
        }
    }
}

/// Load `bytes` received under `filename` with default limits.
pub fn load_model(filename: &str, bytes: &[u8]) -> Result<LoadedModel, StlError> {
    load_model_with_limits(filename, bytes, &SniffLimits::default())
}

/// Load `bytes` received under `filename`.
pub fn load_model_with_limits(
    filename: &str,
    bytes: &[u8],
    limits: &SniffLimits,
) -> Result<LoadedModel, StlError> {
    validate_with_limits(filename, bytes, limits).into_result()?;
    debug!(filename, len = bytes.len(), "validated");

    let mesh = decode_stl(bytes)?;
    let soup = mesh.to_triangle_soup();
    let info = compute_model_info(&GeometryBuffer::unindexed(&soup));
    info!(
        filename,
        unique_vertices = mesh.num_vertices(),
        vertices = info.vertex_count,
        faces = info.face_count,
        "loaded model"
    );

    Ok(LoadedModel {
        name: filename.to_string(),
        mesh,
        info,
    })
}

/// Read `path` from disk and load it under its file name.
pub fn read_model_file(path: &Path, limits: &SniffLimits) -> Result<LoadedModel, StlError> {
    let bytes = std::fs::read(path)
        .map_err(|e| ErrorKind::ReadError.with_details(format!("{}: {e}", path.display())))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    load_model_with_limits(&name, &bytes, limits)
}
