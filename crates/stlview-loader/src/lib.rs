#![warn(missing_docs)]

//! STL decoding for the stlview viewer.
//!
//! Triangle decoding is delegated to [`stl_io`]; this crate adapts its
//! output into [`stlview_core::GeometryBuffer`] and chains validation,
//! decoding and metrics into a single load call.

pub mod decode;
pub mod pipeline;

pub use decode::{decode_stl, DecodedMesh};
pub use pipeline::{load_model, load_model_with_limits, read_model_file, LoadedModel, ModelSummary};
