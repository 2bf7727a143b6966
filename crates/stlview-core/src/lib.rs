#![warn(missing_docs)]

//! STL format sniffing and mesh metrics for the stlview viewer.
//!
//! Two stateless pieces sit at the center of the viewer:
//!
//! - [`validate`] decides from the file name and raw bytes whether a buffer
//!   is a plausible ASCII or binary STL, without decoding triangles.
//! - [`compute_model_info`] derives vertex count, face count and
//!   bounding-box size from decoded geometry.
//!
//! # Example
//!
//! ```
//! use stlview_core::{compute_model_info, validate, GeometryBuffer};
//!
//! let bytes = b"solid part\nfacet normal 0 0 1\nendfacet\nendsolid part\n";
//! assert!(validate("part.stl", bytes).is_valid());
//!
//! let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
//! let info = compute_model_info(&GeometryBuffer::unindexed(&positions));
//! assert_eq!(info.face_count, 1);
//! ```

pub mod error;
pub mod limits;
pub mod metrics;
pub mod validate;
pub mod viewer;

pub use error::{create_error, ErrorKind, StlError};
pub use limits::{LimitsError, SniffLimits};
pub use metrics::{bounding_box_size, compute_model_info, BoundingBoxSize, GeometryBuffer, ModelInfo};
pub use validate::{file_extension, validate, validate_with_limits, ValidationResult};
