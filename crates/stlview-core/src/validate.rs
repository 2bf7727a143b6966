//! Structural STL sniffing.
//!
//! STL has no magic number. ASCII files start with `solid`, binary files
//! start with a free-form 80-byte header (which may itself start with
//! `solid`) followed by a little-endian triangle count. The checks here
//! accept anything plausible and leave the final word to the decoder.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ErrorKind, StlError};
use crate::limits::{SniffLimits, HEADER_SIZE, MIN_BINARY_SIZE};

const ASCII_PREFIX: &[u8] = b"solid";

/// Outcome of [`validate`]. `valid` is true exactly when `error` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    error: Option<StlError>,
}

impl ValidationResult {
    /// An accepting result.
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A rejecting result carrying `error`.
    pub fn invalid(error: StlError) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }

    /// Whether the buffer was accepted.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The rejection reason, if any.
    pub fn error(&self) -> Option<&StlError> {
        self.error.as_ref()
    }

    /// Convert into a `Result` for callers that propagate with `?`.
    pub fn into_result(self) -> Result<(), StlError> {
        match self.error {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

/// Validate `buffer` as the content of a file called `filename`, using the
/// default [`SniffLimits`].
pub fn validate(filename: &str, buffer: &[u8]) -> ValidationResult {
    validate_with_limits(filename, buffer, &SniffLimits::default())
}

/// Validate with explicit sniffing limits.
pub fn validate_with_limits(
    filename: &str,
    buffer: &[u8],
    limits: &SniffLimits,
) -> ValidationResult {
    if let Err(err) = check_filename(filename) {
        return ValidationResult::invalid(err);
    }
    match check_content(buffer, limits) {
        Ok(()) => ValidationResult::ok(),
        Err(err) => ValidationResult::invalid(err),
    }
}

/// Text after the last `.` of `filename`, if there is a non-empty one.
pub fn file_extension(filename: &str) -> Option<&str> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

fn check_filename(filename: &str) -> Result<(), StlError> {
    if filename.is_empty() {
        return Err(ErrorKind::InvalidFormat.with_details("file name is empty"));
    }

    match file_extension(filename) {
        Some(ext) if ext.eq_ignore_ascii_case("stl") => Ok(()),
        other => Err(ErrorKind::UnsupportedFormat.with_details(format!(
            "only STL files are supported (selected file: .{})",
            other.map_or_else(|| "(no extension)".to_string(), str::to_ascii_lowercase)
        ))),
    }
}

fn check_content(buffer: &[u8], limits: &SniffLimits) -> Result<(), StlError> {
    if buffer.is_empty() {
        return Err(ErrorKind::InvalidFormat.with_details("empty file cannot be loaded"));
    }

    let prefix = &buffer[..buffer.len().min(ASCII_PREFIX.len())];
    if prefix.eq_ignore_ascii_case(ASCII_PREFIX) {
        check_ascii(buffer)
    } else {
        check_binary(buffer, limits)
    }
}

fn check_ascii(buffer: &[u8]) -> Result<(), StlError> {
    if contains(buffer, b"facet") || contains(buffer, b"endsolid") {
        debug!(len = buffer.len(), "accepted as ASCII STL");
        return Ok(());
    }

    // Binary exporters are free to start the header with "solid".
    if buffer.len() >= MIN_BINARY_SIZE {
        warn!(
            len = buffer.len(),
            "starts with 'solid' but has no facets; accepting as binary STL"
        );
        return Ok(());
    }

    Err(invalid_stl())
}

fn check_binary(buffer: &[u8], limits: &SniffLimits) -> Result<(), StlError> {
    let Some(count_bytes) = buffer.get(HEADER_SIZE..MIN_BINARY_SIZE) else {
        debug!(len = buffer.len(), "too short for a binary STL header");
        return Err(invalid_stl());
    };
    let triangle_count = u32::from_le_bytes([
        count_bytes[0],
        count_bytes[1],
        count_bytes[2],
        count_bytes[3],
    ]);

    let len = buffer.len() as u64;
    let expected = SniffLimits::expected_binary_size(triangle_count);
    let low = expected.saturating_sub(limits.size_tolerance);
    let high = expected.saturating_add(limits.size_tolerance);
    if (low..=high).contains(&len) {
        debug!(triangle_count, len, "accepted as binary STL");
        return Ok(());
    }

    if triangle_count > 0
        && triangle_count < limits.max_triangle_count
        && buffer.len() > MIN_BINARY_SIZE
    {
        warn!(
            triangle_count,
            len, expected, "binary STL size mismatch; accepting"
        );
        return Ok(());
    }

    debug!(triangle_count, len, expected, "rejected as binary STL");
    Err(invalid_stl())
}

fn invalid_stl() -> StlError {
    ErrorKind::InvalidFormat.with_details("invalid STL file format")
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
