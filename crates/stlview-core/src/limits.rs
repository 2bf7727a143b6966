//! Tunable bounds for binary STL sniffing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary STL header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Header plus the `u32` triangle count.
pub const MIN_BINARY_SIZE: usize = HEADER_SIZE + 4;

/// One binary triangle record: normal (12) + three vertices (36) + attribute (2).
pub const TRIANGLE_RECORD_SIZE: u64 = 50;

/// Rejected [`SniffLimits`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitsError {
    /// `max_triangle_count` is zero, so no size-mismatched file could pass.
    #[error("max_triangle_count must be positive")]
    ZeroTriangleCap,

    /// The tolerance spans a whole triangle record.
    #[error(
        "size_tolerance {0} must be smaller than one triangle record ({rec} bytes)",
        rec = TRIANGLE_RECORD_SIZE
    )]
    ToleranceTooWide(u64),
}

/// Tolerance band used when a buffer does not start with `solid`.
///
/// These are not part of the STL format; callers may widen or tighten them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SniffLimits {
    /// Allowed difference (bytes, either direction) between the actual
    /// length and `84 + count * 50`.
    pub size_tolerance: u64,
    /// Triangle counts at or above this are treated as garbage when the
    /// size does not match exactly.
    pub max_triangle_count: u32,
}

impl Default for SniffLimits {
    fn default() -> Self {
        Self {
            size_tolerance: 2,
            max_triangle_count: 10_000_000,
        }
    }
}

impl SniffLimits {
    /// Check the limits describe a usable band.
    pub fn validate(&self) -> Result<(), LimitsError> {
        if self.max_triangle_count == 0 {
            return Err(LimitsError::ZeroTriangleCap);
        }
        if self.size_tolerance >= TRIANGLE_RECORD_SIZE {
            return Err(LimitsError::ToleranceTooWide(self.size_tolerance));
        }
        Ok(())
    }

    /// Expected byte length of a binary STL declaring `triangle_count` triangles.
    pub fn expected_binary_size(triangle_count: u32) -> u64 {
        MIN_BINARY_SIZE as u64 + u64::from(triangle_count) * TRIANGLE_RECORD_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = SniffLimits::default();
        assert_eq!(limits.size_tolerance, 2);
        assert_eq!(limits.max_triangle_count, 10_000_000);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_invalid_limits() {
        let zero = SniffLimits {
            max_triangle_count: 0,
            ..Default::default()
        };
        assert_eq!(zero.validate(), Err(LimitsError::ZeroTriangleCap));

        let wide = SniffLimits {
            size_tolerance: 50,
            ..Default::default()
        };
        let err = wide.validate().unwrap_err();
        assert_eq!(err, LimitsError::ToleranceTooWide(50));
        assert_eq!(
            err.to_string(),
            "size_tolerance 50 must be smaller than one triangle record (50 bytes)"
        );
    }

    #[test]
    fn test_expected_size_does_not_overflow() {
        assert_eq!(SniffLimits::expected_binary_size(0), 84);
        assert_eq!(SniffLimits::expected_binary_size(1), 134);
        assert_eq!(
            SniffLimits::expected_binary_size(u32::MAX),
            84 + u64::from(u32::MAX) * 50
        );
    }
}
