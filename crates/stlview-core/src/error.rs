//! Error taxonomy for STL loading.
//!
//! Validation reports failures as data rather than by returning `Err`, so
//! [`StlError`] is a plain value that also implements [`std::error::Error`]
//! for the layers (loader, CLI) that do propagate it with `?`.

use serde::Serialize;
use thiserror::Error;

/// Classification of an STL loading failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// File name or content is structurally malformed (empty name, empty file).
    InvalidFormat,
    /// Content looks like STL but the triangle data could not be decoded.
    CorruptedFile,
    /// File extension is not `.stl`.
    UnsupportedFormat,
    /// The underlying byte read failed.
    ReadError,
    /// Unclassified failure.
    Unknown,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::InvalidFormat,
        ErrorKind::CorruptedFile,
        ErrorKind::UnsupportedFormat,
        ErrorKind::ReadError,
        ErrorKind::Unknown,
    ];

    /// Canonical user-facing message for this kind.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "invalid file format",
            ErrorKind::CorruptedFile => "file is corrupted",
            ErrorKind::UnsupportedFormat => "unsupported file format",
            ErrorKind::ReadError => "failed to read file",
            ErrorKind::Unknown => "an unknown error occurred",
        }
    }

    /// Wire name (`invalid_format`, `corrupted_file`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::CorruptedFile => "corrupted_file",
            ErrorKind::UnsupportedFormat => "unsupported_format",
            ErrorKind::ReadError => "read_error",
            ErrorKind::Unknown => "unknown",
        }
    }

    /// Parse a wire name. Unrecognized names map to [`ErrorKind::Unknown`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .unwrap_or(ErrorKind::Unknown)
    }

    /// Shorthand for [`create_error`] with details.
    pub fn with_details(self, details: impl Into<String>) -> StlError {
        create_error(self, Some(details.into()))
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified STL loading error.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}{}", .details.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
pub struct StlError {
    kind: ErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl StlError {
    /// Error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Canonical message for the kind.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Caller-supplied context, if any.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

/// Build an [`StlError`] for `kind`, attaching `details` verbatim.
pub fn create_error(kind: ErrorKind, details: Option<String>) -> StlError {
    StlError {
        kind,
        message: kind.default_message().to_string(),
        details,
    }
}

impl From<ErrorKind> for StlError {
    fn from(kind: ErrorKind) -> Self {
        create_error(kind, None)
    }
}
