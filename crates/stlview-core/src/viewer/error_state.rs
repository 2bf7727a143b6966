use crate::error::StlError;

/// The error currently shown to the user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    error: Option<StlError>,
}

impl ErrorState {
    /// No error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an error is set.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The current error.
    pub fn error(&self) -> Option<&StlError> {
        self.error.as_ref()
    }

    /// Replace the current error.
    pub fn set_error(&mut self, error: StlError) {
        self.error = Some(error);
    }

    /// Clear the error (the retry action).
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
