//! Caller-owned state for a viewer pane.
//!
//! None of these hold global state: a front end builds one per view and
//! passes it around by reference.

mod compare;
mod display;
mod error_state;
mod screenshot;

pub use compare::{CompareMode, CompareModel, Pane};
pub use display::{DisplaySettings, DEFAULT_MODEL_COLOR, DEFAULT_WIREFRAME};
pub use error_state::ErrorState;
pub use screenshot::screenshot_filename;
