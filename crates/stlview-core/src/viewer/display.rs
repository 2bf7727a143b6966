use serde::{Deserialize, Serialize};

/// Default model color (gray).
pub const DEFAULT_MODEL_COLOR: &str = "#808080";

/// Wireframe is off unless asked for.
pub const DEFAULT_WIREFRAME: bool = false;

/// Model color and wireframe toggle for one viewer.
///
/// `reset` returns to the values the settings were built with, not to the
/// global defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    model_color: String,
    wireframe: bool,
    #[serde(skip)]
    initial: Option<(String, bool)>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::with_initial(DEFAULT_MODEL_COLOR, DEFAULT_WIREFRAME)
    }
}

impl DisplaySettings {
    /// Settings with the default color and wireframe off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings starting from (and resetting to) the given values.
    pub fn with_initial(color: impl Into<String>, wireframe: bool) -> Self {
        let color = color.into();
        Self {
            model_color: color.clone(),
            wireframe,
            initial: Some((color, wireframe)),
        }
    }

    /// Current model color, as given by the caller (usually `#rrggbb`).
    pub fn model_color(&self) -> &str {
        &self.model_color
    }

    /// Whether wireframe rendering is on.
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Set the model color.
    pub fn set_model_color(&mut self, color: impl Into<String>) {
        self.model_color = color.into();
    }

    /// Turn wireframe on or off.
    pub fn set_wireframe(&mut self, enabled: bool) {
        self.wireframe = enabled;
    }

    /// Flip wireframe.
    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
    }

    /// Restore the initial color and wireframe state.
    pub fn reset(&mut self) {
        let (color, wireframe) = self
            .initial
            .clone()
            .unwrap_or_else(|| (DEFAULT_MODEL_COLOR.to_string(), DEFAULT_WIREFRAME));
        self.model_color = color;
        self.wireframe = wireframe;
    }
}
