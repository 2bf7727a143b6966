use serde::{Deserialize, Serialize};

/// One side of the comparison view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    /// Left pane.
    Left,
    /// Right pane.
    Right,
}

/// A file placed in a comparison pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareModel {
    /// Name of the uploaded file.
    pub file_name: String,
    /// Raw file bytes.
    pub data: Vec<u8>,
}

impl CompareModel {
    /// Wrap an uploaded file.
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }
}

/// Two-pane comparison state. Turning the mode off drops both models.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareMode {
    enabled: bool,
    left: Option<CompareModel>,
    right: Option<CompareModel>,
}

impl CompareMode {
    /// Comparison off, both panes empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the comparison view is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn comparison on. Existing models are kept.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Turn comparison off and clear both panes.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.left = None;
        self.right = None;
    }

    /// Flip the mode; clears both panes when switching off.
    pub fn toggle(&mut self) {
        if self.enabled {
            self.disable();
        } else {
            self.enable();
        }
    }

    /// Model shown in `pane`.
    pub fn model(&self, pane: Pane) -> Option<&CompareModel> {
        match pane {
            Pane::Left => self.left.as_ref(),
            Pane::Right => self.right.as_ref(),
        }
    }

    /// Place `model` in `pane`, replacing whatever was there.
    pub fn set_model(&mut self, pane: Pane, model: CompareModel) {
        *self.slot(pane) = Some(model);
    }

    /// Empty `pane`.
    pub fn clear_model(&mut self, pane: Pane) {
        *self.slot(pane) = None;
    }

    /// Both panes are filled.
    pub fn is_ready(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    fn slot(&mut self, pane: Pane) -> &mut Option<CompareModel> {
        match pane {
            Pane::Left => &mut self.left,
            Pane::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str) -> CompareModel {
        CompareModel::new(name, b"solid x\nendsolid x".to_vec())
    }

    #[test]
    fn test_initial_state() {
        let mode = CompareMode::new();
        assert!(!mode.is_enabled());
        assert!(mode.model(Pane::Left).is_none());
        assert!(mode.model(Pane::Right).is_none());
    }

    #[test]
    fn test_set_and_clear_panes() {
        let mut mode = CompareMode::new();
        mode.enable();
        mode.set_model(Pane::Left, model("a.stl"));
        assert!(!mode.is_ready());
        mode.set_model(Pane::Right, model("b.stl"));
        assert!(mode.is_ready());
        assert_eq!(mode.model(Pane::Left).unwrap().file_name, "a.stl");
        assert_eq!(mode.model(Pane::Right).unwrap().file_name, "b.stl");

        mode.clear_model(Pane::Left);
        assert!(mode.model(Pane::Left).is_none());
        assert!(mode.model(Pane::Right).is_some());
    }

    #[test]
    fn test_disable_clears_models() {
        let mut mode = CompareMode::new();
        mode.enable();
        mode.set_model(Pane::Left, model("a.stl"));
        mode.set_model(Pane::Right, model("b.stl"));
        mode.disable();
        assert!(!mode.is_enabled());
        assert!(mode.model(Pane::Left).is_none());
        assert!(mode.model(Pane::Right).is_none());
    }

    #[test]
    fn test_toggle() {
        let mut mode = CompareMode::new();
        mode.toggle();
        assert!(mode.is_enabled());
        mode.set_model(Pane::Right, model("b.stl"));

        mode.toggle();
        assert!(!mode.is_enabled());
        assert!(mode.model(Pane::Right).is_none());
    }

    #[test]
    fn test_enable_keeps_models() {
        let mut mode = CompareMode::new();
        mode.set_model(Pane::Left, model("a.stl"));
        mode.enable();
        assert!(mode.model(Pane::Left).is_some());
    }
}
