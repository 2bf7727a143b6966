//! WASM bindings for the stlview STL viewer.
//!
//! The browser front end reads the dropped file into a `Uint8Array` and
//! hands it to [`load_model`]; everything it renders comes back from here
//! as plain data.

use chrono::NaiveDate;
use serde::Serialize;
use stlview_core::viewer::{CompareMode, CompareModel, DisplaySettings, Pane};
use stlview_core::{ErrorKind, GeometryBuffer, StlError};
use stlview_loader::LoadedModel;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Error shape handed to JS: `{ kind, message, details? }`.
#[derive(Serialize)]
struct JsStlError<'a> {
    kind: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl<'a> From<&'a StlError> for JsStlError<'a> {
    fn from(err: &'a StlError) -> Self {
        Self {
            kind: err.kind().as_str(),
            message: err.message(),
            details: err.details(),
        }
    }
}

fn to_js_error(err: &StlError) -> JsError {
    JsError::new(&err.to_string())
}

/// Plain objects for maps and `null` for `None`, as the front end expects.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Validate a file: returns `{ valid, error }`.
#[wasm_bindgen(js_name = validateStl)]
pub fn validate_stl(filename: &str, bytes: &[u8]) -> Result<JsValue, JsError> {
    to_js(&stlview_core::validate(filename, bytes))
}

/// Compute `{ vertexCount, faceCount, boundingBox }` for decoded geometry.
#[wasm_bindgen(js_name = computeModelInfo)]
pub fn compute_model_info(positions: &[f32], indices: Option<Vec<u32>>) -> Result<JsValue, JsError> {
    let geometry = GeometryBuffer {
        positions,
        indices: indices.as_deref(),
    };
    to_js(&stlview_core::compute_model_info(&geometry))
}

/// Canonical message for an error kind name (`"read_error"`, ...).
#[wasm_bindgen(js_name = errorMessage)]
pub fn error_message(kind: &str) -> String {
    ErrorKind::from_name(kind).default_message().to_string()
}

/// Build a `{ kind, message, details? }` error object, e.g. for a failed
/// `FileReader`.
#[wasm_bindgen(js_name = createError)]
pub fn create_error(kind: &str, details: Option<String>) -> Result<JsValue, JsError> {
    let err = stlview_core::create_error(ErrorKind::from_name(kind), details);
    to_js(&JsStlError::from(&err))
}

/// A decoded model ready for rendering.
#[wasm_bindgen]
pub struct WasmModel {
    inner: LoadedModel,
}

#[wasm_bindgen]
impl WasmModel {
    /// File name.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name.clone()
    }

    /// Flat vertex positions for a `BufferGeometry` position attribute.
    #[wasm_bindgen(getter)]
    pub fn positions(&self) -> Vec<f32> {
        self.inner.mesh.positions.clone()
    }

    /// Triangle indices.
    #[wasm_bindgen(getter)]
    pub fn indices(&self) -> Vec<u32> {
        self.inner.mesh.indices.clone()
    }

    /// Vertex count.
    #[wasm_bindgen(getter, js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.inner.info.vertex_count
    }

    /// Face count.
    #[wasm_bindgen(getter, js_name = faceCount)]
    pub fn face_count(&self) -> usize {
        self.inner.info.face_count
    }

    /// Model info as a JS object.
    #[wasm_bindgen(getter)]
    pub fn info(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.info)
    }
}

/// Validate, decode and measure a dropped file.
#[wasm_bindgen(js_name = loadModel)]
pub fn load_model(filename: &str, bytes: &[u8]) -> Result<WasmModel, JsError> {
    let inner = stlview_loader::load_model(filename, bytes).map_err(|e| to_js_error(&e))?;
    Ok(WasmModel { inner })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum LoadOutcome<'a> {
    Model(stlview_loader::ModelSummary<'a>),
    Error(JsStlError<'a>),
}

/// Like [`load_model`] but returns the structured error object on failure
/// instead of throwing: `{ model }` or `{ error }`.
#[wasm_bindgen(js_name = tryLoadModel)]
pub fn try_load_model(filename: &str, bytes: &[u8]) -> Result<JsValue, JsError> {
    match stlview_loader::load_model(filename, bytes) {
        Ok(model) => to_js(&LoadOutcome::Model(model.summary())),
        Err(err) => to_js(&LoadOutcome::Error(JsStlError::from(&err))),
    }
}

/// Screenshot file name for the current local time.
#[wasm_bindgen(js_name = screenshotFilename)]
pub fn screenshot_filename() -> Result<String, JsError> {
    let now = js_sys::Date::new_0();
    let at = NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .and_then(|d| d.and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds()))
    .ok_or_else(|| JsError::new("invalid local date"))?;
    Ok(stlview_core::viewer::screenshot_filename(at))
}

/// Display settings for one viewer.
#[wasm_bindgen]
pub struct WasmDisplaySettings {
    inner: DisplaySettings,
}

#[wasm_bindgen]
impl WasmDisplaySettings {
    /// Create settings, optionally overriding the initial color and wireframe.
    #[wasm_bindgen(constructor)]
    pub fn new(initial_color: Option<String>, initial_wireframe: Option<bool>) -> Self {
        let defaults = DisplaySettings::new();
        Self {
            inner: DisplaySettings::with_initial(
                initial_color.unwrap_or_else(|| defaults.model_color().to_string()),
                initial_wireframe.unwrap_or(defaults.wireframe()),
            ),
        }
    }

    /// Current model color.
    #[wasm_bindgen(getter, js_name = modelColor)]
    pub fn model_color(&self) -> String {
        self.inner.model_color().to_string()
    }

    /// Set the model color.
    #[wasm_bindgen(setter, js_name = modelColor)]
    pub fn set_model_color(&mut self, color: String) {
        self.inner.set_model_color(color);
    }

    /// Whether wireframe is on.
    #[wasm_bindgen(getter)]
    pub fn wireframe(&self) -> bool {
        self.inner.wireframe()
    }

    /// Turn wireframe on or off.
    #[wasm_bindgen(setter)]
    pub fn set_wireframe(&mut self, enabled: bool) {
        self.inner.set_wireframe(enabled);
    }

    /// Flip wireframe.
    #[wasm_bindgen(js_name = toggleWireframe)]
    pub fn toggle_wireframe(&mut self) {
        self.inner.toggle_wireframe();
    }

    /// Restore the initial values.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

fn parse_pane(pane: &str) -> Result<Pane, String> {
    match pane {
        "left" => Ok(Pane::Left),
        "right" => Ok(Pane::Right),
        other => Err(format!("unknown pane: {other}")),
    }
}

/// Two-pane comparison state.
#[wasm_bindgen]
pub struct WasmCompareMode {
    inner: CompareMode,
}

impl Default for WasmCompareMode {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmCompareMode {
    /// Comparison off, both panes empty.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: CompareMode::new(),
        }
    }

    /// Whether comparison is on.
    #[wasm_bindgen(getter, js_name = isCompareMode)]
    pub fn is_compare_mode(&self) -> bool {
        self.inner.is_enabled()
    }

    /// Turn comparison on.
    pub fn enable(&mut self) {
        self.inner.enable();
    }

    /// Turn comparison off and clear both panes.
    pub fn disable(&mut self) {
        self.inner.disable();
    }

    /// Flip comparison mode.
    pub fn toggle(&mut self) {
        self.inner.toggle();
    }

    /// Put a file into `"left"` or `"right"`.
    #[wasm_bindgen(js_name = setModel)]
    pub fn set_model(&mut self, pane: &str, filename: String, bytes: Vec<u8>) -> Result<(), JsError> {
        let pane = parse_pane(pane).map_err(|e| JsError::new(&e))?;
        self.inner.set_model(pane, CompareModel::new(filename, bytes));
        Ok(())
    }

    /// Empty a pane.
    #[wasm_bindgen(js_name = clearModel)]
    pub fn clear_model(&mut self, pane: &str) -> Result<(), JsError> {
        let pane = parse_pane(pane).map_err(|e| JsError::new(&e))?;
        self.inner.clear_model(pane);
        Ok(())
    }

    /// File name in a pane, if any.
    #[wasm_bindgen(js_name = modelName)]
    pub fn model_name(&self, pane: &str) -> Result<Option<String>, JsError> {
        let pane = parse_pane(pane).map_err(|e| JsError::new(&e))?;
        Ok(self.inner.model(pane).map(|m| m.file_name.clone()))
    }

    /// Decode and measure the model in a pane.
    #[wasm_bindgen(js_name = loadPane)]
    pub fn load_pane(&self, pane: &str) -> Result<WasmModel, JsError> {
        let pane = parse_pane(pane).map_err(|e| JsError::new(&e))?;
        let model = self
            .inner
            .model(pane)
            .ok_or_else(|| JsError::new("pane is empty"))?;
        load_model(&model.file_name, &model.data)
    }
}
