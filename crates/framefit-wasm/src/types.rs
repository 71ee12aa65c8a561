//! WASM-compatible wrapper types.
//!
//! These wrap core framefit values in JavaScript-friendly classes and convert
//! core errors into `JsValue`s.

use framefit_core::session::SourceInfo;
use framefit_core::Layout;
use wasm_bindgen::prelude::*;

/// Convert an error into a `JsValue` string, logging it to the console.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    let message = JsValue::from_str(&err.to_string());
    web_sys::console::error_1(&message);
    message
}

/// Drawing instructions for one frame.
///
/// Offsets are relative to the canvas center, to be used after translating to
/// the center and rotating by `rotation_radians`:
///
/// ```typescript
/// ctx.translate(layout.target_width / 2, layout.target_height / 2);
/// ctx.rotate(layout.rotation_radians);
/// ctx.drawImage(img, layout.draw_x, layout.draw_y, layout.draw_w, layout.draw_h);
/// ```
#[wasm_bindgen]
pub struct JsLayout {
    inner: Layout,
}

#[wasm_bindgen]
impl JsLayout {
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.scale
    }

    #[wasm_bindgen(getter)]
    pub fn draw_x(&self) -> f64 {
        self.inner.draw_x
    }

    #[wasm_bindgen(getter)]
    pub fn draw_y(&self) -> f64 {
        self.inner.draw_y
    }

    #[wasm_bindgen(getter)]
    pub fn draw_w(&self) -> f64 {
        self.inner.draw_w
    }

    #[wasm_bindgen(getter)]
    pub fn draw_h(&self) -> f64 {
        self.inner.draw_h
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_radians(&self) -> f64 {
        self.inner.rotation_radians
    }

    #[wasm_bindgen(getter)]
    pub fn target_width(&self) -> u32 {
        self.inner.target.width
    }

    #[wasm_bindgen(getter)]
    pub fn target_height(&self) -> u32 {
        self.inner.target.height
    }

    /// Serialize to a plain JavaScript object.
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(to_js_error)
    }
}

impl JsLayout {
    pub(crate) fn from_layout(inner: Layout) -> Self {
        Self { inner }
    }
}

/// File details for the info panel.
#[wasm_bindgen]
pub struct JsSourceInfo {
    inner: SourceInfo,
}

#[wasm_bindgen]
impl JsSourceInfo {
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.inner.file_name.clone()
    }

    /// Human-readable size, e.g. `1.5 MB`.
    #[wasm_bindgen(getter)]
    pub fn file_size(&self) -> String {
        self.inner.file_size.clone()
    }

    /// Unrotated resolution, e.g. `800 x 600`.
    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> String {
        self.inner.resolution.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.inner.format.clone()
    }

    /// `Already correct size` or `Resizing required`.
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.inner.status.label().to_string()
    }

    /// True when no resizing is needed at the current rotation.
    #[wasm_bindgen(getter)]
    pub fn is_target_size(&self) -> bool {
        matches!(
            self.inner.status,
            framefit_core::session::FrameStatus::AlreadyTargetSize
        )
    }
}

impl JsSourceInfo {
    pub(crate) fn from_info(inner: SourceInfo) -> Self {
        Self { inner }
    }
}
