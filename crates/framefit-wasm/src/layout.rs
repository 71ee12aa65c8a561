//! Stateless layout binding.
//!
//! Lets a front end that draws with its own 2D canvas reuse the exact
//! scale-to-fit geometry of the core renderer.

use crate::types::{to_js_error, JsLayout};
use framefit_core::transform;
use wasm_bindgen::prelude::*;

/// Compute drawing instructions for a source on a fixed-size canvas.
///
/// # Arguments
///
/// * `source_w`, `source_h` - Source image size in pixels (non-zero)
/// * `target_w`, `target_h` - Canvas size in pixels (non-zero)
/// * `rotation_deg` - One of 0, 90, 180, 270
///
/// # Errors
///
/// Returns an error for zero sizes or any other rotation.
///
/// # Example
///
/// ```typescript
/// const layout = compute_layout(img.width, img.height, 1200, 1600, 90);
/// ```
#[wasm_bindgen]
pub fn compute_layout(
    source_w: u32,
    source_h: u32,
    target_w: u32,
    target_h: u32,
    rotation_deg: i32,
) -> Result<JsLayout, JsValue> {
    transform::compute_layout(source_w, source_h, target_w, target_h, rotation_deg)
        .map(JsLayout::from_layout)
        .map_err(to_js_error)
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_compute_layout_invalid_rotation() {
        assert!(compute_layout(800, 600, 1200, 1600, 45).is_err());
    }

    #[wasm_bindgen_test]
    fn test_compute_layout_zero_source() {
        assert!(compute_layout(0, 600, 1200, 1600, 0).is_err());
    }
}
