//! Slideshow config WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! const slides = new JsSlideshow();
//! slides.add_files(files.map(f => f.name), files.map(f => f.type));
//! slides.set_duration(0, 10);
//!
//! const text = slides.generate();
//! const blob = new Blob([text], { type: 'text/plain' });
//! // save as JsSlideshow.config_file_name()
//! ```

use crate::types::to_js_error;
use framefit_core::slideshow::{SlideshowConfig, CONFIG_FILE_NAME};
use wasm_bindgen::prelude::*;

/// Slideshow list exposed to JavaScript.
#[wasm_bindgen]
#[derive(Default)]
pub struct JsSlideshow {
    inner: SlideshowConfig,
}

#[wasm_bindgen]
impl JsSlideshow {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsSlideshow {
        JsSlideshow::default()
    }

    /// Name to save the generated config as (`config.txt`).
    pub fn config_file_name() -> String {
        CONFIG_FILE_NAME.to_string()
    }

    /// Add picked files, given their names and MIME types in matching order.
    ///
    /// Non-JPEG files and names already listed are skipped. Returns the number
    /// of slides added; errors if no JPEG was offered or the two lists differ
    /// in length.
    pub fn add_files(
        &mut self,
        file_names: Vec<String>,
        mime_types: Vec<String>,
    ) -> Result<usize, JsValue> {
        if file_names.len() != mime_types.len() {
            return Err(to_js_error(format!(
                "Got {} file names but {} MIME types",
                file_names.len(),
                mime_types.len()
            )));
        }
        let files = file_names
            .iter()
            .zip(mime_types.iter())
            .map(|(name, mime)| (name.as_str(), mime.as_str()));
        self.inner.add_files(files).map_err(to_js_error)
    }

    /// Set the display time of a slide, in seconds (1-999).
    pub fn set_duration(&mut self, index: usize, seconds: u32) -> Result<(), JsValue> {
        self.inner.set_duration(index, seconds).map_err(to_js_error)
    }

    /// Display time of a slide, in seconds.
    pub fn duration(&self, index: usize) -> Option<u32> {
        self.inner.entries().get(index).map(|e| e.duration)
    }

    pub fn remove(&mut self, index: usize) -> Result<(), JsValue> {
        self.inner.remove(index).map(|_| ()).map_err(to_js_error)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Slide file names in order, as a JavaScript array of strings.
    pub fn file_names(&self) -> js_sys::Array {
        self.inner
            .entries()
            .iter()
            .map(|e| JsValue::from_str(&e.file_name))
            .collect()
    }

    /// All slides as plain `{ file_name, duration }` objects.
    pub fn entries(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.entries()).map_err(to_js_error)
    }

    /// Render the config file text. Errors if the list is empty.
    pub fn generate(&self) -> Result<String, JsValue> {
        self.inner.generate().map_err(to_js_error)
    }
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_generate_empty_is_error() {
        assert!(JsSlideshow::new().generate().is_err());
    }

    #[wasm_bindgen_test]
    fn test_only_pngs_is_error() {
        let mut slides = JsSlideshow::new();
        let result = slides.add_files(vec!["a.png".to_string()], vec!["image/png".to_string()]);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_mismatched_lists_are_error() {
        let mut slides = JsSlideshow::new();
        let result = slides.add_files(
            vec!["a.jpg".to_string(), "b.jpg".to_string()],
            vec!["image/jpeg".to_string()],
        );
        assert!(result.is_err());
        assert_eq!(slides.length(), 0);
    }

    #[wasm_bindgen_test]
    fn test_invalid_duration_is_error() {
        let mut slides = JsSlideshow::new();
        slides
            .add_files(vec!["a.jpg".to_string()], vec!["image/jpeg".to_string()])
            .unwrap();
        assert!(slides.set_duration(0, 1000).is_err());
        assert_eq!(slides.duration(0), Some(5));
    }

    #[wasm_bindgen_test]
    fn test_file_names_array() {
        let mut slides = JsSlideshow::new();
        slides
            .add_files(vec!["a.jpg".to_string()], vec!["image/jpeg".to_string()])
            .unwrap();
        let array = slides.file_names();
        assert_eq!(array.length(), 1);
        assert_eq!(array.get(0).as_string().unwrap(), "a.jpg");
    }
}
