//! Framing session WASM bindings.
//!
//! One `JsSession` per open editor. Each call that changes the source,
//! rotation or target size returns the freshly encoded JPEG; the session keeps
//! only the latest frame.
//!
//! # Example
//!
//! ```typescript
//! const session = new JsSession();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! let jpeg = session.load_file(file.name, file.type, bytes);
//!
//! jpeg = session.rotate_right();
//! jpeg = session.set_target_size("2560x1440");
//!
//! const blob = new Blob([jpeg], { type: 'image/jpeg' });
//! const name = session.download_file_name(input.value);
//! ```

use crate::types::{to_js_error, JsSourceInfo};
use framefit_core::decode::{DecodeError, SourceFormat};
use framefit_core::{RenderResult, Session, TargetSpec};
use wasm_bindgen::prelude::*;

/// Framing state exposed to JavaScript.
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsSession {
    /// Create a session targeting the default 1200x1600 frame.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsSession {
        JsSession {
            inner: Session::default(),
        }
    }

    /// Create a session for a `"WxH"` target size.
    pub fn with_target_size(size: &str) -> Result<JsSession, JsValue> {
        let target: TargetSpec = size.parse().map_err(to_js_error)?;
        Ok(JsSession {
            inner: Session::new(target),
        })
    }

    /// Load a picked file and return the framed JPEG.
    ///
    /// `mime_type` is the browser's `File.type`; an empty string skips the
    /// check and relies on content sniffing alone. On error the previous
    /// image and frame are kept.
    pub fn load_file(
        &mut self,
        file_name: &str,
        mime_type: &str,
        bytes: &[u8],
    ) -> Result<Vec<u8>, JsValue> {
        if !mime_type.is_empty() && SourceFormat::from_mime_type(mime_type).is_none() {
            return Err(to_js_error(DecodeError::UnsupportedFormat(
                mime_type.to_string(),
            )));
        }
        self.inner
            .load(file_name, bytes)
            .map(frame_bytes)
            .map_err(to_js_error)
    }

    /// Rotate 90° counter-clockwise and return the new JPEG.
    pub fn rotate_left(&mut self) -> Result<Vec<u8>, JsValue> {
        self.inner.rotate_left().map(frame_bytes).map_err(to_js_error)
    }

    /// Rotate 90° clockwise and return the new JPEG.
    pub fn rotate_right(&mut self) -> Result<Vec<u8>, JsValue> {
        self.inner.rotate_right().map(frame_bytes).map_err(to_js_error)
    }

    /// Change the target to a `"WxH"` size.
    ///
    /// Returns the re-rendered JPEG, or `undefined` if no image is loaded.
    pub fn set_target_size(&mut self, size: &str) -> Result<Option<Vec<u8>>, JsValue> {
        let target: TargetSpec = size.parse().map_err(to_js_error)?;
        self.inner
            .set_target(target)
            .map(|result| result.map(frame_bytes))
            .map_err(to_js_error)
    }

    /// Forget the image and frame; rotation goes back to 0°.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Current rotation in degrees (0, 90, 180 or 270).
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> i32 {
        self.inner.rotation().degrees()
    }

    /// Rotation formatted for display, e.g. `90°`.
    #[wasm_bindgen(getter)]
    pub fn rotation_label(&self) -> String {
        self.inner.rotation().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn target_width(&self) -> u32 {
        self.inner.target().width
    }

    #[wasm_bindgen(getter)]
    pub fn target_height(&self) -> u32 {
        self.inner.target().height
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.source().is_some()
    }

    /// The latest framed JPEG, if any.
    pub fn jpeg_bytes(&self) -> Option<Vec<u8>> {
        self.inner.result().map(frame_bytes)
    }

    pub fn source_info(&self) -> Option<JsSourceInfo> {
        self.inner.source_info().map(JsSourceInfo::from_info)
    }

    /// Default name for the download field, e.g. `holiday_1200x1600`.
    pub fn suggested_file_stem(&self) -> Option<String> {
        self.inner.suggested_file_stem()
    }

    /// File name to save the frame under, given the text in the name field.
    pub fn download_file_name(&self, user_input: &str) -> Option<String> {
        self.inner.download_file_name(user_input)
    }
}

impl Default for JsSession {
    fn default() -> Self {
        Self::new()
    }
}

fn frame_bytes(result: &RenderResult) -> Vec<u8> {
    result.bytes.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([20, 40, 60, 255]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    fn small_session() -> JsSession {
        JsSession {
            inner: Session::new(TargetSpec::new(120, 160).unwrap()),
        }
    }

    #[test]
    fn test_new_session_defaults() {
        let session = JsSession::new();
        assert_eq!(session.rotation(), 0);
        assert_eq!(session.target_width(), 1200);
        assert_eq!(session.target_height(), 1600);
        assert!(!session.has_image());
        assert!(session.jpeg_bytes().is_none());
    }

    #[test]
    fn test_load_and_rotate() {
        let mut session = small_session();
        let jpeg = session.load_file("cat.png", "image/png", &png(80, 60)).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert!(session.has_image());

        session.rotate_left().unwrap();
        assert_eq!(session.rotation(), 270);
        assert_eq!(session.rotation_label(), "270°");
        let latest = session.jpeg_bytes().unwrap();
        assert_eq!(&latest[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_set_target_size() {
        let mut session = small_session();
        assert!(session.set_target_size("256x144").unwrap().is_none());

        session.load_file("cat.png", "", &png(80, 60)).unwrap();
        let jpeg = session.set_target_size("120x160").unwrap().unwrap();
        assert!(!jpeg.is_empty());
        assert_eq!(session.target_width(), 120);
    }

    #[test]
    fn test_download_names() {
        let mut session = small_session();
        session.load_file("cat.png", "image/png", &png(80, 60)).unwrap();

        assert_eq!(session.suggested_file_stem().unwrap(), "cat_120x160");
        assert_eq!(session.download_file_name("").unwrap(), "cat_120x160.jpg");
        assert_eq!(session.download_file_name("mine.webp").unwrap(), "mine.jpg");
    }

    #[test]
    fn test_source_info_and_reset() {
        let mut session = small_session();
        session.load_file("cat.png", "image/png", &png(80, 60)).unwrap();

        let info = session.source_info().unwrap();
        assert_eq!(info.resolution(), "80 x 60");
        assert_eq!(info.format(), "PNG");

        session.reset();
        assert!(!session.has_image());
        assert!(session.source_info().is_none());
    }
}
