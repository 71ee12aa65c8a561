//! framefit WASM - WebAssembly bindings for framefit
//!
//! This crate exposes the framefit-core session and slideshow builder to the
//! browser front end, which owns file picking, previews and downloads.
//!
//! # Module Structure
//!
//! - `session` - `JsSession`: load, rotate, resize and download naming
//! - `slideshow` - `JsSlideshow`: slideshow config builder
//! - `layout` - stateless `compute_layout`
//! - `types` - JS wrapper types and error conversion
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSession } from '@framefit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsSession();
//! const jpeg = session.load_file(file.name, file.type, new Uint8Array(await file.arrayBuffer()));
//! console.log(`Framed ${session.target_width}x${session.target_height}`);
//! ```

use wasm_bindgen::prelude::*;

mod layout;
mod session;
mod slideshow;
mod types;

// Re-export public types
pub use layout::compute_layout;
pub use session::JsSession;
pub use slideshow::JsSlideshow;
pub use types::{JsLayout, JsSourceInfo};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Target size presets as `"WxH"` strings, in picker order.
#[wasm_bindgen]
pub fn target_presets() -> Vec<String> {
    framefit_core::TargetSpec::PRESETS
        .iter()
        .map(|t| t.to_string())
        .collect()
}
