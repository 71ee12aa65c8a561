//! Image decoding for framefit.
//!
//! This module provides functionality for:
//! - Detecting and validating the input format (WebP, JPEG, GIF, PNG)
//! - Decoding to RGBA with EXIF orientation applied
//! - Image resizing
//!
//! # Architecture
//!
//! Decoding is designed to be called from the browser via WASM bindings.
//! All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use framefit_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let (format, image) = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} {}", image.width, image.height, format.display_name());
//! ```

mod reader;
mod resize;
mod types;

pub use reader::{decode_image, detect_format};
pub use resize::resize;
pub use types::{format_label, DecodeError, DecodedImage, FilterType, Orientation, SourceFormat};
