//! Image encoding for framefit.
//!
//! Framed output is encoded as JPEG at a fixed quality of 92.
//!
//! # Examples
//!
//! ```ignore
//! use framefit_core::encode::{encode_jpeg, JPEG_QUALITY};
//!
//! let pixels = vec![255u8; 1200 * 1600 * 3]; // White canvas
//! let jpeg_bytes = encode_jpeg(&pixels, 1200, 1600, JPEG_QUALITY).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, encode_rgb_image, EncodeError, JPEG_MIME_TYPE, JPEG_QUALITY};
