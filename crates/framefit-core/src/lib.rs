//! framefit Core - Fixed-size photo frame rendering
//!
//! This crate turns an arbitrary WebP, JPEG, GIF or PNG image into a JPEG of
//! an exact size (e.g. 1200x1600 or 2560x1440): scaled to fit, optionally
//! turned in 90° steps, and letterboxed on white. It also builds the plain-text
//! slideshow config that lists JPEGs and their display durations.
//!
//! # Modules
//!
//! - `transform` - Rotation state, target presets and the scale-to-fit layout
//! - `decode` - Format detection, decoding and resizing
//! - `render` - Rasterizes a layout onto the canvas and encodes it
//! - `encode` - JPEG encoding
//! - `session` - Per-user framing state
//! - `slideshow` - Slideshow config builder

pub mod decode;
pub mod encode;
pub mod render;
pub mod session;
pub mod slideshow;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_support;

pub use render::{render, RenderError, RenderResult};
pub use session::{Session, SessionError, SourceInfo};
pub use slideshow::{SlideEntry, SlideshowConfig, SlideshowError};
pub use transform::{compute_layout, Dimensions, Layout, LayoutError, Rotation, TargetSpec};
