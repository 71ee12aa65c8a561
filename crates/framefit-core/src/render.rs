//! Letterbox rasterization.
//!
//! Executes a [`Layout`] onto a fixed-size canvas:
//!
//! 1. Allocate a `target_w x target_h` canvas
//! 2. Fill it with the white background
//! 3. Resample the source to the layout's drawn size
//! 4. Turn it by the rotation, clockwise, about its center
//! 5. Composite it centered on the canvas (alpha over white)
//! 6. Encode as JPEG at quality 92
//!
//! Steps 3-5 match a 2D canvas that is translated to its center, rotated, and
//! drawn into at `(draw_x, draw_y)`. For quarter turns the rotation is an
//! exact pixel permutation, so no second resampling happens.

use image::{imageops, Rgba, RgbaImage};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::decode::{resize, DecodeError, DecodedImage, FilterType};
use crate::encode::{encode_rgb_image, EncodeError, JPEG_MIME_TYPE, JPEG_QUALITY};
use crate::transform::{Layout, LayoutError, Rotation, TargetSpec};

/// Canvas background, `#FFFFFF`.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Errors raised while rasterizing or encoding a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Resampling the source failed.
    #[error("Failed to scale source image: {0}")]
    Scale(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The layout was computed for a different source size.
    #[error("Layout is for a {expected_w}x{expected_h} source, got {actual_w}x{actual_h}")]
    SourceMismatch {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },
}

/// An encoded frame.
///
/// The frame owns its JPEG buffer. Dropping it releases the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderResult {
    /// Always equal to the target width.
    pub width: u32,
    /// Always equal to the target height.
    pub height: u32,
    /// JPEG quality the frame was encoded with.
    pub quality: u8,
    /// Encoded JPEG bytes.
    pub bytes: Vec<u8>,
}

impl RenderResult {
    pub fn mime_type(&self) -> &'static str {
        JPEG_MIME_TYPE
    }

    /// Size of the encoded buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Rasterize `image` according to `layout`, without encoding.
///
/// The returned canvas is always exactly the layout's target size.
pub fn rasterize(image: &DecodedImage, layout: &Layout) -> Result<RgbaImage, RenderError> {
    if image.dimensions() != layout.source {
        return Err(RenderError::SourceMismatch {
            expected_w: layout.source.width,
            expected_h: layout.source.height,
            actual_w: image.width,
            actual_h: image.height,
        });
    }

    let target = layout.target;
    if layout.is_identity() && !image.has_transparency() {
        debug!(target = %target, "Source already at target size");
        return image.to_rgba_image().ok_or_else(|| {
            DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()).into()
        });
    }

    let mut canvas = RgbaImage::from_pixel(target.width, target.height, BACKGROUND);

    let size = layout.pixel_size();
    let scaled = resize(image, size.width, size.height, FilterType::Bilinear)?
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let turned = match layout.rotation {
        Rotation::Deg0 => scaled,
        Rotation::Deg90 => imageops::rotate90(&scaled),
        Rotation::Deg180 => imageops::rotate180(&scaled),
        Rotation::Deg270 => imageops::rotate270(&scaled),
    };

    let (x, y) = layout.origin();
    imageops::overlay(&mut canvas, &turned, x, y);

    debug!(
        target = %target,
        drawn_w = turned.width(),
        drawn_h = turned.height(),
        x,
        y,
        "Rasterized frame"
    );

    Ok(canvas)
}

/// Lay out, rasterize and encode `image` onto a `target` canvas.
pub fn render(
    image: &DecodedImage,
    target: TargetSpec,
    rotation: Rotation,
) -> Result<RenderResult, RenderError> {
    let layout = Layout::compute(image.dimensions(), target, rotation)?;
    render_layout(image, &layout)
}

/// Rasterize and encode `image` with a precomputed layout.
pub fn render_layout(image: &DecodedImage, layout: &Layout) -> Result<RenderResult, RenderError> {
    let canvas = rasterize(image, layout)?;
    let rgb = image::DynamicImage::ImageRgba8(canvas).into_rgb8();
    let bytes = encode_rgb_image(&rgb, JPEG_QUALITY)?;

    debug!(
        target = %layout.target,
        rotation = layout.rotation.degrees(),
        bytes = bytes.len(),
        "Encoded frame"
    );

    Ok(RenderResult {
        width: layout.target.width,
        height: layout.target.height,
        quality: JPEG_QUALITY,
        bytes,
    })
}
