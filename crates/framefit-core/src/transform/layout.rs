//! Scale-to-fit layout for a fixed-size canvas.
//!
//! # Algorithm
//!
//! The scale is computed from the **unrotated** source against the target:
//!
//! ```text
//! scale = min(target_w / source_w, target_h / source_h)
//! draw  = source * scale
//! (x, y) = (-draw_w / 2, -draw_h / 2)   relative to the canvas center
//! ```
//!
//! The rasterizer translates to the canvas center, rotates, and draws the
//! scaled image at `(x, y)`. The rotated box is never re-fit, so at 90° and
//! 270° the content can leave extra margin on one axis or be clipped on the
//! other. Callers rely on that exact output.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::{Dimensions, Rotation, TargetSpec};

/// Errors for layout inputs outside the supported domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Source width or height is zero.
    #[error("Invalid source dimensions: {width}x{height}")]
    InvalidSource { width: u32, height: u32 },

    /// Target width or height is zero.
    #[error("Invalid target dimensions: {width}x{height}")]
    InvalidTarget { width: u32, height: u32 },

    /// Target string is not of the form `WxH`.
    #[error("Invalid target size '{0}', expected WIDTHxHEIGHT")]
    InvalidTargetString(String),

    /// Rotation is not a multiple of 90 degrees.
    #[error("Invalid rotation {0}°, must be a multiple of 90")]
    InvalidRotation(i32),
}

/// Drawing instructions for one render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    /// Canvas the instructions draw into.
    pub target: TargetSpec,
    /// Unrotated source size the scale was computed from.
    pub source: Dimensions,
    pub rotation: Rotation,
    /// Uniform scale factor applied to the source.
    pub scale: f64,
    /// Draw offset from the canvas center, before rotation is undone.
    pub draw_x: f64,
    pub draw_y: f64,
    /// Scaled source size.
    pub draw_w: f64,
    pub draw_h: f64,
    pub rotation_radians: f64,
}

impl Layout {
    /// Compute the layout for a source, target and rotation.
    pub fn compute(
        source: Dimensions,
        target: TargetSpec,
        rotation: Rotation,
    ) -> Result<Self, LayoutError> {
        if source.width == 0 || source.height == 0 {
            return Err(LayoutError::InvalidSource {
                width: source.width,
                height: source.height,
            });
        }
        if target.width == 0 || target.height == 0 {
            return Err(LayoutError::InvalidTarget {
                width: target.width,
                height: target.height,
            });
        }

        let (src_w, src_h) = (f64::from(source.width), f64::from(source.height));
        let (dst_w, dst_h) = (f64::from(target.width), f64::from(target.height));

        let scale = (dst_w / src_w).min(dst_h / src_h);
        let draw_w = src_w * scale;
        let draw_h = src_h * scale;

        let layout = Self {
            target,
            source,
            rotation,
            scale,
            draw_x: -draw_w / 2.0,
            draw_y: -draw_h / 2.0,
            draw_w,
            draw_h,
            rotation_radians: rotation.radians(),
        };

        debug!(
            rotation = rotation.degrees(),
            source = %source,
            target = %target,
            scale,
            draw_w,
            draw_h,
            draw_x = layout.draw_x,
            draw_y = layout.draw_y,
            "Computed layout"
        );

        Ok(layout)
    }

    /// Integer size the source is resampled to, at least 1x1.
    pub fn pixel_size(&self) -> Dimensions {
        Dimensions::new(
            (self.draw_w.round() as u32).max(1),
            (self.draw_h.round() as u32).max(1),
        )
    }

    /// Size of the drawn box once rotated onto the canvas.
    pub fn rotated_extent(&self) -> Dimensions {
        self.pixel_size()
            .swapped_if(self.rotation.swaps_dimensions())
    }

    /// Canvas position of the top-left corner of the rotated box.
    ///
    /// Negative when the rotated box overflows the canvas on that axis.
    pub fn origin(&self) -> (i64, i64) {
        let extent = self.rotated_extent();
        let x = (f64::from(self.target.width) - f64::from(extent.width)) / 2.0;
        let y = (f64::from(self.target.height) - f64::from(extent.height)) / 2.0;
        (x.round() as i64, y.round() as i64)
    }

    /// Returns true when the source already matches the target and needs no work.
    pub fn is_identity(&self) -> bool {
        self.rotation == Rotation::Deg0
            && self.source.width == self.target.width
            && self.source.height == self.target.height
    }
}

/// Compute a layout from raw numbers.
///
/// Validates every precondition and fails fast on zero sizes or a rotation
/// that is not 0, 90, 180 or 270.
pub fn compute_layout(
    source_w: u32,
    source_h: u32,
    target_w: u32,
    target_h: u32,
    rotation_deg: i32,
) -> Result<Layout, LayoutError> {
    if !matches!(rotation_deg, 0 | 90 | 180 | 270) {
        return Err(LayoutError::InvalidRotation(rotation_deg));
    }
    let rotation = Rotation::from_degrees(rotation_deg)?;
    let target = TargetSpec::new(target_w, target_h)?;
    Layout::compute(Dimensions::new(source_w, source_h), target, rotation)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
