//! Layout of a source image on a fixed-size canvas.
//!
//! This module owns the geometry: the quarter-turn [`Rotation`] state, the
//! [`TargetSpec`] canvas presets, and [`Layout`], the scale-to-fit drawing
//! instructions the rasterizer executes.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downwards
//! - Positive rotation is clockwise on screen
//! - Layout offsets are relative to the canvas center

mod layout;
mod rotation;
mod target;

pub use layout::{compute_layout, Layout, LayoutError};
pub use rotation::{Rotation, ROTATION_STEP_DEGREES};
pub use target::{Dimensions, TargetSpec};
