//! Quarter-turn rotation state.
//!
//! Rotation is tracked as one of four quarter turns. Positive angles turn the
//! image clockwise on screen, matching a 2D canvas `rotate()` call with the
//! y axis pointing down.

use serde::{Deserialize, Serialize};

use super::LayoutError;

/// Degrees added by a single rotate-left / rotate-right action.
pub const ROTATION_STEP_DEGREES: i32 = 90;

/// Rotation applied to the source image, a multiple of 90°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    /// No rotation.
    #[default]
    Deg0,
    /// A quarter turn clockwise.
    Deg90,
    /// A half turn.
    Deg180,
    /// Three quarter turns clockwise (one counter-clockwise).
    Deg270,
}

impl Rotation {
    /// Build a rotation from a degree value.
    ///
    /// Any multiple of 90 is accepted and normalized into `0..360`, so `-90`
    /// becomes `Deg270` and `450` becomes `Deg90`. Anything else is rejected.
    pub fn from_degrees(degrees: i32) -> Result<Self, LayoutError> {
        if degrees % ROTATION_STEP_DEGREES != 0 {
            return Err(LayoutError::InvalidRotation(degrees));
        }
        Ok(match degrees.rem_euclid(360) {
            0 => Rotation::Deg0,
            90 => Rotation::Deg90,
            180 => Rotation::Deg180,
            _ => Rotation::Deg270,
        })
    }

    /// The rotation in degrees, one of 0, 90, 180 or 270.
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// The rotation in radians (`degrees * π / 180`).
    pub fn radians(self) -> f64 {
        f64::from(self.degrees()) * std::f64::consts::PI / 180.0
    }

    /// Add `delta` degrees, wrapping modulo 360.
    pub fn rotate_by(self, delta: i32) -> Result<Self, LayoutError> {
        if delta % ROTATION_STEP_DEGREES != 0 {
            return Err(LayoutError::InvalidRotation(delta));
        }
        Self::from_degrees((self.degrees() + delta % 360 + 360) % 360)
    }

    /// Rotate one step counter-clockwise.
    pub fn rotate_left(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg270,
            Rotation::Deg90 => Rotation::Deg0,
            Rotation::Deg180 => Rotation::Deg90,
            Rotation::Deg270 => Rotation::Deg180,
        }
    }

    /// Rotate one step clockwise.
    pub fn rotate_right(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Returns true for 90° and 270°, where the drawn box has its sides swapped.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl TryFrom<i32> for Rotation {
    type Error = LayoutError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
