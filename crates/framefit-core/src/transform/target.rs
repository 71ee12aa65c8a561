//! Source and target sizes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::LayoutError;

/// Pixel dimensions of a decoded source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Dimensions with the sides swapped when `swap` is set.
    pub fn swapped_if(self, swap: bool) -> Self {
        if swap {
            Self::new(self.height, self.width)
        } else {
            self
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Fixed output canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetSpec {
    pub width: u32,
    pub height: u32,
}

impl TargetSpec {
    /// Portrait photo frame preset.
    pub const PORTRAIT_1200X1600: TargetSpec = TargetSpec {
        width: 1200,
        height: 1600,
    };

    /// Landscape QHD display preset.
    pub const LANDSCAPE_2560X1440: TargetSpec = TargetSpec {
        width: 2560,
        height: 1440,
    };

    /// All built-in presets, in the order a picker lists them.
    pub const PRESETS: [TargetSpec; 2] = [Self::PORTRAIT_1200X1600, Self::LANDSCAPE_2560X1440];

    /// Create a target size. Both sides must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::InvalidTarget { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn dimensions(self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self::PORTRAIT_1200X1600
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses the `"WxH"` form used by size pickers, e.g. `"2560x1440"`.
impl FromStr for TargetSpec {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LayoutError::InvalidTargetString(s.to_string());
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
        Self::new(width, height)
    }
}
