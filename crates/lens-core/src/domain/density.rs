//! Density-independent pixel conversion.
//!
//! Settings such as the icon size are stored in density-independent pixels
//! (dp) so they look the same on screens with different pixel densities.  One
//! dp is one physical pixel on a 160 dpi screen.

use serde::{Deserialize, Serialize};

/// Dots per inch at which one dp equals one physical pixel.
pub const BASELINE_DPI: u32 = 160;

/// Ratio of physical pixels to density-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density {
    pub ratio: f32,
}

impl Density {
    pub fn new(ratio: f32) -> Self {
        Self { ratio }
    }

    /// Density of a screen reporting `dpi` dots per inch.
    pub fn from_dpi(dpi: u32) -> Self {
        Self {
            ratio: dpi as f32 / BASELINE_DPI as f32,
        }
    }

    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.ratio
    }

    pub fn px_to_dp(&self, px: f32) -> f32 {
        px / self.ratio
    }
}

impl Default for Density {
    fn default() -> Self {
        Self { ratio: 1.0 }
    }
}
