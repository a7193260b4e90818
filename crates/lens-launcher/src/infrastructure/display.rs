//! Display metrics adapters.
//!
//! The launcher binary has no window system to ask, so the density comes from
//! the command line (or falls back to the 160 dpi baseline).  Embedders with a
//! real display implement [`DisplayMetrics`] themselves.

use lens_core::domain::density::BASELINE_DPI;

use crate::application::layout_grid::DisplayMetrics;

/// Display metrics with a fixed density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDisplayMetrics {
    pub dpi: u32,
}

impl FixedDisplayMetrics {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }
}

impl Default for FixedDisplayMetrics {
    fn default() -> Self {
        Self { dpi: BASELINE_DPI }
    }
}

impl DisplayMetrics for FixedDisplayMetrics {
    fn density_dpi(&self) -> u32 {
        self.dpi
    }
}
