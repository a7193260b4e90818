//! LayoutGridUseCase: lays the installed apps out on the viewport.
//!
//! The configured icon size is in density-independent pixels, while the grid
//! works in physical pixels, so this use case needs the display density.  It
//! reads it through the [`DisplayMetrics`] trait; the infrastructure layer
//! supplies the real implementation and tests supply a mock.
//!
//! [`compute_grid`] accepts any input and will happily produce a grid full of
//! NaNs for a zero-sized viewport.  [`layout_grid`] is where those inputs are
//! turned away.

use lens_core::{compute_grid, Density, Grid, LensSettings};
use thiserror::Error;
use tracing::debug;

/// Error type for grid layout.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// The viewport has no area.
    #[error("viewport must have a non-zero size, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    /// The icon size after density conversion is not a positive number.
    #[error("icon size must be positive, got {0}px")]
    InvalidIconSize(f32),
}

/// Source of the display density.
///
/// Implementations query the host display; the value may change when the
/// launcher moves to another screen, so it is read on every layout.
#[cfg_attr(test, mockall::automock)]
pub trait DisplayMetrics {
    /// Dots per inch of the display the launcher is shown on.
    fn density_dpi(&self) -> u32;
}

/// What to lay out and where.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest {
    /// Viewport width in physical pixels.
    pub viewport_width: u32,
    /// Viewport height in physical pixels.
    pub viewport_height: u32,
    /// Number of apps to show.
    pub item_count: usize,
    /// Minimum gap between the top of the viewport and the first row, in
    /// physical pixels.
    pub desired_top_offset: i32,
}

/// Builds the grid for `request` using the icon size from `settings`.
///
/// # Errors
///
/// Returns [`LayoutError::EmptyViewport`] if either viewport dimension is
/// zero, and [`LayoutError::InvalidIconSize`] if the converted icon size is
/// zero, negative or not finite.
pub fn layout_grid(
    request: &LayoutRequest,
    settings: &LensSettings,
    metrics: &dyn DisplayMetrics,
) -> Result<Grid, LayoutError> {
    if request.viewport_width == 0 || request.viewport_height == 0 {
        return Err(LayoutError::EmptyViewport {
            width: request.viewport_width,
            height: request.viewport_height,
        });
    }

    let density = Density::from_dpi(metrics.density_dpi());
    let item_size = density.dp_to_px(settings.min_icon_size);
    if !(item_size.is_finite() && item_size > 0.0) {
        return Err(LayoutError::InvalidIconSize(item_size));
    }

    let grid = compute_grid(
        request.viewport_width,
        request.viewport_height,
        request.item_count,
        item_size,
        request.desired_top_offset,
    );
    debug!(
        "laid out {} items on a {}x{} grid ({}px icons, spacing {:.1}x{:.1})",
        grid.item_count,
        grid.item_count_horizontal,
        grid.item_count_vertical,
        grid.item_size,
        grid.spacing_horizontal,
        grid.spacing_vertical
    );
    Ok(grid)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
