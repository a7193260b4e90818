//! Equispaced grid layout.
//!
//! The grid places `item_count` square slots of a fixed size inside a
//! viewport.  The number of columns and rows follows the viewport's aspect
//! ratio so that the slots stay roughly evenly distributed on both portrait and
//! landscape screens.  Whatever space the slots do not use is shared out as
//! spacing between them.
//!
//! # Worked example (for beginners)
//!
//! A 1080×1920 portrait phone showing 9 apps:
//!
//! ```text
//! m       = sqrt(9)                = 3
//! columns = ceil(3 * 1080 / 1920)  = ceil(1.6875) = 2
//! rows    = ceil(3 * 1920 / 1080)  = ceil(5.333)  = 6
//! ```
//!
//! so the apps land on a 2×6 grid, not the 3×3 one might expect.  The grid
//! has room for 12 slots; the last row is only partly filled, and
//! [`grid_vertical_offset`] recentres the rows that are actually used.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Description of an equispaced grid of square slots.
///
/// A `Grid` is an immutable value: recompute it with [`compute_grid`] whenever
/// the viewport or the item count changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Number of items to place.
    pub item_count: usize,
    /// Number of columns.
    pub item_count_horizontal: usize,
    /// Number of rows.
    pub item_count_vertical: usize,
    /// Side length of every slot in physical pixels.
    pub item_size: f32,
    /// Gap between horizontally adjacent slots (and the outer margins).
    /// Negative when the slots overflow the viewport width.
    pub spacing_horizontal: f32,
    /// Gap between vertically adjacent slots.
    pub spacing_vertical: f32,
}

impl Grid {
    /// Total number of slots the grid has room for (`columns * rows`).
    pub fn slot_count(&self) -> usize {
        self.item_count_horizontal * self.item_count_vertical
    }

    /// Number of rows that actually hold at least one item.
    ///
    /// Returns 0 for an empty grid.  Non-empty grids always have at least one
    /// column, so the division is safe.
    pub fn used_rows(&self) -> usize {
        if self.item_count == 0 || self.item_count_horizontal == 0 {
            return 0;
        }
        self.item_count.div_ceil(self.item_count_horizontal)
    }
}

/// Computes the grid for a `viewport_width` × `viewport_height` viewport.
///
/// `min_item_size` is the slot side in physical pixels and is used as-is:
/// slots are never shrunk to fit, the spacing absorbs the difference (and goes
/// negative when the slots overflow).
///
/// `desired_top_offset` is the minimum top margin in pixels.  When the
/// naturally centred grid would start closer to the top than that, the
/// vertical spacing is recomputed so that the top margin equals
/// `desired_top_offset`.
///
/// Callers must pass a non-zero viewport.  With `item_count == 0` the grid
/// has zero columns and rows; its vertical spacing may then be non-finite.
pub fn compute_grid(
    viewport_width: u32,
    viewport_height: u32,
    item_count: usize,
    min_item_size: f32,
    desired_top_offset: i32,
) -> Grid {
    let width = f64::from(viewport_width);
    let height = f64::from(viewport_height);
    let multiplier = (item_count as f64).sqrt();
    let columns = (multiplier * (width / height)).ceil() as usize;
    let rows = (multiplier * (height / width)).ceil() as usize;

    let item_size = min_item_size;
    let width = viewport_width as f32;
    let height = viewport_height as f32;

    let spacing_horizontal = (width - columns as f32 * item_size) / (columns + 1) as f32;

    let natural_spacing_vertical = (height - rows as f32 * item_size) / (rows + 1) as f32;
    // Whole-pixel margin; `as` truncates toward zero.
    let current_offset =
        ((height - rows as f32 * (item_size + natural_spacing_vertical)) / 2.0) as i32;
    let spacing_vertical = if current_offset < desired_top_offset {
        (height - 2.0 * desired_top_offset as f32) / rows as f32 - item_size
    } else {
        natural_spacing_vertical
    };

    trace!(
        columns,
        rows,
        item_size,
        spacing_horizontal,
        spacing_vertical,
        current_offset,
        "computed grid for {viewport_width}x{viewport_height} with {item_count} items"
    );

    Grid {
        item_count,
        item_count_horizontal: columns,
        item_count_vertical: rows,
        item_size,
        spacing_horizontal,
        spacing_vertical,
    }
}

/// Returns how far the whole grid must move down to centre the rows that are
/// actually used.
///
/// A grid reserves `item_count_vertical` rows but the last ones may be empty.
/// This averages the top margin (`spacing_vertical`) with the margin left
/// below the last used row and returns the difference from the current top
/// margin.  Returns exactly `0.0` for an empty grid.
pub fn grid_vertical_offset(grid: &Grid, viewport_height: f32) -> f32 {
    if grid.item_count == 0 {
        return 0.0;
    }
    let offset_top = grid.spacing_vertical;
    let used_rows = (grid.item_count as f32 / grid.item_count_horizontal as f32).ceil();
    let offset_bottom = viewport_height - used_rows * (grid.spacing_vertical + grid.item_size);
    let offset_average = (offset_top + offset_bottom) / 2.0;
    offset_average - offset_top
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    // ── compute_grid: counts ──────────────────────────────────────────────────

    #[test]
    fn test_compute_grid_portrait_nine_items_is_two_by_six() {
        let grid = compute_grid(1080, 1920, 9, 60.0, 100);
        assert_eq!(grid.item_count, 9);
        assert_eq!(grid.item_count_horizontal, 2);
        assert_eq!(grid.item_count_vertical, 6);
    }

    #[test]
    fn test_compute_grid_square_viewport_perfect_square_count_is_square() {
        for side in 1..=8usize {
            let grid = compute_grid(1000, 1000, side * side, 50.0, 0);
            assert_eq!(grid.item_count_horizontal, side);
            assert_eq!(grid.item_count_vertical, side);
        }
    }

    #[test]
    fn test_compute_grid_always_has_room_for_every_item() {
        let viewports = [(1080, 1920), (1920, 1080), (720, 1280), (1000, 1000), (300, 2000)];
        for &(w, h) in &viewports {
            for count in 1..=200 {
                let grid = compute_grid(w, h, count, 40.0, 50);
                assert!(
                    grid.slot_count() >= count,
                    "{w}x{h} with {count} items gave only {} slots",
                    grid.slot_count()
                );
            }
        }
    }

    #[test]
    fn test_compute_grid_landscape_swaps_columns_and_rows() {
        let portrait = compute_grid(1080, 1920, 9, 60.0, 0);
        let landscape = compute_grid(1920, 1080, 9, 60.0, 0);
        assert_eq!(portrait.item_count_horizontal, landscape.item_count_vertical);
        assert_eq!(portrait.item_count_vertical, landscape.item_count_horizontal);
    }

    #[test]
    fn test_compute_grid_zero_items_has_zero_columns_and_rows() {
        let grid = compute_grid(1080, 1920, 0, 60.0, 0);
        assert_eq!(grid.item_count_horizontal, 0);
        assert_eq!(grid.item_count_vertical, 0);
        assert_eq!(grid.slot_count(), 0);
        assert_eq!(grid.used_rows(), 0);
    }

    // ── compute_grid: spacing ─────────────────────────────────────────────────

    #[test]
    fn test_compute_grid_item_size_is_min_item_size() {
        let grid = compute_grid(1080, 1920, 40, 72.5, 0);
        assert_eq!(grid.item_size, 72.5);
    }

    #[test]
    fn test_compute_grid_horizontal_spacing_divides_leftover_width() {
        // (1080 - 2 * 60) / 3 = 320
        let grid = compute_grid(1080, 1920, 9, 60.0, 100);
        assert!(approx_eq(grid.spacing_horizontal, 320.0));
    }

    #[test]
    fn test_compute_grid_keeps_natural_vertical_spacing_when_margin_is_large_enough() {
        // natural = (1920 - 6 * 60) / 7 ≈ 222.857, top margin ≈ 111 >= 100
        let grid = compute_grid(1080, 1920, 9, 60.0, 100);
        assert!(approx_eq(grid.spacing_vertical, 1560.0 / 7.0));
    }

    #[test]
    fn test_compute_grid_overrides_vertical_spacing_to_honour_top_offset() {
        // top margin ≈ 111 < 200, so spacing = (1920 - 400) / 6 - 60
        let grid = compute_grid(1080, 1920, 9, 60.0, 200);
        assert!(approx_eq(grid.spacing_vertical, 1520.0 / 6.0 - 60.0));
    }

    #[test]
    fn test_compute_grid_margin_equal_to_desired_keeps_natural_spacing() {
        // natural = (1000 - 100) / 2 = 450, margin = (1000 - 550) / 2 = 225
        let at_threshold = compute_grid(1000, 1000, 1, 100.0, 225);
        assert!(approx_eq(at_threshold.spacing_vertical, 450.0));

        let above_threshold = compute_grid(1000, 1000, 1, 100.0, 226);
        assert!(approx_eq(above_threshold.spacing_vertical, 1000.0 - 452.0 - 100.0));
    }

    #[test]
    fn test_compute_grid_compares_against_truncated_margin() {
        // natural = (1000 - 1001) / 2 = -0.5, margin = -0.25 which truncates to 0
        let grid = compute_grid(1000, 1000, 1, 1001.0, 0);
        assert!(approx_eq(grid.spacing_vertical, -0.5));
    }

    #[test]
    fn test_compute_grid_allows_negative_horizontal_spacing_on_overflow() {
        // 4 columns of 400px cannot fit in 1000px
        let grid = compute_grid(1000, 1000, 16, 400.0, 0);
        assert_eq!(grid.item_count_horizontal, 4);
        assert!(grid.spacing_horizontal < 0.0);
        assert!(approx_eq(grid.spacing_horizontal, (1000.0 - 1600.0) / 5.0));
    }

    // ── Grid helpers ──────────────────────────────────────────────────────────

    #[test]
    fn test_used_rows_rounds_up_partial_last_row() {
        let grid = compute_grid(1080, 1920, 9, 60.0, 0);
        // 9 items over 2 columns
        assert_eq!(grid.used_rows(), 5);
    }

    // ── grid_vertical_offset ──────────────────────────────────────────────────

    #[test]
    fn test_grid_vertical_offset_is_zero_for_empty_grid() {
        let grid = compute_grid(1080, 1920, 0, 60.0, 100);
        assert_eq!(grid_vertical_offset(&grid, 1920.0), 0.0);
    }

    #[test]
    fn test_grid_vertical_offset_centers_used_rows() {
        let grid = Grid {
            item_count: 10,
            item_count_horizontal: 4,
            item_count_vertical: 4,
            item_size: 100.0,
            spacing_horizontal: 100.0,
            spacing_vertical: 100.0,
        };
        // top = 100, used rows = 3, bottom = 1000 - 3 * 200 = 400, average = 250
        assert!(approx_eq(grid_vertical_offset(&grid, 1000.0), 150.0));
    }

    #[test]
    fn test_grid_vertical_offset_is_zero_when_margins_already_balanced() {
        let grid = Grid {
            item_count: 4,
            item_count_horizontal: 2,
            item_count_vertical: 2,
            item_size: 100.0,
            spacing_horizontal: 100.0,
            spacing_vertical: 100.0,
        };
        // bottom = 500 - 2 * 200 = 100 = top
        assert!(approx_eq(grid_vertical_offset(&grid, 500.0), 0.0));
    }
}
