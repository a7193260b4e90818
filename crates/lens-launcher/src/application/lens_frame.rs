//! LensFrameUseCase: the per-pointer-move pass over every icon.
//!
//! For each item this computes:
//!
//! - its resting slot on the grid,
//! - where the fisheye lens draws it (moved away from the focal point and
//!   scaled up near it),
//! - whether its resting slot lies inside the lens square.
//!
//! The hovered item is the first item inside the lens whose *drawn* rectangle
//! contains the focal point; that is the app a touch release would launch.
//!
//! Only items whose resting slot lies inside the lens square are warped.  The
//! rest are drawn at their slot, so icons far from the focal point stay where
//! the grid put them.
//!
//! # Slot placement
//!
//! Items fill the grid row by row.  The first row starts one vertical spacing
//! plus [`grid_vertical_offset`] below the top, so the rows actually used are
//! centred on the viewport:
//!
//! ```text
//! x = spacing_h + col * (item_size + spacing_h) + item_size / 2
//! y = top       + row * (item_size + spacing_v) + item_size / 2
//! ```

use lens_core::{
    calculate_rect, grid_vertical_offset, is_inside_rect, is_rect_within_lens, magnify_slot,
    DistortionParams, FocalPoint, Grid, LensSettings, Rect,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Error type for frame composition.
#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    /// The lens diameter would make the warp divide by zero (or worse).
    #[error("lens diameter must be positive, got {0}")]
    InvalidLensDiameter(f32),

    /// The grid has items but no columns to put them in.
    #[error("grid has {0} items but no columns")]
    NoColumns(usize),
}

/// One item as drawn in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemFrame {
    /// Position of the item in the app list.
    pub index: usize,
    /// Resting slot on the grid.
    pub slot: Rect,
    /// Where the item is drawn this frame.
    pub rect: Rect,
    /// `true` if the resting slot lies entirely inside the lens square.
    pub within_lens: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LensFrame {
    /// The focal point this frame was computed for; `None` when no pointer is
    /// down.
    pub focal: Option<FocalPoint>,
    /// All items, in list order.
    pub items: Vec<ItemFrame>,
    /// Index of the hovered item, if any.
    pub hovered: Option<usize>,
    /// The lens square, present while a pointer is down and the touch
    /// selection overlay is enabled.
    pub lens_rect: Option<Rect>,
}

impl LensFrame {
    /// The hovered item, if any.
    pub fn hovered_item(&self) -> Option<&ItemFrame> {
        self.hovered.and_then(|index| self.items.get(index))
    }
}

/// Resting centre of item `index` on `grid`, given the top of the first row.
///
/// # Panics
///
/// Panics if `grid` has no columns.  [`compose_frame`] reports that case as
/// [`FrameError::NoColumns`] instead.
pub fn slot_center(grid: &Grid, top: f32, index: usize) -> (f32, f32) {
    let col = (index % grid.item_count_horizontal) as f32;
    let row = (index / grid.item_count_horizontal) as f32;
    let half = grid.item_size / 2.0;
    (
        grid.spacing_horizontal + col * (grid.item_size + grid.spacing_horizontal) + half,
        top + row * (grid.item_size + grid.spacing_vertical) + half,
    )
}

/// Composes the frame for `focal` on a viewport `viewport_height` pixels tall.
///
/// `settings` must be a single snapshot for the whole frame.
///
/// # Errors
///
/// Returns [`FrameError::InvalidLensDiameter`] if the lens diameter is not a
/// positive finite number, and [`FrameError::NoColumns`] for a non-empty grid
/// without columns.
pub fn compose_frame(
    grid: &Grid,
    viewport_height: f32,
    focal: Option<FocalPoint>,
    settings: &LensSettings,
) -> Result<LensFrame, FrameError> {
    let lens_diameter = settings.lens_diameter;
    if !(lens_diameter.is_finite() && lens_diameter > 0.0) {
        return Err(FrameError::InvalidLensDiameter(lens_diameter));
    }
    if grid.item_count > 0 && grid.item_count_horizontal == 0 {
        return Err(FrameError::NoColumns(grid.item_count));
    }

    let params = DistortionParams::from(settings);
    let top = grid.spacing_vertical + grid_vertical_offset(grid, viewport_height);

    let mut items = Vec::with_capacity(grid.item_count);
    let mut hovered = None;
    for index in 0..grid.item_count {
        let (center_x, center_y) = slot_center(grid, top, index);
        let slot = calculate_rect(center_x, center_y, grid.item_size);
        let within_lens =
            focal.is_some_and(|f| is_rect_within_lens(&slot, f.x, f.y, lens_diameter));
        // The lens is a square, so both axes share its diameter.
        let rect = if within_lens {
            magnify_slot(
                focal,
                center_x,
                center_y,
                grid.item_size,
                lens_diameter,
                lens_diameter,
                &params,
            )
        } else {
            slot
        };

        if hovered.is_none() && within_lens {
            if let Some(f) = focal {
                if is_inside_rect(f.x, f.y, &rect) {
                    hovered = Some(index);
                }
            }
        }

        items.push(ItemFrame {
            index,
            slot,
            rect,
            within_lens,
        });
    }

    let lens_rect = focal
        .filter(|_| settings.show_touch_selection)
        .map(|f| calculate_rect(f.x, f.y, lens_diameter));

    match (focal, hovered) {
        (Some(f), Some(index)) => debug!("focal ({:.0}, {:.0}) hovers item {index}", f.x, f.y),
        (Some(f), None) => trace!("focal ({:.0}, {:.0}) hovers nothing", f.x, f.y),
        (None, _) => trace!("composed frame without lens"),
    }

    Ok(LensFrame {
        focal,
        items,
        hovered,
        lens_rect,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use lens_core::compute_grid;

    fn portrait_grid(item_count: usize) -> Grid {
        compute_grid(1080, 1920, item_count, 54.0, 100)
    }

    // ── slot_center ───────────────────────────────────────────────────────────

    #[test]
    fn test_slot_center_fills_rows_left_to_right() {
        let grid = Grid {
            item_count: 6,
            item_count_horizontal: 3,
            item_count_vertical: 2,
            item_size: 100.0,
            spacing_horizontal: 50.0,
            spacing_vertical: 20.0,
        };
        assert_eq!(slot_center(&grid, 0.0, 0), (100.0, 50.0));
        assert_eq!(slot_center(&grid, 0.0, 2), (400.0, 50.0));
        assert_eq!(slot_center(&grid, 0.0, 3), (100.0, 170.0));
    }

    #[test]
    #[should_panic]
    fn test_slot_center_panics_without_columns() {
        let grid = portrait_grid(0);
        assert_eq!(grid.item_count_horizontal, 0);
        slot_center(&grid, 0.0, 0);
    }

    // ── compose_frame without lens ────────────────────────────────────────────

    #[test]
    fn test_compose_frame_without_focal_draws_items_at_rest() {
        let grid = portrait_grid(20);
        let frame = compose_frame(&grid, 1920.0, None, &LensSettings::default()).expect("frame");

        assert_eq!(frame.items.len(), 20);
        assert!(frame.items.iter().all(|item| item.rect == item.slot));
        assert!(frame.items.iter().all(|item| !item.within_lens));
        assert_eq!(frame.hovered, None);
        assert_eq!(frame.lens_rect, None);
    }

    #[test]
    fn test_compose_frame_with_empty_grid_has_no_items() {
        let grid = portrait_grid(0);
        let focal = Some(FocalPoint::new(500.0, 500.0));
        let frame = compose_frame(&grid, 1920.0, focal, &LensSettings::default()).expect("frame");
        assert!(frame.items.is_empty());
        assert_eq!(frame.hovered, None);
    }

    // ── compose_frame with lens ───────────────────────────────────────────────

    #[test]
    fn test_compose_frame_hovers_item_under_focal_point() {
        let grid = portrait_grid(40);
        let top = grid.spacing_vertical + grid_vertical_offset(&grid, 1920.0);
        let (x, y) = slot_center(&grid, top, 7);

        let frame = compose_frame(
            &grid,
            1920.0,
            Some(FocalPoint::new(x, y)),
            &LensSettings::default(),
        )
        .expect("frame");

        assert_eq!(frame.hovered, Some(7));
        let hovered = frame.hovered_item().expect("hovered item");
        assert!(hovered.rect.width() > grid.item_size, "hovered item is magnified");
        assert!(hovered.within_lens);
    }

    #[test]
    fn test_compose_frame_marks_far_items_outside_lens() {
        let grid = portrait_grid(40);
        let frame = compose_frame(
            &grid,
            1920.0,
            Some(FocalPoint::new(0.0, 0.0)),
            &LensSettings::default(),
        )
        .expect("frame");

        let last = frame.items.last().expect("items");
        assert!(!last.within_lens);
        assert_eq!(last.rect, last.slot);
    }

    #[test]
    fn test_compose_frame_leaves_items_outside_lens_at_rest() {
        // Arrange: lens near the top edge of a 12-row grid.
        let grid = portrait_grid(57);
        let focal = FocalPoint::new(540.0, 150.0);

        // Act
        let frame = compose_frame(&grid, 1920.0, Some(focal), &LensSettings::default())
            .expect("frame");

        // Assert
        let (inside, outside): (Vec<&ItemFrame>, Vec<&ItemFrame>) =
            frame.items.iter().partition(|item| item.within_lens);
        assert!(!inside.is_empty());
        assert!(inside.iter().any(|item| item.rect != item.slot));
        assert!(outside.iter().all(|item| item.rect == item.slot));

        // A warp without the lens gate would pull the bottom row up to y < 570.
        let last = frame.items.last().expect("items");
        assert!(last.rect.center_y() > 1000.0, "got {}", last.rect.center_y());
    }

    #[test]
    fn test_compose_frame_includes_lens_rect_when_touch_selection_shown() {
        let grid = portrait_grid(9);
        let settings = LensSettings {
            show_touch_selection: true,
            ..LensSettings::default()
        };
        let frame = compose_frame(&grid, 1920.0, Some(FocalPoint::new(540.0, 960.0)), &settings)
            .expect("frame");
        assert_eq!(frame.lens_rect, Some(Rect::new(240.0, 660.0, 840.0, 1260.0)));
    }

    // ── Preconditions ─────────────────────────────────────────────────────────

    #[test]
    fn test_compose_frame_rejects_zero_lens_diameter() {
        let grid = portrait_grid(9);
        let settings = LensSettings {
            lens_diameter: 0.0,
            ..LensSettings::default()
        };
        assert_eq!(
            compose_frame(&grid, 1920.0, None, &settings),
            Err(FrameError::InvalidLensDiameter(0.0))
        );
    }

    #[test]
    fn test_compose_frame_rejects_items_without_columns() {
        let grid = Grid {
            item_count: 3,
            item_count_horizontal: 0,
            item_count_vertical: 0,
            item_size: 54.0,
            spacing_horizontal: 0.0,
            spacing_vertical: 0.0,
        };
        assert_eq!(
            compose_frame(&grid, 1920.0, None, &LensSettings::default()),
            Err(FrameError::NoColumns(3))
        );
    }
}
