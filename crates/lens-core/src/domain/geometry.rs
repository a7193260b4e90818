//! Rectangles, distances and hit-testing.
//!
//! All coordinates are physical pixels in the viewport's coordinate system:
//! the origin is the top-left corner, x grows to the right and y grows
//! downwards.  Every containment check here is inclusive, so a point lying
//! exactly on an edge counts as inside.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// Used both for an item slot's bounds and for the lens's bounding square.
/// Constructors in this crate always produce `left <= right` and
/// `top <= bottom` for non-negative sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the left edge.
    pub left: f32,
    /// Y coordinate of the top edge.
    pub top: f32,
    /// X coordinate of the right edge.
    pub right: f32,
    /// Y coordinate of the bottom edge.
    pub bottom: f32,
}

impl Rect {
    /// Creates a rectangle from its four edges.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns the horizontal extent.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Returns the vertical extent.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Returns the X coordinate of the centre.
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    /// Returns the Y coordinate of the centre.
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
///
/// The squares are accumulated in `f64` so that distances across a large
/// virtual desktop do not lose precision.
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f64 {
    let dx = f64::from(x2 - x1);
    let dy = f64::from(y2 - y1);
    (dx * dx + dy * dy).sqrt()
}

/// Returns `true` if `rect` lies entirely inside the lens square centred at
/// `(lens_x, lens_y)` with side `lens_diameter`.
///
/// Touching edges count as inside.  Items for which this returns `false` are
/// left out of lens interactions such as hover feedback.
pub fn is_rect_within_lens(rect: &Rect, lens_x: f32, lens_y: f32, lens_diameter: f32) -> bool {
    let half = lens_diameter / 2.0;
    rect.left >= lens_x - half
        && rect.right <= lens_x + half
        && rect.top >= lens_y - half
        && rect.bottom <= lens_y + half
}

/// Returns `true` if the point `(x, y)` lies within `rect`, edges included.
pub fn is_inside_rect(x: f32, y: f32, rect: &Rect) -> bool {
    x >= rect.left && x <= rect.right && y >= rect.top && y <= rect.bottom
}

/// Builds the square of side `size` centred at `(center_x, center_y)`.
pub fn calculate_rect(center_x: f32, center_y: f32, size: f32) -> Rect {
    let half = size / 2.0;
    Rect {
        left: center_x - half,
        top: center_y - half,
        right: center_x + half,
        bottom: center_y + half,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
