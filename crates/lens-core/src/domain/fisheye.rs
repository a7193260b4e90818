//! Fisheye lens distortion.
//!
//! The lens pushes items away from the focal point and makes the ones near it
//! larger.  Both effects are driven by one response curve applied to the
//! normalised distance between the lens and a reference position:
//!
//! ```text
//! x = |lens - reference| / (boundary / 2)
//! y = ((1 + d) * x) / (1 + d * x)
//! ```
//!
//! where `d` is the distortion factor.  `y(0) = 0` and `y(1) = 1`, so the
//! focal point and the boundary stay put while everything in between is
//! pushed outwards.  Larger `d` makes the curve steeper near the focal point,
//! i.e. stronger magnification; `d = 0` is the identity.
//!
//! The warp is applied per axis, each axis with its own boundary.  The curve
//! has no cut-off at the boundary: items further away keep warping and
//! approach `(1 + d) / d` of the half boundary asymptotically.  Callers that
//! only want items inside the lens magnified must leave the others at rest.
//!
//! # How a slot is magnified (for beginners)
//!
//! For one slot with centre `(cx, cy)` and side `s`:
//!
//! 1. [`shift_point`] moves the centre along each axis.
//! 2. [`scale_point`] takes a point `scale_factor * s / 2` further from the
//!    lens than the centre (a stand-in for the slot's far edge) and warps it.
//! 3. The distance between the warped edge and the shifted centre is half the
//!    new size.  [`square_scaled_size`] takes the smaller of the two axes so
//!    the icon stays square.
//!
//! [`magnify_slot`] runs all three steps and returns the resulting rectangle.

use serde::{Deserialize, Serialize};

use super::geometry::{calculate_rect, Rect};
use super::settings::{LensSettings, DEFAULT_DISTORTION_FACTOR, DEFAULT_SCALE_FACTOR};

/// The lens centre, in viewport pixels.
///
/// An absent lens is `Option::<FocalPoint>::None`; any coordinate, negative
/// ones included, is a valid lens position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalPoint {
    pub x: f32,
    pub y: f32,
}

impl FocalPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Interprets a raw touch position that uses a negative `x` to mean
    /// "finger lifted".
    ///
    /// Only for input sources that still report that sentinel; everything past
    /// the input boundary works with `Option<FocalPoint>`.
    pub fn from_touch(x: f32, y: f32) -> Option<Self> {
        if x < 0.0 {
            None
        } else {
            Some(Self { x, y })
        }
    }
}

/// Snapshot of the settings the warp functions read.
///
/// Take one snapshot per frame so every item in that frame is warped with the
/// same values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistortionParams {
    /// Shape of the response curve, `>= 0`.
    pub distortion_factor: f32,
    /// How far beyond the centre, in half item sizes, the size-warp edge sits.
    pub scale_factor: f32,
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self {
            distortion_factor: DEFAULT_DISTORTION_FACTOR,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl From<&LensSettings> for DistortionParams {
    fn from(settings: &LensSettings) -> Self {
        Self {
            distortion_factor: settings.distortion_factor,
            scale_factor: settings.scale_factor,
        }
    }
}

/// The fisheye response curve `y = ((1 + d) * x) / (1 + d * x)`.
pub fn response_curve(x: f32, distortion_factor: f32) -> f32 {
    ((1.0 + distortion_factor) * x) / (1.0 + distortion_factor * x)
}

/// Moves `item_position` along one axis away from `lens_position`.
///
/// Returns `item_position` unchanged when there is no lens or when the item
/// sits exactly under the lens.  `boundary` is the lens diameter along this
/// axis and must be non-zero; a zero boundary yields NaN for every item not
/// under the lens.
pub fn shift_point(
    lens_position: Option<f32>,
    item_position: f32,
    boundary: f32,
    params: &DistortionParams,
) -> f32 {
    let Some(lens) = lens_position else {
        return item_position;
    };
    warp_from_lens(
        lens,
        item_position,
        item_position,
        boundary,
        params.distortion_factor,
    )
}

/// Warps the position of an item's far edge along one axis.
///
/// The reference point is `item_position` moved `scale_factor * item_size / 2`
/// away from the lens, then warped with the same curve as [`shift_point`].
/// Combine the result with the shifted centre using [`square_scaled_size`].
///
/// Without a lens this returns `item_size`, not a position: callers that have
/// no lens should skip the size computation and keep the original size.
pub fn scale_point(
    lens_position: Option<f32>,
    item_position: f32,
    item_size: f32,
    boundary: f32,
    params: &DistortionParams,
) -> f32 {
    let Some(lens) = lens_position else {
        return item_size;
    };
    let half_extent = params.scale_factor * (item_size / 2.0);
    let reference = if lens > item_position {
        item_position - half_extent
    } else {
        item_position + half_extent
    };
    warp_from_lens(
        lens,
        reference,
        item_position,
        boundary,
        params.distortion_factor,
    )
}

/// Apparent side length of a magnified item: twice the smaller of the two
/// per-axis distances between the warped edge and the shifted centre.
pub fn square_scaled_size(
    scaled_x: f32,
    shifted_x: f32,
    scaled_y: f32,
    shifted_y: f32,
) -> f32 {
    2.0 * (scaled_x - shifted_x)
        .abs()
        .min((scaled_y - shifted_y).abs())
}

/// Runs the full warp for one square slot centred at `(center_x, center_y)`
/// and returns its on-screen rectangle.
///
/// Without a lens the slot is returned unmagnified.  `boundary_x` drives the
/// horizontal warp and `boundary_y` the vertical one; pass the lens diameter
/// for both to warp inside a square lens.
pub fn magnify_slot(
    focal: Option<FocalPoint>,
    center_x: f32,
    center_y: f32,
    item_size: f32,
    boundary_x: f32,
    boundary_y: f32,
    params: &DistortionParams,
) -> Rect {
    let Some(focal) = focal else {
        return calculate_rect(center_x, center_y, item_size);
    };
    let shifted_x = shift_point(Some(focal.x), center_x, boundary_x, params);
    let shifted_y = shift_point(Some(focal.y), center_y, boundary_y, params);
    let scaled_x = scale_point(Some(focal.x), center_x, item_size, boundary_x, params);
    let scaled_y = scale_point(Some(focal.y), center_y, item_size, boundary_y, params);
    let size = square_scaled_size(scaled_x, shifted_x, scaled_y, shifted_y);
    calculate_rect(shifted_x, shifted_y, size)
}

/// Applies the response curve to `reference` and places the result on the
/// same side of `lens`.  Returns `unchanged` when `reference == lens`.
fn warp_from_lens(
    lens: f32,
    reference: f32,
    unchanged: f32,
    boundary: f32,
    distortion_factor: f32,
) -> f32 {
    let half_boundary = boundary / 2.0;
    let x = (lens - reference).abs() / half_boundary;
    let new_distance = half_boundary * response_curve(x, distortion_factor);
    if lens > reference {
        lens - new_distance
    } else if lens < reference {
        lens + new_distance
    } else {
        unchanged
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
