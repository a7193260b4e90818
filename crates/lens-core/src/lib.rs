//! # lens-core
//!
//! Layout and lens-distortion engine for the Lens launcher.
//!
//! This crate is used by the launcher application and by anything else that
//! needs to place app icons on a grid and magnify them around a touch point.
//! It has zero dependencies on OS APIs, UI frameworks, or the file system.
//!
//! # Architecture overview (for beginners)
//!
//! The launcher shows every installed app as a small icon on an evenly spaced
//! grid.  When the user drags a finger across the screen, the icons near the
//! finger grow and push outward, like looking at them through a fisheye lens.
//!
//! Everything in this crate is a pure function over plain values:
//!
//! - **`domain::grid`** – Turns a viewport size and an item count into a
//!   [`Grid`]: how many columns and rows, how big each slot is, and how much
//!   space sits between slots.
//!
//! - **`domain::fisheye`** – The lens itself.  [`shift_point`] moves a slot
//!   centre away from the focal point and [`scale_point`] finds where the slot's
//!   edge lands, which [`square_scaled_size`] turns into a magnified size.
//!
//! - **`domain::geometry`** – Rectangles, distances and hit-testing.
//!
//! - **`domain::settings`** – The user-tunable values (lens diameter, icon
//!   size, distortion and scale factors) and their limits.
//!
//! - **`domain::density`** – Conversion between density-independent pixels
//!   and physical pixels.

// Rust will look for the module in src/domain/mod.rs.
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `lens_core::Grid` instead of `lens_core::domain::grid::Grid`.
pub use domain::density::Density;
pub use domain::fisheye::{
    magnify_slot, response_curve, scale_point, shift_point, square_scaled_size, DistortionParams,
    FocalPoint,
};
pub use domain::geometry::{calculate_rect, distance, is_inside_rect, is_rect_within_lens, Rect};
pub use domain::grid::{compute_grid, grid_vertical_offset, Grid};
pub use domain::settings::{BoolKey, FloatKey, LensSettings, SettingsError};
