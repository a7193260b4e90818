//! lens-launcher library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does lens-launcher do? (for beginners)
//!
//! `lens-core` only knows about numbers: viewport sizes, item counts and a
//! focal point.  This crate is the glue that a launcher needs around it:
//!
//! 1. Loads the user's lens settings from a TOML file (and saves changes).
//! 2. Converts the icon size from density-independent pixels to physical
//!    pixels using the display density, then lays out the grid.
//! 3. For each pointer position, warps every icon, works out which icons are
//!    inside the lens and which one the pointer is hovering.

/// Application layer: use cases orchestrating the engine.
pub mod application;

/// Infrastructure layer: settings storage and display metrics adapters.
pub mod infrastructure;
