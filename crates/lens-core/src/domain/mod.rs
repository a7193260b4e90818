//! Domain layer: pure geometry with no I/O.
//!
//! Every function in here is total over its inputs and never panics.  Inputs
//! the callers are expected to avoid (a zero lens boundary, a grid without
//! columns) produce non-finite floats instead of errors; the application layer
//! is responsible for guarding against them.

pub mod density;
pub mod fisheye;
pub mod geometry;
pub mod grid;
pub mod settings;
