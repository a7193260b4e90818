//! Infrastructure layer for the launcher.
//!
//! Contains host-facing adapters: settings file storage and display metrics.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `lens_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod display;
pub mod storage;
