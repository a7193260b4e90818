//! Storage infrastructure: settings file persistence.
//!
//! This module provides a thin adapter between the application and the
//! file system.  The `config` sub-module handles:
//!
//! - Reading the TOML settings file from the platform-appropriate directory.
//! - Writing every change straight back to disk when the user adjusts a
//!   setting.
//! - Providing the default settings when the file does not exist yet (first
//!   run).

pub mod config;
