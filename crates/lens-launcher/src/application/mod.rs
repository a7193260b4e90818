//! Application layer use cases for the launcher.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules, here `lens-core`) and the infrastructure
//! (file system, display queries).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain functions to fulfil a user goal (e.g., "lay the
//!   installed apps out on screen").
//! - **Guard the domain's preconditions**: the engine never validates its
//!   inputs, so a zero viewport or a zero lens diameter is rejected here.
//! - **Depend on abstractions** (traits) rather than concrete implementations.
//!
//! # Sub-modules
//!
//! - **`layout_grid`** – Builds the [`Grid`](lens_core::Grid) for a viewport,
//!   converting the configured icon size to physical pixels.
//!
//! - **`lens_frame`** – Runs once per pointer move: warps every slot around
//!   the focal point and resolves the hovered item.

pub mod layout_grid;
pub mod lens_frame;
