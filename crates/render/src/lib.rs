//! Rendering boundary: the scene graph and GPU renderer live outside this
//! workspace and are reached through the [`Renderer`] trait.
//!
//! # Invariants
//! - Renderers only read world state and the view; they never mutate them.
//!
//! [`DebugTextRenderer`] implements the trait as plain text for the CLI and
//! tests.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "neonrun-render v0.1.0"
}
