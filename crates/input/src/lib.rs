//! Input: held keys and mouse state, mapped to movement directions.
//!
//! # Invariants
//! - Only the four move directions have functional bindings.
//! - Mouse state is tracked but not consumed by any behavior.

pub mod action;
pub mod state;

pub use action::{KeyBindings, MoveDirection};
pub use state::{InputEvent, InputState, MouseButton};

pub fn crate_info() -> &'static str {
    "neonrun-input v0.1.0"
}
