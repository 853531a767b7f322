//! Game loop: owns the world, camera and input state and advances them in a
//! fixed order once per tick.
//!
//! # Invariants
//! - The camera target is derived from the post-movement player position.
//! - The loop is the only writer of player, enemy and camera state.

mod game_loop;
mod hud;

pub use game_loop::GameLoop;
pub use hud::Hud;
