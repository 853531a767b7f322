//! Follow camera: exponential smoothing toward a target, orbit placement and
//! a time-bounded shake layered over the rendered eye.
//!
//! # Invariants
//! - Shake never touches the base position or targets used by smoothing.
//! - At most one shake is active; a new one replaces the old.

mod follow;
mod shake;

pub use follow::FollowCamera;
pub use shake::ShakeEffect;
