//! Shared types used across the neonrun crates.

pub mod types;

pub use types::{EntityId, Health, approach, step_towards};
