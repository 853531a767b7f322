//! Scene kernel: authoritative player and enemy state, the frame clock and
//! game configuration.
//!
//! # Invariants
//! - Health stays within `[0, max]`; removed enemies are never resurrected.
//! - Enemy behavior is recomputed from raw distance every tick.
//! - All enemy lifecycle mutations are recorded in the world event log.

pub mod clock;
pub mod config;
pub mod enemy;
pub mod error;
pub mod player;
pub mod world;

pub use clock::Clock;
pub use config::{CameraConfig, EnemyConfig, GameConfig, PlayerConfig, SpawnConfig};
pub use enemy::{Behavior, EnemyController};
pub use error::{ConfigError, KernelError};
pub use player::PlayerState;
pub use world::{World, WorldEvent};
