use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a spawned entity (enemies, the player).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for log lines and debug output.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_owned()
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Integer hit points clamped to `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    /// Full health.
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Subtract `amount`, saturating at zero. Returns the remaining health.
    pub fn damage(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Add `amount`, saturating at `max`. Returns the remaining health.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_add(amount).min(self.max);
        self.current
    }
}

/// Move `current` a fixed fraction of the way toward `target`.
///
/// Written as `current + (target - current) * factor` so a value already at
/// its target stays bit-identical.
pub fn approach(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}

/// Move from `from` toward `to` by exactly `max_step` along the straight line.
/// The step is not clamped, so it can overshoot `to`. A zero-length direction
/// yields `from` unchanged.
pub fn step_towards(from: Vec3, to: Vec3, max_step: f32) -> Vec3 {
    from + (to - from).normalize_or_zero() * max_step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_uniqueness() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
        assert_eq!(a.short().len(), 8);
    }

    #[test]
    fn health_clamps_to_zero() {
        let mut h = Health::new(100);
        assert_eq!(h.damage(30), 70);
        assert_eq!(h.damage(500), 0);
        assert!(h.is_depleted());
        assert_eq!(h.max(), 100);
    }

    #[test]
    fn health_heal_clamps_to_max() {
        let mut h = Health::new(50);
        h.damage(20);
        assert_eq!(h.heal(100), 50);
    }

    #[test]
    fn approach_fixed_point_is_exact() {
        let p = Vec3::new(0.1, -3.7, 12.345);
        assert_eq!(approach(p, p, 0.05), p);
    }

    #[test]
    fn approach_covers_fraction() {
        let out = approach(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.5);
        assert_eq!(out, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn step_towards_moves_by_step() {
        let out = step_towards(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), 2.0);
        assert!((out - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-6);
    }

    #[test]
    fn step_towards_overshoots_close_target() {
        let out = step_towards(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 3.0);
        assert!((out - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn step_towards_same_point_is_noop() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(step_towards(p, p, 5.0), p);
    }
}
