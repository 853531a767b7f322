use glam::Vec3;
use neonrun_common::Health;
use neonrun_input::MoveDirection;

use crate::config::PlayerConfig;

/// The player capsule: position, velocity and health.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub speed: f32,
    pub health: Health,
    damping: f32,
    floor: f32,
}

impl PlayerState {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            position: config.start,
            velocity: Vec3::ZERO,
            speed: config.speed,
            health: Health::new(config.max_health),
            damping: config.damping,
            floor: config.floor,
        }
    }

    /// Integrate one tick of movement.
    ///
    /// Each held direction adds `speed * dt` along its axis to the velocity,
    /// the velocity moves the position and is then damped. The floor clamps
    /// Y and zeroes vertical velocity on contact.
    pub fn integrate(&mut self, held: &[MoveDirection], dt: f32) {
        for dir in held {
            self.velocity += dir.axis() * self.speed * dt;
        }
        self.position += self.velocity;
        self.velocity *= self.damping;

        if self.position.y < self.floor {
            self.position.y = self.floor;
            self.velocity.y = 0.0;
        }
    }

    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health.damage(amount)
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> PlayerState {
        PlayerState::new(&PlayerConfig::default())
    }

    #[test]
    fn starts_at_configured_position() {
        let p = player();
        assert_eq!(p.position, Vec3::new(0.0, 5.0, 50.0));
        assert_eq!(p.velocity, Vec3::ZERO);
        assert_eq!(p.health.current(), 100);
    }

    #[test]
    fn no_keys_means_no_motion() {
        let mut p = player();
        p.integrate(&[], 0.016);
        assert_eq!(p.position, Vec3::new(0.0, 5.0, 50.0));
    }

    #[test]
    fn forward_moves_toward_negative_z_then_damps() {
        let mut p = player();
        p.integrate(&[MoveDirection::Forward], 0.1);
        // velocity = -20 * 0.1 = -2 on z, applied then damped
        assert!((p.position.z - 48.0).abs() < 1e-5);
        assert!((p.velocity.z + 1.8).abs() < 1e-5);

        p.integrate(&[], 0.1);
        assert!((p.position.z - 46.2).abs() < 1e-4);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut p = player();
        p.integrate(&[MoveDirection::Left, MoveDirection::Right], 0.1);
        assert_eq!(p.position.x, 0.0);
    }

    #[test]
    fn floor_clamps_and_zeroes_vertical_velocity() {
        let mut p = player();
        p.position.y = 1.5;
        p.velocity.y = -3.0;
        p.integrate(&[], 0.016);
        assert_eq!(p.position.y, 1.0);
        assert_eq!(p.velocity.y, 0.0);
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut p = player();
        assert_eq!(p.take_damage(250), 0);
        assert!(!p.is_alive());
    }
}
