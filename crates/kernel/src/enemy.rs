use glam::Vec3;
use neonrun_common::{EntityId, Health, step_towards};
use serde::{Deserialize, Serialize};

use crate::config::EnemyConfig;
use crate::error::KernelError;

/// Enemy behavior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    Patrol,
    Chase,
    Attack,
}

impl Behavior {
    /// Transition function. Memoryless: the result depends only on the
    /// current distance and the two thresholds, never on the prior state.
    pub fn classify(distance: f32, attack_range: f32, detection_range: f32) -> Self {
        if distance < attack_range {
            Behavior::Attack
        } else if distance < detection_range {
            Behavior::Chase
        } else {
            Behavior::Patrol
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Behavior::Patrol => "patrol",
            Behavior::Chase => "chase",
            Behavior::Attack => "attack",
        };
        f.write_str(s)
    }
}

/// Per-enemy finite-state controller.
///
/// Alive enemies patrol a cyclic route, chase a target inside detection
/// range and hold position inside attack range. Once health reaches zero the
/// enemy is removed and ignores every further update.
#[derive(Debug, Clone)]
pub struct EnemyController {
    id: EntityId,
    position: Vec3,
    health: Health,
    speed: f32,
    attack_range: f32,
    detection_range: f32,
    arrival_threshold: f32,
    chase_multiplier: f32,
    behavior: Behavior,
    patrol_route: Vec<Vec3>,
    waypoint_index: usize,
    chase_target: Option<Vec3>,
    removed: bool,
    pulse_phase: f32,
}

impl EnemyController {
    pub fn new(
        position: Vec3,
        patrol_route: Vec<Vec3>,
        config: &EnemyConfig,
    ) -> Result<Self, KernelError> {
        Self::with_id(EntityId::new(), position, patrol_route, config)
    }

    pub fn with_id(
        id: EntityId,
        position: Vec3,
        patrol_route: Vec<Vec3>,
        config: &EnemyConfig,
    ) -> Result<Self, KernelError> {
        if patrol_route.is_empty() {
            return Err(KernelError::EmptyPatrolRoute);
        }
        if !(config.attack_range < config.detection_range) {
            return Err(KernelError::InvalidRanges {
                attack: config.attack_range,
                detection: config.detection_range,
            });
        }
        let health = Health::new(config.max_health);
        Ok(Self {
            id,
            position,
            health,
            speed: config.speed,
            attack_range: config.attack_range,
            detection_range: config.detection_range,
            arrival_threshold: config.arrival_threshold,
            chase_multiplier: config.chase_multiplier,
            behavior: Behavior::Patrol,
            patrol_route,
            waypoint_index: 0,
            chase_target: None,
            // a zero-health enemy is never active
            removed: health.is_depleted(),
            pulse_phase: 0.0,
        })
    }

    /// Advance one tick. Without a target no transition happens and the
    /// enemy stays put; only the attack pulse keeps running.
    pub fn update(&mut self, dt: f32, target: Option<Vec3>) {
        if self.removed {
            return;
        }
        let Some(target) = target else {
            if self.behavior == Behavior::Attack {
                self.pulse_phase += dt;
            }
            return;
        };

        let distance = self.position.distance(target);
        let next = Behavior::classify(distance, self.attack_range, self.detection_range);
        if next != self.behavior {
            tracing::debug!(
                "enemy {} {} -> {} at distance {:.2}",
                self.id.short(),
                self.behavior,
                next,
                distance
            );
        }
        self.behavior = next;
        if next == Behavior::Chase {
            self.chase_target = Some(target);
        }

        match self.behavior {
            Behavior::Patrol => self.patrol(dt),
            Behavior::Chase => {
                if let Some(dest) = self.chase_target {
                    self.position =
                        step_towards(self.position, dest, self.speed * self.chase_multiplier * dt);
                }
            }
            Behavior::Attack => {
                self.pulse_phase += dt;
            }
        }
    }

    fn patrol(&mut self, dt: f32) {
        let waypoint = self.current_waypoint();
        if self.position.distance(waypoint) < self.arrival_threshold {
            self.waypoint_index = (self.waypoint_index + 1) % self.patrol_route.len();
        } else {
            self.position = step_towards(self.position, waypoint, self.speed * dt);
        }
    }

    /// Apply damage, saturating at zero. Reaching zero removes the enemy for
    /// good. Damage to an already removed enemy is ignored.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        if self.removed {
            tracing::warn!("ignoring damage to removed enemy {}", self.id.short());
            return 0;
        }
        let remaining = self.health.damage(amount);
        if remaining == 0 {
            self.removed = true;
            tracing::info!("enemy {} destroyed", self.id.short());
        }
        remaining
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn attack_range(&self) -> f32 {
        self.attack_range
    }

    pub fn detection_range(&self) -> f32 {
        self.detection_range
    }

    pub fn patrol_route(&self) -> &[Vec3] {
        &self.patrol_route
    }

    pub fn waypoint_index(&self) -> usize {
        self.waypoint_index
    }

    pub fn current_waypoint(&self) -> Vec3 {
        self.patrol_route[self.waypoint_index]
    }

    pub fn chase_target(&self) -> Option<Vec3> {
        self.chase_target
    }

    pub fn is_alive(&self) -> bool {
        !self.removed
    }

    /// Presentation-only pulse scale while attacking, 1.0 otherwise.
    pub fn pulse_scale(&self) -> f32 {
        match self.behavior {
            Behavior::Attack => 1.0 + 0.2 * (self.pulse_phase * 10.0).sin(),
            _ => 1.0,
        }
    }
}
