use std::collections::BTreeMap;

use glam::Vec3;
use neonrun_common::EntityId;
use serde::{Deserialize, Serialize};

use crate::config::{EnemyConfig, GameConfig};
use crate::enemy::{Behavior, EnemyController};
use crate::error::KernelError;
use crate::player::PlayerState;

/// An event record produced by every enemy lifecycle mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// Enemy entered the active set.
    EnemySpawned { id: EntityId, position: Vec3 },
    /// Enemy took damage and has `remaining` health left.
    EnemyDamaged {
        id: EntityId,
        amount: u32,
        remaining: u32,
    },
    /// Enemy health reached zero; it no longer takes part in any query.
    EnemyRemoved { id: EntityId },
    /// Enemy behavior changed during a step.
    BehaviorChanged {
        id: EntityId,
        from: Behavior,
        to: Behavior,
    },
    /// Enemies advanced one tick.
    Stepped { tick: u64 },
}

/// The authoritative scene state: one player and the enemy set.
///
/// Enemies live in a BTreeMap so stepping and queries iterate in a
/// deterministic order. Removed enemies stay in the map until
/// [`World::prune_removed`] but are invisible to every query.
#[derive(Debug, Clone)]
pub struct World {
    player: PlayerState,
    enemies: BTreeMap<EntityId, EnemyController>,
    enemy_config: EnemyConfig,
    tick: u64,
    event_log: Vec<WorldEvent>,
}

impl World {
    /// Empty world: a player and no enemies.
    pub fn new(player: PlayerState, enemy_config: EnemyConfig) -> Self {
        Self {
            player,
            enemies: BTreeMap::new(),
            enemy_config,
            tick: 0,
            event_log: Vec::new(),
        }
    }

    /// Build the player and every configured spawn.
    pub fn from_config(config: &GameConfig) -> Result<Self, KernelError> {
        config.validate()?;
        let mut world = Self::new(PlayerState::new(&config.player), config.enemy.clone());
        for spawn in &config.spawns {
            world.spawn_enemy(spawn.position, spawn.patrol_route.clone())?;
        }
        Ok(world)
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    pub fn enemy_config(&self) -> &EnemyConfig {
        &self.enemy_config
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Spawn an enemy using the world's enemy config. Returns its id.
    pub fn spawn_enemy(
        &mut self,
        position: Vec3,
        patrol_route: Vec<Vec3>,
    ) -> Result<EntityId, KernelError> {
        let enemy = EnemyController::new(position, patrol_route, &self.enemy_config)?;
        Ok(self.insert_enemy(enemy))
    }

    /// Insert an already built controller.
    pub fn insert_enemy(&mut self, enemy: EnemyController) -> EntityId {
        let id = enemy.id();
        tracing::info!(
            "spawned enemy {} at ({:.1}, {:.1}, {:.1})",
            id.short(),
            enemy.position().x,
            enemy.position().y,
            enemy.position().z
        );
        self.event_log.push(WorldEvent::EnemySpawned {
            id,
            position: enemy.position(),
        });
        self.enemies.insert(id, enemy);
        id
    }

    /// Damage an active enemy. Returns its remaining health.
    pub fn damage_enemy(&mut self, id: EntityId, amount: u32) -> Result<u32, KernelError> {
        let enemy = self
            .enemies
            .get_mut(&id)
            .filter(|e| e.is_alive())
            .ok_or(KernelError::UnknownEnemy(id))?;
        let remaining = enemy.take_damage(amount);
        self.event_log.push(WorldEvent::EnemyDamaged {
            id,
            amount,
            remaining,
        });
        if !enemy.is_alive() {
            self.event_log.push(WorldEvent::EnemyRemoved { id });
        }
        Ok(remaining)
    }

    /// Advance every active enemy one tick toward/around `target`.
    pub fn step_enemies(&mut self, dt: f32, target: Option<Vec3>) {
        self.tick += 1;
        for (id, enemy) in self.enemies.iter_mut().filter(|(_, e)| e.is_alive()) {
            let before = enemy.behavior();
            enemy.update(dt, target);
            let after = enemy.behavior();
            if before != after {
                self.event_log.push(WorldEvent::BehaviorChanged {
                    id: *id,
                    from: before,
                    to: after,
                });
            }
        }
        self.event_log.push(WorldEvent::Stepped { tick: self.tick });
    }

    /// Enemies that are still alive, in id order.
    pub fn active_enemies(&self) -> impl Iterator<Item = &EnemyController> + '_ {
        self.enemies.values().filter(|e| e.is_alive())
    }

    pub fn active_enemy_count(&self) -> usize {
        self.active_enemies().count()
    }

    /// Active enemy lookup; removed enemies are reported as absent.
    pub fn enemy(&self, id: EntityId) -> Option<&EnemyController> {
        self.enemies.get(&id).filter(|e| e.is_alive())
    }

    /// Closest active enemy to `point`.
    pub fn nearest_enemy(&self, point: Vec3) -> Option<&EnemyController> {
        self.active_enemies().min_by(|a, b| {
            a.position()
                .distance_squared(point)
                .total_cmp(&b.position().distance_squared(point))
        })
    }

    /// Active enemies strictly within `radius` of `point`.
    pub fn enemies_within(&self, point: Vec3, radius: f32) -> Vec<&EnemyController> {
        self.active_enemies()
            .filter(|e| e.position().distance(point) < radius)
            .collect()
    }

    /// Drop removed enemies from storage. Returns how many were dropped.
    pub fn prune_removed(&mut self) -> usize {
        let before = self.enemies.len();
        self.enemies.retain(|_, e| e.is_alive());
        before - self.enemies.len()
    }
}
