use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Player movement tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start: Vec3,
    /// Velocity added per second a direction key is held.
    pub speed: f32,
    /// Multiplicative velocity damping applied once per tick.
    pub damping: f32,
    /// Minimum Y of the player's position.
    pub floor: f32,
    pub max_health: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: Vec3::new(0.0, 5.0, 50.0),
            speed: 20.0,
            damping: 0.9,
            floor: 1.0,
            max_health: 100,
        }
    }
}

/// Shared enemy tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub speed: f32,
    pub attack_range: f32,
    pub detection_range: f32,
    pub max_health: u32,
    /// Distance under which a patrol waypoint counts as reached.
    pub arrival_threshold: f32,
    /// Chase speed as a multiple of patrol speed.
    pub chase_multiplier: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            attack_range: 3.0,
            detection_range: 30.0,
            max_health: 100,
            arrival_threshold: 2.0,
            chase_multiplier: 1.5,
        }
    }
}

/// Follow camera tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position relative to the player (+Y up, +Z behind).
    pub offset: Vec3,
    pub smooth_factor: f32,
    pub fov_degrees: f32,
    /// Seed for the shake RNG.
    pub shake_seed: u64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 15.0, 30.0),
            smooth_factor: 0.05,
            fov_degrees: 75.0,
            shake_seed: 0x5eed,
        }
    }
}

/// Where an enemy appears and the route it patrols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub position: Vec3,
    pub patrol_route: Vec<Vec3>,
}

fn default_route() -> Vec<Vec3> {
    vec![
        Vec3::new(10.0, 5.0, 10.0),
        Vec3::new(-10.0, 5.0, 10.0),
        Vec3::new(-10.0, 5.0, -10.0),
        Vec3::new(10.0, 5.0, -10.0),
    ]
}

fn default_spawns() -> Vec<SpawnConfig> {
    [
        Vec3::new(0.0, 5.0, -40.0),
        Vec3::new(-30.0, 5.0, -20.0),
        Vec3::new(30.0, 5.0, -20.0),
    ]
    .into_iter()
    .map(|position| SpawnConfig {
        position,
        patrol_route: default_route(),
    })
    .collect()
}

/// Top-level configuration. Every section falls back to its defaults when
/// omitted from the YAML source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub camera: CameraConfig,
    pub spawns: Vec<SpawnConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            camera: CameraConfig::default(),
            spawns: default_spawns(),
        }
    }
}

impl GameConfig {
    pub fn from_yaml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::info!("loading config from {}", path.display());
        let src = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&src)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let e = &self.enemy;
        if !(e.attack_range >= 0.0 && e.attack_range < e.detection_range) {
            return Err(ConfigError::Invalid(format!(
                "enemy.attack_range ({}) must be non-negative and below enemy.detection_range ({})",
                e.attack_range, e.detection_range
            )));
        }
        if e.speed < 0.0 || e.chase_multiplier < 0.0 {
            return Err(ConfigError::Invalid(
                "enemy.speed and enemy.chase_multiplier must be non-negative".into(),
            ));
        }
        if e.arrival_threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "enemy.arrival_threshold ({}) must be positive",
                e.arrival_threshold
            )));
        }
        if e.max_health == 0 {
            return Err(ConfigError::Invalid(
                "enemy.max_health must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.player.damping) {
            return Err(ConfigError::Invalid(format!(
                "player.damping ({}) must be within [0, 1]",
                self.player.damping
            )));
        }
        if !(0.0..=1.0).contains(&self.camera.smooth_factor) {
            return Err(ConfigError::Invalid(format!(
                "camera.smooth_factor ({}) must be within [0, 1]",
                self.camera.smooth_factor
            )));
        }
        if let Some(i) = self.spawns.iter().position(|s| s.patrol_route.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "spawns[{i}].patrol_route is empty"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = GameConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.spawns.len(), 3);
        assert_eq!(c.spawns[0].patrol_route[0], Vec3::new(10.0, 5.0, 10.0));
        assert_eq!(c.camera.smooth_factor, 0.05);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let c = GameConfig::from_yaml_str("enemy:\n  speed: 8.0\n").unwrap();
        assert_eq!(c.enemy.speed, 8.0);
        assert_eq!(c.enemy.attack_range, 3.0);
        assert_eq!(c.player, PlayerConfig::default());
        assert_eq!(c.spawns.len(), 3);
    }

    #[test]
    fn yaml_spawns_override() {
        let src = "
spawns:
  - position: [1.0, 5.0, 1.0]
    patrol_route:
      - [0.0, 5.0, 0.0]
      - [4.0, 5.0, 0.0]
";
        let c = GameConfig::from_yaml_str(src).unwrap();
        assert_eq!(c.spawns.len(), 1);
        assert_eq!(c.spawns[0].patrol_route.len(), 2);
    }

    #[test]
    fn rejects_inverted_ranges() {
        let err = GameConfig::from_yaml_str("enemy:\n  attack_range: 40.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_empty_route() {
        let src = "spawns:\n  - position: [0.0, 0.0, 0.0]\n    patrol_route: []\n";
        let err = GameConfig::from_yaml_str(src).unwrap_err();
        assert!(err.to_string().contains("patrol_route"));
    }

    #[test]
    fn rejects_zero_enemy_health() {
        let err = GameConfig::from_yaml_str("enemy:\n  max_health: 0\n").unwrap_err();
        assert!(err.to_string().contains("max_health"));
    }

    #[test]
    fn accepts_stationary_enemies() {
        let c = GameConfig::from_yaml_str("enemy:\n  speed: 0.0\n  chase_multiplier: 0.0\n")
            .unwrap();
        assert_eq!(c.enemy.speed, 0.0);
    }

    #[test]
    fn negative_speed_message_says_non_negative() {
        let err = GameConfig::from_yaml_str("enemy:\n  speed: -1.0\n").unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = GameConfig::from_yaml_str("enemy: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn yaml_round_trip_preserves_config() {
        let c = GameConfig::default();
        let back = GameConfig::from_yaml_str(&c.to_yaml().unwrap()).unwrap();
        assert_eq!(back, c);
    }
}
