use neonrun_common::EntityId;

/// Errors from loading or validating a [`GameConfig`](crate::GameConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors from kernel operations.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    #[error("patrol route must contain at least one waypoint")]
    EmptyPatrolRoute,
    #[error("attack range {attack} must be below detection range {detection}")]
    InvalidRanges { attack: f32, detection: f32 },
    #[error("no active enemy with id {0:?}")]
    UnknownEnemy(EntityId),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
