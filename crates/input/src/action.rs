use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the four cardinal movement directions the player can hold.
///
/// The loop consumes directions, never raw key names, so rebinding keys
/// does not touch movement logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// Unit axis in world space. Forward looks down -Z.
    pub fn axis(self) -> Vec3 {
        match self {
            MoveDirection::Forward => Vec3::NEG_Z,
            MoveDirection::Backward => Vec3::Z,
            MoveDirection::Left => Vec3::NEG_X,
            MoveDirection::Right => Vec3::X,
        }
    }
}

/// Key-name to direction mapping. Letter keys match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub forward: Vec<String>,
    pub backward: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec!["w".into(), "ArrowUp".into()],
            backward: vec!["s".into(), "ArrowDown".into()],
            left: vec!["a".into(), "ArrowLeft".into()],
            right: vec!["d".into(), "ArrowRight".into()],
        }
    }
}

impl KeyBindings {
    pub fn direction_for(&self, key: &str) -> Option<MoveDirection> {
        let hit = |names: &[String]| names.iter().any(|n| n.eq_ignore_ascii_case(key));
        if hit(&self.forward) {
            Some(MoveDirection::Forward)
        } else if hit(&self.backward) {
            Some(MoveDirection::Backward)
        } else if hit(&self.left) {
            Some(MoveDirection::Left)
        } else if hit(&self.right) {
            Some(MoveDirection::Right)
        } else {
            None
        }
    }
}
