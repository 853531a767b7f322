use std::collections::HashSet;

use glam::Vec2;

use crate::action::{KeyBindings, MoveDirection};

/// Platform-independent input events.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    /// Cursor position in window pixels.
    MouseMove { x: f32, y: f32 },
    MouseButton { button: MouseButton, pressed: bool },
    Resize { width: u32, height: u32 },
    FocusLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Currently-held keys plus mouse state.
#[derive(Debug, Clone)]
pub struct InputState {
    bindings: KeyBindings,
    pressed_keys: HashSet<String>,
    /// Normalized device coordinates, both axes in `[-1, 1]`, +Y up.
    mouse_ndc: Vec2,
    mouse_buttons: HashSet<MouseButton>,
    window_size: (u32, u32),
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed_keys: HashSet::new(),
            mouse_ndc: Vec2::ZERO,
            mouse_buttons: HashSet::new(),
            window_size: (800, 600),
        }
    }

    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.pressed_keys.insert(key.to_ascii_lowercase());
            }
            InputEvent::KeyUp(key) => {
                self.pressed_keys.remove(&key.to_ascii_lowercase());
            }
            InputEvent::MouseMove { x, y } => {
                let (w, h) = self.window_size;
                let (w, h) = (w.max(1) as f32, h.max(1) as f32);
                self.mouse_ndc = Vec2::new(x / w * 2.0 - 1.0, -(y / h) * 2.0 + 1.0);
            }
            InputEvent::MouseButton { button, pressed } => {
                if *pressed {
                    self.mouse_buttons.insert(*button);
                } else {
                    self.mouse_buttons.remove(button);
                }
            }
            InputEvent::Resize { width, height } => {
                self.window_size = (*width, *height);
            }
            InputEvent::FocusLost => {
                tracing::debug!("focus lost, releasing {} keys", self.pressed_keys.len());
                self.clear_keys();
            }
        }
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(&key.to_ascii_lowercase())
    }

    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }

    pub fn is_held(&self, direction: MoveDirection) -> bool {
        self.pressed_keys
            .iter()
            .any(|k| self.bindings.direction_for(k) == Some(direction))
    }

    /// Directions currently held, in `MoveDirection::ALL` order.
    pub fn held_directions(&self) -> Vec<MoveDirection> {
        MoveDirection::ALL
            .into_iter()
            .filter(|d| self.is_held(*d))
            .collect()
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_ndc
    }

    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}
