use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything the core reads from the input layer in one frame.
///
/// Keys are lower-case names (`"w"`, `"space"`, `"shift"`, ...). Mouse
/// coordinates are in window pixels; `last_*` hold the previous frame's values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub pressed_keys: BTreeSet<String>,
    pub mouse_x: f64,
    pub mouse_y: f64,
    pub last_mouse_x: f64,
    pub last_mouse_y: f64,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: mark a key as held this frame.
    pub fn with_key(mut self, key: &str) -> Self {
        self.pressed_keys.insert(key.to_ascii_lowercase());
        self
    }

    /// Builder: set current and previous mouse coordinates.
    pub fn with_mouse(mut self, x: f64, y: f64, last_x: f64, last_y: f64) -> Self {
        self.mouse_x = x;
        self.mouse_y = y;
        self.last_mouse_x = last_x;
        self.last_mouse_y = last_y;
        self
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    /// Mouse movement since the previous frame.
    pub fn mouse_delta(&self) -> (f64, f64) {
        (
            self.mouse_x - self.last_mouse_x,
            self.mouse_y - self.last_mouse_y,
        )
    }

    /// Snapshot for the next frame: same keys, mouse history shifted.
    pub fn advance(&self, mouse_x: f64, mouse_y: f64) -> Self {
        Self {
            pressed_keys: self.pressed_keys.clone(),
            mouse_x,
            mouse_y,
            last_mouse_x: self.mouse_x,
            last_mouse_y: self.mouse_y,
        }
    }
}
