use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an entity in a scene registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for log lines and debug output.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen dimensions in pixels.
///
/// Only the 2D camera reads this, to map device space `[-1, 1]` into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub screen_width: u32,
    pub screen_height: u32,
}

impl DisplayConfig {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            screen_width,
            screen_height,
        }
    }

    /// Width over height. A zero height yields an aspect of 1.
    pub fn aspect(&self) -> f32 {
        if self.screen_height == 0 {
            return 1.0;
        }
        self.screen_width as f32 / self.screen_height as f32
    }

    /// Half extents in whole pixels (integer division, matching the pixel grid).
    pub fn half_extents(&self) -> (f32, f32) {
        (
            (self.screen_width / 2) as f32,
            (self.screen_height / 2) as f32,
        )
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
        }
    }
}
