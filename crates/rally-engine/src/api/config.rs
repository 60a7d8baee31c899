use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::Color;

/// Engine configuration, provided by the game at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen size in pixels; scripts read this for layout (e.g. puck reset).
    pub screen_size: Vec2,
    /// Target frame rate for `FrameClock::throttle`.
    pub target_fps: u32,
    /// Background clear color handed to the presenter every frame.
    pub background: Color,
    /// Seed for the manager's deterministic RNG.
    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_size: Vec2::new(800.0, 600.0),
            target_fps: 60,
            background: Color::WHITE,
            rng_seed: 42,
        }
    }
}
