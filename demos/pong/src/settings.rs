use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rally_engine::{Color, GameConfig};

/// Match parameters. Loadable from a JSON file; any field left out falls
/// back to the classic defaults. Speeds are in pixels per frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: f32,
    pub screen_height: f32,
    pub target_fps: u32,
    pub max_score: u32,
    pub paddle_speed: f32,
    pub puck_speed: f32,
    /// Added to each velocity component's magnitude on every paddle hit.
    pub speed_increase: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1400.0,
            screen_height: 800.0,
            target_fps: 30,
            max_score: 2,
            paddle_speed: 10.0,
            puck_speed: 7.0,
            speed_increase: 0.75,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Engine configuration for these settings.
    pub fn config(&self, rng_seed: u64) -> GameConfig {
        GameConfig {
            screen_size: self.screen_size(),
            target_fps: self.target_fps,
            background: Color::BLACK,
            rng_seed,
        }
    }
}
