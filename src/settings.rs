//! Game tuning and preferences
//!
//! Loaded from an optional JSON file; every field falls back to the
//! defaults in `crate::consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

/// Convert an 8-bit RGB triple to a [`Color`]
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

pub const BLACK: Color = rgb(0, 0, 0);
pub const WHITE: Color = rgb(255, 255, 255);
pub const RED: Color = rgb(255, 0, 0);
pub const GREEN: Color = rgb(0, 204, 0);

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting: {0}")]
    Invalid(&'static str),
}

/// Colors used by the draw list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub default: Color,
    /// Target is lighter than the hero (it will move)
    pub highlight_lighter: Color,
    /// Target is at least as heavy as the hero (the hero will move)
    pub highlight_heavier: Color,
    pub wall: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: WHITE,
            default: BLACK,
            highlight_lighter: GREEN,
            highlight_heavier: RED,
            wall: BLACK,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Frame loop ===
    /// Frames per second, also the physics rate
    pub fps: u32,

    // === Arena ===
    pub width: f32,
    pub height: f32,
    /// World gravity (pixels/s²)
    pub gravity: Vec2,
    pub wall_width: f32,
    pub wall_friction: f32,

    // === Movement ===
    /// Horizontal speed when a direction key is held
    pub player_speed: f32,
    /// Push/pull speed multiplier on top of `player_speed`
    pub pulling_strength: f32,
    /// Apex height of a jump
    pub jump_height: f32,

    // === Visuals ===
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: FPS,

            width: WIDTH,
            height: HEIGHT,
            gravity: Vec2::new(0.0, GRAVITY_Y),
            wall_width: WALL_WIDTH,
            wall_friction: FRICTION,

            player_speed: PLAYER_SPEED,
            pulling_strength: PULLING_STR,
            jump_height: JUMP_HEIGHT,

            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Fixed timestep for one frame
    pub fn dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Vertical take-off speed whose ballistic apex equals `jump_height`
    pub fn jump_speed(&self) -> f32 {
        (2.0 * self.jump_height * self.gravity.y.abs()).sqrt()
    }

    /// Push/pull velocity magnitude
    pub fn interaction_speed(&self) -> f32 {
        self.player_speed * self.pulling_strength
    }

    /// Reject values the frame loop and arena cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.fps == 0 {
            return Err(SettingsError::Invalid("fps must be positive"));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(SettingsError::Invalid("arena size must be positive"));
        }
        if !(self.wall_width > 0.0) {
            return Err(SettingsError::Invalid("wall width must be positive"));
        }
        if !(self.jump_height >= 0.0) {
            return Err(SettingsError::Invalid("jump height must not be negative"));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
