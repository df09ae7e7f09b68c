//! Player movement and jumping
//!
//! Velocity is assigned directly each frame: no acceleration ramp, and a
//! released jump key cuts vertical velocity to zero immediately.

use serde::{Deserialize, Serialize};

use super::world::World;
use crate::input::FrameInput;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpState {
    /// Vertical velocity left to gravity
    #[default]
    Grounded,
    /// Jump velocity commanded, waiting for the key release
    Jumping,
}

/// Velocity commands for the hero for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerCommand {
    pub horizontal: f32,
    /// `Some` overrides vertical velocity, `None` leaves it to physics
    pub vertical: Option<f32>,
}

impl ControllerCommand {
    pub fn apply(&self, world: &mut World) {
        let hero = world.hero_id();
        world.set_velocity_x(hero, self.horizontal);
        if let Some(vy) = self.vertical {
            world.set_velocity_y(hero, vy);
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerController {
    speed: f32,
    jump_speed: f32,
    state: JumpState,
}

impl PlayerController {
    pub fn new(speed: f32, jump_speed: f32) -> Self {
        Self {
            speed,
            jump_speed,
            state: JumpState::Grounded,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.player_speed, settings.jump_speed())
    }

    pub fn state(&self) -> JumpState {
        self.state
    }

    pub fn jump_speed(&self) -> f32 {
        self.jump_speed
    }

    /// Translate this frame's input into velocity commands
    pub fn step(&mut self, input: &FrameInput) -> ControllerCommand {
        let mut horizontal = 0.0;
        if input.left {
            horizontal -= self.speed;
        }
        if input.right {
            horizontal += self.speed;
        }

        let vertical = if input.jump_pressed {
            self.state = JumpState::Jumping;
            Some(self.jump_speed)
        } else if input.jump_released {
            self.state = JumpState::Grounded;
            Some(0.0)
        } else {
            None
        };

        ControllerCommand {
            horizontal,
            vertical,
        }
    }
}
