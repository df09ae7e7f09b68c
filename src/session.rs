//! Frame loop session
//!
//! Owns the world, the controller and the parsed level. Restart rebuilds
//! the world in place and the loop carries on.

use std::time::{Duration, Instant};

use crate::input::FrameInput;
use crate::level::{LevelDescription, LevelError};
use crate::renderer::{self, DrawList};
use crate::settings::Settings;
use crate::sim::{EntityId, Interaction, PlayerController, World, tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// The session was rebuilt this frame
    Restarted,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub outcome: FrameOutcome,
    pub target: Option<EntityId>,
    pub interaction: Option<Interaction>,
}

pub struct Session {
    settings: Settings,
    level: LevelDescription,
    world: World,
    controller: PlayerController,
    frame: u64,
}

impl Session {
    pub fn new(settings: Settings, level: LevelDescription) -> Result<Self, LevelError> {
        let world = World::from_level(&settings, &level)?;
        let controller = PlayerController::from_settings(&settings);
        log::info!(
            "Session started: hero `{}`, {} objects",
            level.hero.name,
            level.objects.len()
        );
        Ok(Self {
            settings,
            level,
            world,
            controller,
            frame: 0,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Frames run since the session (or last restart) began
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Rebuild the world and controller from the level description
    pub fn reset(&mut self) -> Result<(), LevelError> {
        self.world = World::from_level(&self.settings, &self.level)?;
        self.controller = PlayerController::from_settings(&self.settings);
        self.frame = 0;
        log::info!("Session reset");
        Ok(())
    }

    /// Run one frame of input through the simulation
    pub fn frame(&mut self, input: &FrameInput) -> Result<FrameReport, LevelError> {
        let frame = self.frame;

        if input.quit {
            log::info!("Quit requested at frame {}", frame);
            return Ok(FrameReport {
                frame,
                outcome: FrameOutcome::Quit,
                target: None,
                interaction: None,
            });
        }

        if input.restart {
            self.reset()?;
            return Ok(FrameReport {
                frame,
                outcome: FrameOutcome::Restarted,
                target: None,
                interaction: None,
            });
        }

        let report = tick(&mut self.world, &mut self.controller, input, &self.settings);
        self.frame += 1;
        log::trace!("Frame {}: {:?}", frame, report);

        Ok(FrameReport {
            frame,
            outcome: FrameOutcome::Continue,
            target: report.target,
            interaction: report.interaction,
        })
    }

    /// Draw list for the current world state
    pub fn render(&self) -> DrawList {
        renderer::draw_world(&self.world, &self.settings.palette)
    }
}

/// Sleeps out the remainder of each frame to hold the target rate
pub struct FramePacer {
    frame_duration: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Block until one frame has elapsed since the previous call
    pub fn wait(&mut self) {
        let elapsed = self.last.elapsed();
        if let Some(remaining) = self.frame_duration.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}
