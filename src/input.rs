//! Per-frame input and scripted playback
//!
//! `FrameInput` is the only thing the simulation sees of the keyboard and
//! mouse. `InputScript` expands a compact JSON list of steps into one input
//! per frame so sessions can run headless and deterministically.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::level::LevelDescription;
use crate::settings::Settings;

/// Input state for a single frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    /// Movement keys (held)
    pub left: bool,
    pub right: bool,
    /// Jump key went down this frame
    pub jump_pressed: bool,
    /// Jump key went up this frame
    pub jump_released: bool,
    /// Push modifier (held)
    pub push: bool,
    /// Pull modifier (held)
    pub pull: bool,
    /// Rebuild the session (one-shot)
    pub restart: bool,
    /// Exit immediately (one-shot)
    pub quit: bool,
    /// Cursor in screen coordinates (y down), `None` when off-window
    pub cursor: Option<Vec2>,
}

impl FrameInput {
    /// Copy with one-shot fields cleared, for frames after the first
    fn held(&self) -> Self {
        Self {
            jump_pressed: false,
            jump_released: false,
            restart: false,
            quit: false,
            ..self.clone()
        }
    }
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read input script {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed input script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One script step: an input held for `frames` frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub frames: u32,
    #[serde(flatten)]
    pub input: FrameInput,
}

/// A sequence of input steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let script = Self::from_json(&json)?;
        log::info!(
            "Loaded input script {} ({} frames)",
            path.display(),
            script.len()
        );
        Ok(script)
    }

    pub fn push(&mut self, frames: u32, input: FrameInput) -> &mut Self {
        self.steps.push(ScriptStep { frames, input });
        self
    }

    /// Total frame count
    pub fn len(&self) -> usize {
        self.steps.iter().map(|s| s.frames as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-frame inputs; edges and one-shots only fire on a step's first frame
    pub fn frames(&self) -> impl Iterator<Item = FrameInput> + '_ {
        self.steps.iter().flat_map(|step| {
            let held = step.input.held();
            (0..step.frames).map(move |i| if i == 0 { step.input.clone() } else { held.clone() })
        })
    }

    /// A short tour of the level: walk, jump, then pull and push the first
    /// metal object
    pub fn demo(level: &LevelDescription, settings: &Settings) -> Self {
        let mut script = Self::default();
        script
            .push(30, FrameInput::default())
            .push(
                30,
                FrameInput {
                    right: true,
                    ..Default::default()
                },
            )
            .push(
                20,
                FrameInput {
                    jump_pressed: true,
                    ..Default::default()
                },
            )
            .push(
                10,
                FrameInput {
                    jump_released: true,
                    ..Default::default()
                },
            );

        if let Some(target) = level.objects.iter().find(|o| o.metal) {
            let start = target.start();
            let cursor = Some(Vec2::new(start.x, settings.height - start.y));
            script
                .push(
                    20,
                    FrameInput {
                        pull: true,
                        cursor,
                        ..Default::default()
                    },
                )
                .push(
                    20,
                    FrameInput {
                        push: true,
                        cursor,
                        ..Default::default()
                    },
                );
        }

        script
            .push(
                30,
                FrameInput {
                    left: true,
                    ..Default::default()
                },
            )
            .push(
                1,
                FrameInput {
                    quit: true,
                    ..Default::default()
                },
            );
        script
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::EntityDef;

    #[test]
    fn test_parse_script() {
        let script = InputScript::from_json(
            r#"[
                { "frames": 3, "right": true },
                { "frames": 2, "jump_pressed": true, "cursor": [10.0, 20.0] }
            ]"#,
        )
        .unwrap();
        assert_eq!(script.steps.len(), 2);
        assert_eq!(script.len(), 5);
        assert!(script.steps[0].input.right);
        assert_eq!(script.steps[1].input.cursor, Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn test_one_shots_fire_once_per_step() {
        let mut script = InputScript::default();
        script.push(
            3,
            FrameInput {
                jump_pressed: true,
                pull: true,
                ..Default::default()
            },
        );
        let frames: Vec<_> = script.frames().collect();
        assert_eq!(frames.len(), 3);
        assert!(frames[0].jump_pressed);
        assert!(!frames[1].jump_pressed && !frames[2].jump_pressed);
        assert!(frames.iter().all(|f| f.pull));
    }

    #[test]
    fn test_demo_targets_first_metal_object() {
        let mut rock = EntityDef::new("rock", 1.0, 10.0, Vec2::new(100.0, 100.0));
        rock.metal = false;
        let level = LevelDescription {
            hero: EntityDef::new("hero", 5.0, 15.0, Vec2::new(35.0, 500.0)),
            objects: vec![rock, EntityDef::new("coin", 1.0, 5.0, Vec2::new(300.0, 100.0))],
        };
        let settings = Settings::default();
        let script = InputScript::demo(&level, &settings);

        let pull = script.frames().find(|f| f.pull).unwrap();
        assert_eq!(pull.cursor, Some(Vec2::new(300.0, 800.0)));
        assert!(script.frames().last().unwrap().quit);
    }
}
