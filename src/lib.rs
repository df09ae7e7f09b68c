//! Steelpush - a push/pull platformer prototype
//!
//! Core modules:
//! - `sim`: World, entities, physics boundary and the per-frame game logic
//! - `level`: Level description loading
//! - `input`: Per-frame input values and scripted playback
//! - `session`: Frame loop, restart and pacing
//! - `renderer`: Draw list generation (pure output)
//! - `settings`: Data-driven tuning

pub mod input;
pub mod level;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use input::{FrameInput, InputScript};
pub use level::{EntityDef, LevelDescription, LevelError};
pub use session::{FrameOutcome, FrameReport, Session};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Default tuning constants
pub mod consts {
    /// Target frame rate; the physics step runs once per frame at `1 / FPS`
    pub const FPS: u32 = 60;

    /// Window dimensions (pixels, also world units)
    pub const WIDTH: f32 = 900.0;
    pub const HEIGHT: f32 = 900.0;

    /// World gravity (pixels/s²)
    pub const GRAVITY_Y: f32 = -1000.0;

    /// Boundary walls
    pub const WALL_WIDTH: f32 = 10.0;
    pub const FRICTION: f32 = 1.0;

    /// Horizontal player speed, also the base push/pull speed
    pub const PLAYER_SPEED: f32 = 100.0 * 2.0;
    /// Multiplier applied to PLAYER_SPEED for push/pull
    pub const PULLING_STR: f32 = 3.0;
    /// Jump apex height (pixels)
    pub const JUMP_HEIGHT: f32 = 30.0 * 10.0;
}

/// Directed angle from `b` to `a` in radians, normalized to [0, 2π)
#[inline]
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let d = a - b;
    d.y.atan2(d.x).rem_euclid(std::f32::consts::TAU)
}

/// Directed angle from `b` to `a` in degrees, in [0, 360)
#[inline]
pub fn get_angle(a: Vec2, b: Vec2) -> f32 {
    let degrees = angle_between(a, b).to_degrees();
    // rem_euclid can land exactly on TAU for tiny negative inputs
    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// Convert a screen position (y down) to world coordinates (y up)
#[inline]
pub fn screen_to_world(screen: Vec2, height: f32) -> Vec2 {
    Vec2::new(screen.x, height - screen.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_get_angle_axes() {
        let origin = Vec2::ZERO;
        assert!(get_angle(Vec2::new(10.0, 0.0), origin).abs() < 1e-4);
        assert!((get_angle(Vec2::new(0.0, 10.0), origin) - 90.0).abs() < 1e-4);
        assert!((get_angle(Vec2::new(-10.0, 0.0), origin) - 180.0).abs() < 1e-4);
        assert!((get_angle(Vec2::new(0.0, -10.0), origin) - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_screen_to_world_flips_y() {
        let p = screen_to_world(Vec2::new(120.0, 100.0), consts::HEIGHT);
        assert_eq!(p, Vec2::new(120.0, 800.0));
    }

    proptest! {
        #[test]
        fn prop_get_angle_in_range(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
        ) {
            let angle = get_angle(Vec2::new(ax, ay), Vec2::new(bx, by));
            prop_assert!((0.0..360.0).contains(&angle));
        }

        #[test]
        fn prop_get_angle_reversed_differs_by_half_turn(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assume!(a.distance(b) > 1.0);
            let diff = (get_angle(a, b) - get_angle(b, a)).rem_euclid(360.0);
            prop_assert!((diff - 180.0).abs() < 0.01, "diff = {}", diff);
        }
    }
}
