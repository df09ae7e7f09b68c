//! Fixed timestep frame tick
//!
//! One call runs the whole per-frame pipeline: controller, cursor
//! targeting, push/pull, then exactly one physics step.

use super::controller::PlayerController;
use super::entity::EntityId;
use super::highlight;
use super::interaction::{self, Action, Interaction};
use super::world::World;
use crate::input::FrameInput;
use crate::screen_to_world;
use crate::settings::Settings;

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Entity under the cursor this frame
    pub target: Option<EntityId>,
    /// Push/pull applied this frame
    pub interaction: Option<Interaction>,
}

/// Push wins when both modifiers are held
fn requested_action(input: &FrameInput) -> Option<Action> {
    if input.push {
        Some(Action::Push)
    } else if input.pull {
        Some(Action::Pull)
    } else {
        None
    }
}

/// Advance the world by one frame
pub fn tick(
    world: &mut World,
    controller: &mut PlayerController,
    input: &FrameInput,
    settings: &Settings,
) -> TickReport {
    controller.step(input).apply(world);

    let target = match input.cursor {
        Some(cursor) => highlight::update(world, screen_to_world(cursor, settings.height)),
        None => {
            highlight::clear(world);
            None
        }
    };

    // No target means push/pull is a no-op
    let interaction = target
        .zip(requested_action(input))
        .and_then(|(target, action)| {
            interaction::resolve_in(world, action, target, settings.interaction_speed())
        });
    if let Some(interaction) = &interaction {
        interaction.apply(world);
    }

    world.step(settings.dt());

    TickReport {
        target,
        interaction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{EntityDef, LevelDescription};
    use crate::sim::interaction::Mover;
    use glam::Vec2;

    fn setup() -> (World, PlayerController, Settings) {
        let settings = Settings::default();
        let level = LevelDescription {
            hero: EntityDef::new("hero", 5.0, 15.0, Vec2::new(35.0, 500.0)),
            objects: vec![
                EntityDef::new("anvil", 10.0, 20.0, Vec2::new(135.0, 500.0)),
                EntityDef::new("coin", 1.0, 5.0, Vec2::new(400.0, 500.0)),
            ],
        };
        let world = World::from_level(&settings, &level).unwrap();
        let controller = PlayerController::from_settings(&settings);
        (world, controller, settings)
    }

    /// Screen-space cursor over a world position
    fn cursor_at(world_pos: Vec2, settings: &Settings) -> Option<Vec2> {
        Some(Vec2::new(world_pos.x, settings.height - world_pos.y))
    }

    #[test]
    fn test_pull_without_target_is_noop() {
        let (mut world, mut controller, settings) = setup();
        let input = FrameInput {
            pull: true,
            cursor: cursor_at(Vec2::new(700.0, 700.0), &settings),
            ..Default::default()
        };
        let report = tick(&mut world, &mut controller, &input, &settings);
        assert_eq!(report.target, None);
        assert_eq!(report.interaction, None);
    }

    #[test]
    fn test_pull_heavier_target_moves_hero() {
        let (mut world, mut controller, settings) = setup();
        let input = FrameInput {
            pull: true,
            cursor: cursor_at(Vec2::new(135.0, 500.0), &settings),
            ..Default::default()
        };
        let report = tick(&mut world, &mut controller, &input, &settings);

        assert_eq!(report.target, Some(EntityId(1)));
        let interaction = report.interaction.unwrap();
        assert_eq!(interaction.mover, Mover::Hero);
        assert_eq!(interaction.body, world.hero_id());
        assert!(world.position(world.hero_id()).unwrap().x > 35.0);
    }

    #[test]
    fn test_push_lighter_target_moves_it_away() {
        let (mut world, mut controller, settings) = setup();
        let input = FrameInput {
            push: true,
            cursor: cursor_at(Vec2::new(400.0, 500.0), &settings),
            ..Default::default()
        };
        let report = tick(&mut world, &mut controller, &input, &settings);

        let interaction = report.interaction.unwrap();
        assert_eq!(interaction.body, EntityId(2));
        assert!(world.velocity(EntityId(2)).unwrap().x > 0.0);
        assert!(world.position(EntityId(2)).unwrap().x > 400.0);
    }

    #[test]
    fn test_push_wins_over_pull() {
        let (mut world, mut controller, settings) = setup();
        let input = FrameInput {
            push: true,
            pull: true,
            cursor: cursor_at(Vec2::new(135.0, 500.0), &settings),
            ..Default::default()
        };
        let report = tick(&mut world, &mut controller, &input, &settings);
        assert_eq!(report.interaction.unwrap().action, Action::Push);
    }

    #[test]
    fn test_walking_moves_hero() {
        let (mut world, mut controller, settings) = setup();
        let input = FrameInput {
            left: true,
            ..Default::default()
        };
        tick(&mut world, &mut controller, &input, &settings);
        assert!(world.position(world.hero_id()).unwrap().x < 35.0);
    }

    #[test]
    fn test_no_cursor_clears_highlight() {
        let (mut world, mut controller, settings) = setup();
        let over = FrameInput {
            cursor: cursor_at(Vec2::new(135.0, 500.0), &settings),
            ..Default::default()
        };
        tick(&mut world, &mut controller, &over, &settings);
        assert!(highlight::highlighted(&world).is_some());

        tick(&mut world, &mut controller, &FrameInput::default(), &settings);
        assert!(highlight::highlighted(&world).is_none());
    }
}
