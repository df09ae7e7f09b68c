//! Push/pull interaction resolution
//!
//! Given a targeted entity and the hero, work out which of the two moves
//! and with what velocity. The lighter side always yields: a heavier hero
//! drags or shoves the object, otherwise the hero is dragged toward or
//! thrown away from the object. Push is the exact negation of pull.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::world::{BodyState, World};
use crate::angle_between;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Push,
    Pull,
}

/// Which side of the interaction receives the velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mover {
    Hero,
    Target,
}

/// A resolved push/pull: the velocity and the body to set it on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub action: Action,
    pub mover: Mover,
    /// Entity whose body receives `velocity`
    pub body: EntityId,
    pub velocity: Vec2,
}

impl Interaction {
    /// Overwrite the chosen body's velocity
    pub fn apply(&self, world: &mut World) {
        world.set_velocity(self.body, self.velocity);
    }
}

/// Decide who moves: the hero only stays put when strictly heavier
#[inline]
pub fn mover_for(hero_mass: f32, target_mass: f32) -> Mover {
    if hero_mass > target_mass {
        Mover::Target
    } else {
        Mover::Hero
    }
}

/// Resolve an interaction between `target` and `hero`
///
/// `speed` is the velocity magnitude (player speed times pulling strength).
pub fn resolve(action: Action, target: &BodyState, hero: &BodyState, speed: f32) -> Interaction {
    let angle = angle_between(target.position, hero.position);
    // Unit vector pointing from the hero to the target
    let toward_target = Vec2::new(angle.cos(), angle.sin());

    let mover = mover_for(hero.mass, target.mass);
    let (body, pull_dir) = match mover {
        Mover::Hero => (hero.id, toward_target),
        Mover::Target => (target.id, -toward_target),
    };
    let dir = match action {
        Action::Pull => pull_dir,
        Action::Push => -pull_dir,
    };

    Interaction {
        action,
        mover,
        body,
        velocity: dir * speed,
    }
}

/// Resolve against live world state; `None` if either entity is missing
pub fn resolve_in(world: &World, action: Action, target: EntityId, speed: f32) -> Option<Interaction> {
    let hero = world.body_state(world.hero_id())?;
    let target = world.body_state(target)?;
    let interaction = resolve(action, &target, &hero, speed);
    log::debug!(
        "{:?}: moving {:?} (entity {}) at {:?}",
        action,
        interaction.mover,
        interaction.body.index(),
        interaction.velocity
    );
    Some(interaction)
}
