//! Cursor targeting and highlight feedback
//!
//! Recomputed from scratch every frame: everything is reset, then at most
//! one metal, non-hero entity under the cursor is marked. The highlight
//! kind tells the player which side of a push/pull will move.

use glam::Vec2;

use super::entity::{EntityId, Highlight};
use super::world::World;

/// Reset every entity to the default color
pub fn clear(world: &mut World) {
    for entity in world.all_mut() {
        entity.highlight = Highlight::None;
    }
}

/// Classify the entity under `cursor` (world coordinates)
///
/// Returns the targeted entity, if any.
pub fn update(world: &mut World, cursor: Vec2) -> Option<EntityId> {
    clear(world);

    let collider = world.query_at(cursor)?;
    let Some(id) = world.owner_of(collider) else {
        log::debug!("Cursor over static geometry at {:?}", cursor);
        return None;
    };
    if id == world.hero_id() {
        return None;
    }

    let hero_mass = world.hero().mass();
    let target = world.get_mut(id)?;
    if !target.is_metal() {
        return None;
    }

    target.highlight = if hero_mass > target.mass() {
        Highlight::Lighter
    } else {
        Highlight::Heavier
    };
    log::trace!("Targeting `{}` ({:?})", target.name(), target.highlight);
    Some(id)
}

/// The currently highlighted entity, if any
pub fn highlighted(world: &World) -> Option<EntityId> {
    world
        .all()
        .find(|e| e.highlight.is_highlighted())
        .map(|e| e.id())
}
