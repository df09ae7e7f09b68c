//! Draw list generation
//!
//! Rendering is pure output: every collider is emitted as a colored quad
//! (entities in their highlight color) for whatever backend presents it.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, as_bytes};

use glam::Vec2;

use crate::settings::{Color, Palette};
use crate::sim::World;

/// Everything needed to present one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
}

/// Build the draw list for the current world state
pub fn draw_world(world: &World, palette: &Palette) -> DrawList {
    let mut vertices = Vec::with_capacity((world.walls().len() + world.len()) * 6);

    for wall in world.walls() {
        vertices.extend(shapes::quad(wall.center, wall.half_extents, 0.0, palette.wall));
    }

    for entity in world.all() {
        let id = entity.id();
        let (Some(position), Some(angle)) = (world.position(id), world.rotation(id)) else {
            continue;
        };
        let half = Vec2::splat(entity.size());
        vertices.extend(shapes::quad(position, half, angle, entity.highlight.color(palette)));
    }

    DrawList {
        clear_color: palette.background,
        vertices,
    }
}
