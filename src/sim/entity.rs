//! Interactable entities: the hero and the level's objects

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::physics::{BoxBody, ColliderHandle, PhysicsSpace, RigidBodyHandle};
use crate::level::{EntityDef, LevelError};
use crate::settings::{Color, Palette};

/// Stable entity index within a [`World`](super::World)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub(crate) usize);

impl EntityId {
    /// The hero is always the first entity
    pub const HERO: EntityId = EntityId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Per-frame highlight state of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Highlight {
    /// Not targeted
    #[default]
    None,
    /// Targeted and lighter than the hero (the object will move)
    Lighter,
    /// Targeted and at least as heavy as the hero (the hero will move)
    Heavier,
}

impl Highlight {
    pub fn color(self, palette: &Palette) -> Color {
        match self {
            Highlight::None => palette.default,
            Highlight::Lighter => palette.highlight_lighter,
            Highlight::Heavier => palette.highlight_heavier,
        }
    }

    pub fn is_highlighted(self) -> bool {
        self != Highlight::None
    }
}

/// A square physics-backed entity
///
/// Mass and size are fixed at construction; the body and collider handles
/// are never reassigned.
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    name: String,
    mass: f32,
    size: f32,
    start: Vec2,
    metal: bool,
    friction: f32,
    pub highlight: Highlight,
    body: RigidBodyHandle,
    collider: ColliderHandle,
}

impl Entity {
    /// Validate `def` and register its body with the physics space
    pub(crate) fn spawn(
        id: EntityId,
        def: &EntityDef,
        space: &mut PhysicsSpace,
        lock_rotation: bool,
    ) -> Result<Self, LevelError> {
        def.validate()?;

        let start = def.start();
        let (body, collider) = space.add_box(&BoxBody {
            position: start,
            half_extent: def.size,
            mass: def.mass,
            friction: def.friction,
            lock_rotation,
        });

        Ok(Self {
            id,
            name: def.name.clone(),
            mass: def.mass,
            size: def.size,
            start,
            metal: def.metal,
            friction: def.friction,
            highlight: Highlight::None,
            body,
            collider,
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Half-extent of the square collider
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Whether the entity can be pushed or pulled at all
    pub fn is_metal(&self) -> bool {
        self.metal
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    pub fn collider(&self) -> ColliderHandle {
        self.collider
    }
}
