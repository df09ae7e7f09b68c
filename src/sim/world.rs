//! The world aggregate
//!
//! Owns the physics space, the boundary walls and every entity. The hero is
//! always entity 0 and shares the query space with the objects.

use glam::Vec2;

use super::entity::{Entity, EntityId};
use super::physics::{ColliderHandle, PhysicsSpace};
use crate::level::{EntityDef, LevelDescription, LevelError};
use crate::settings::Settings;

/// Vertical offset of the floor centerline from the bottom edge
pub const FLOOR_INSET: f32 = 5.0;

/// A static boundary wall
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub center: Vec2,
    pub half_extents: Vec2,
    pub collider: ColliderHandle,
}

/// Snapshot of the state the interaction resolver needs from a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub id: EntityId,
    pub mass: f32,
    pub position: Vec2,
}

pub struct World {
    physics: PhysicsSpace,
    walls: Vec<Wall>,
    entities: Vec<Entity>,
}

impl World {
    /// Create a world with boundary walls and the hero
    pub fn new(settings: &Settings, hero: &EntityDef) -> Result<Self, LevelError> {
        let mut world = Self {
            physics: PhysicsSpace::new(settings.gravity),
            walls: Vec::new(),
            entities: Vec::new(),
        };
        world.build_walls(settings);

        let hero = Entity::spawn(EntityId::HERO, hero, &mut world.physics, true)?;
        world.entities.push(hero);
        Ok(world)
    }

    /// Create a world populated from a level description
    pub fn from_level(settings: &Settings, level: &LevelDescription) -> Result<Self, LevelError> {
        let mut world = Self::new(settings, &level.hero)?;
        for def in &level.objects {
            world.create(def)?;
        }
        log::debug!(
            "World built: {} entities, {} colliders",
            world.entities.len(),
            world.physics.collider_count()
        );
        Ok(world)
    }

    /// Four walls around the arena: floor, left, ceiling, right
    fn build_walls(&mut self, settings: &Settings) {
        let w = settings.wall_width;
        let (width, height) = (settings.width, settings.height);
        let mid_y = (FLOOR_INSET + height) / 2.0;
        let half_span_y = (height - FLOOR_INSET) / 2.0 + w;
        let half_span_x = width / 2.0 + w;

        let walls = [
            (Vec2::new(width / 2.0, FLOOR_INSET), Vec2::new(half_span_x, w)),
            (Vec2::new(0.0, mid_y), Vec2::new(w, half_span_y)),
            (Vec2::new(width / 2.0, height), Vec2::new(half_span_x, w)),
            (Vec2::new(width - w, mid_y), Vec2::new(w, half_span_y)),
        ];

        for (center, half_extents) in walls {
            let collider = self
                .physics
                .add_static_box(center, half_extents, settings.wall_friction);
            self.walls.push(Wall {
                center,
                half_extents,
                collider,
            });
        }
    }

    /// Register a new object entity
    pub fn create(&mut self, def: &EntityDef) -> Result<EntityId, LevelError> {
        let id = EntityId(self.entities.len());
        let entity = Entity::spawn(id, def, &mut self.physics, false)?;
        self.entities.push(entity);
        Ok(id)
    }

    pub fn hero_id(&self) -> EntityId {
        EntityId::HERO
    }

    pub fn hero(&self) -> &Entity {
        &self.entities[0]
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0)
    }

    /// Every entity, hero first, then objects in insertion order
    pub fn all(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Non-hero entities in insertion order
    pub fn objects(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().skip(1)
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn physics(&self) -> &PhysicsSpace {
        &self.physics
    }

    /// The shape under `point`, if any (walls included)
    pub fn query_at(&self, point: Vec2) -> Option<ColliderHandle> {
        self.physics.query_point(point)
    }

    /// Entity owning a collider
    pub fn owner_of(&self, collider: ColliderHandle) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|e| e.collider() == collider)
            .map(Entity::id)
    }

    pub fn position(&self, id: EntityId) -> Option<Vec2> {
        self.get(id).and_then(|e| self.physics.position(e.body()))
    }

    pub fn rotation(&self, id: EntityId) -> Option<f32> {
        self.get(id).and_then(|e| self.physics.rotation(e.body()))
    }

    pub fn velocity(&self, id: EntityId) -> Option<Vec2> {
        self.get(id).and_then(|e| self.physics.velocity(e.body()))
    }

    pub fn body_state(&self, id: EntityId) -> Option<BodyState> {
        let entity = self.get(id)?;
        Some(BodyState {
            id,
            mass: entity.mass(),
            position: self.physics.position(entity.body())?,
        })
    }

    pub fn set_velocity(&mut self, id: EntityId, velocity: Vec2) {
        if let Some(body) = self.get(id).map(Entity::body) {
            self.physics.set_velocity(body, velocity);
        }
    }

    pub fn set_velocity_x(&mut self, id: EntityId, vx: f32) {
        if let Some(body) = self.get(id).map(Entity::body) {
            self.physics.set_velocity_x(body, vx);
        }
    }

    pub fn set_velocity_y(&mut self, id: EntityId, vy: f32) {
        if let Some(body) = self.get(id).map(Entity::body) {
            self.physics.set_velocity_y(body, vy);
        }
    }

    /// Integrate one fixed timestep
    pub fn step(&mut self, dt: f32) {
        self.physics.step(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level() -> LevelDescription {
        LevelDescription {
            hero: EntityDef::new("hero", 5.0, 15.0, Vec2::new(35.0, 500.0)),
            objects: vec![
                EntityDef::new("crate", 10.0, 20.0, Vec2::new(135.0, 500.0)),
                EntityDef::new("coin", 1.0, 5.0, Vec2::new(300.0, 500.0)),
            ],
        }
    }

    #[test]
    fn test_from_level_registers_everything() {
        let world = World::from_level(&Settings::default(), &level()).unwrap();
        assert_eq!(world.len(), 3);
        assert_eq!(world.hero().name(), "hero");
        assert_eq!(world.walls().len(), 4);
        assert_eq!(world.physics().collider_count(), 7);

        let names: Vec<_> = world.objects().map(|e| e.name()).collect();
        assert_eq!(names, ["crate", "coin"]);
    }

    #[test]
    fn test_entities_keep_positive_mass_and_size() {
        let world = World::from_level(&Settings::default(), &level()).unwrap();
        assert!(world.all().all(|e| e.mass() > 0.0 && e.size() > 0.0));
    }

    #[test]
    fn test_create_rejects_non_positive_size() {
        let mut world = World::from_level(&Settings::default(), &level()).unwrap();
        let err = world
            .create(&EntityDef::new("flat", 1.0, 0.0, Vec2::new(400.0, 400.0)))
            .unwrap_err();
        assert!(matches!(err, LevelError::NonPositive { field: "size", .. }));
        assert_eq!(world.len(), 3);
    }

    #[test]
    fn test_query_and_owner_lookup() {
        let world = World::from_level(&Settings::default(), &level()).unwrap();

        let hit = world.query_at(Vec2::new(140.0, 505.0)).unwrap();
        assert_eq!(world.owner_of(hit), Some(EntityId(1)));

        let hero_hit = world.query_at(Vec2::new(35.0, 500.0)).unwrap();
        assert_eq!(world.owner_of(hero_hit), Some(world.hero_id()));

        assert!(world.query_at(Vec2::new(600.0, 600.0)).is_none());
    }

    #[test]
    fn test_wall_hit_has_no_owner() {
        let world = World::from_level(&Settings::default(), &level()).unwrap();
        let floor = world.query_at(Vec2::new(450.0, 5.0)).unwrap();
        assert_eq!(world.owner_of(floor), None);
    }

    #[test]
    fn test_body_state_reports_mass_and_position() {
        let world = World::from_level(&Settings::default(), &level()).unwrap();
        let state = world.body_state(EntityId(1)).unwrap();
        assert_eq!(state.mass, 10.0);
        assert_eq!(state.position, Vec2::new(135.0, 500.0));
    }
}
