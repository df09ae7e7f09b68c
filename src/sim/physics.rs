//! Physics engine boundary
//!
//! Wraps a rapier2d pipeline and exposes only what the game logic needs:
//! body/collider creation, gravity, a fixed-timestep step and a point
//! query. Everything else about rigid-body dynamics stays inside rapier.

use glam::Vec2;
use rapier2d::parry::query::PointQuery;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

#[inline]
fn to_vector(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

#[inline]
fn from_vector(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Description of a dynamic square body
#[derive(Debug, Clone, Copy)]
pub struct BoxBody {
    pub position: Vec2,
    pub half_extent: f32,
    pub mass: f32,
    pub friction: f32,
    /// Keep the body upright (infinite moment of inertia)
    pub lock_rotation: bool,
}

/// The simulated space: dynamic bodies, static walls and gravity
pub struct PhysicsSpace {
    pipeline: PhysicsPipeline,
    gravity: Vector<Real>,
    integration_params: IntegrationParameters,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl PhysicsSpace {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            pipeline: PhysicsPipeline::new(),
            gravity: to_vector(gravity),
            integration_params: IntegrationParameters::default(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    pub fn gravity(&self) -> Vec2 {
        from_vector(&self.gravity)
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = to_vector(gravity);
    }

    /// Add a dynamic square body with its collider
    pub fn add_box(&mut self, desc: &BoxBody) -> (RigidBodyHandle, ColliderHandle) {
        let mut builder = RigidBodyBuilder::dynamic().translation(to_vector(desc.position));
        if desc.lock_rotation {
            builder = builder.lock_rotations();
        }
        let body = self.bodies.insert(builder.build());

        let collider = ColliderBuilder::cuboid(desc.half_extent, desc.half_extent)
            .mass(desc.mass)
            .friction(desc.friction)
            .build();
        let collider = self
            .colliders
            .insert_with_parent(collider, body, &mut self.bodies);

        (body, collider)
    }

    /// Add a static axis-aligned box (walls, floor)
    pub fn add_static_box(&mut self, center: Vec2, half_extents: Vec2, friction: f32) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y)
            .translation(to_vector(center))
            .friction(friction)
            .build();
        self.colliders.insert(collider)
    }

    /// Advance the simulation by one fixed timestep
    pub fn step(&mut self, dt: f32) {
        self.integration_params.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_params,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Topmost collider containing `point`, if any
    ///
    /// Overlaps resolve to the most recently inserted collider.
    pub fn query_point(&self, point: Vec2) -> Option<ColliderHandle> {
        let pt = point![point.x, point.y];
        self.colliders
            .iter()
            .filter(|(_, collider)| collider.shape().contains_point(collider.position(), &pt))
            .map(|(handle, _)| handle)
            .last()
    }

    pub fn position(&self, body: RigidBodyHandle) -> Option<Vec2> {
        self.bodies.get(body).map(|rb| from_vector(rb.translation()))
    }

    /// Body rotation in radians
    pub fn rotation(&self, body: RigidBodyHandle) -> Option<f32> {
        self.bodies.get(body).map(|rb| rb.rotation().angle())
    }

    pub fn velocity(&self, body: RigidBodyHandle) -> Option<Vec2> {
        self.bodies.get(body).map(|rb| from_vector(rb.linvel()))
    }

    /// Overwrite a body's linear velocity (wakes it up)
    pub fn set_velocity(&mut self, body: RigidBodyHandle, velocity: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body) {
            rb.set_linvel(to_vector(velocity), true);
        }
    }

    pub fn set_velocity_x(&mut self, body: RigidBodyHandle, vx: f32) {
        if let Some(v) = self.velocity(body) {
            self.set_velocity(body, Vec2::new(vx, v.y));
        }
    }

    pub fn set_velocity_y(&mut self, body: RigidBodyHandle, vy: f32) {
        if let Some(v) = self.velocity(body) {
            self.set_velocity(body, Vec2::new(v.x, vy));
        }
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
}
