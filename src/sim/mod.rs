//! Simulation module
//!
//! All gameplay logic lives here. One frame is one fixed timestep:
//! - Controller writes the hero's velocity
//! - Cursor targeting and highlight are recomputed from scratch
//! - Push/pull sets the velocity of whichever body yields
//! - Physics integrates exactly once

pub mod controller;
pub mod entity;
pub mod highlight;
pub mod interaction;
pub mod physics;
pub mod tick;
pub mod world;

pub use controller::{ControllerCommand, JumpState, PlayerController};
pub use entity::{Entity, EntityId, Highlight};
pub use interaction::{Action, Interaction, Mover, resolve, resolve_in};
pub use physics::PhysicsSpace;
pub use tick::{TickReport, tick};
pub use world::{BodyState, Wall, World};
