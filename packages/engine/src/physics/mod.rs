//! Physics - thin adapter over rapier2d
//!
//! The sandbox only needs a handful of operations from the engine:
//! - spawn a static square or circle at a position
//! - remove a body
//! - flip a body between static and dynamic
//! - teleport a body
//! - step the world and read back shapes for drawing
//!
//! Coordinates are screen pixels with y pointing down, so gravity is +y.

mod bodies;
mod world;

pub use bodies::{BodyShape, BodyView};
pub use world::{PhysicsWorld, DEFAULT_GRAVITY};

use rapier2d::prelude::RigidBodyHandle;

/// Opaque reference to a body owned by `PhysicsWorld`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub(crate) RigidBodyHandle);
