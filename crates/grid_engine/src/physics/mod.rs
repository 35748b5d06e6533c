//! Physics module for collision detection
//!
//! Provides the collision primitives and entity-owned collision volumes used
//! by gameplay code. There is no dynamics solver here: entities in a
//! grid-based puzzle game move kinematically and only need boolean
//! intersection answers, nearest ray hits, and "would this move collide"
//! projection tests.

pub mod collision;

pub use collision::{Aabb, BoundingSphere, CollisionVolume, Frustum, Plane, Ray};
