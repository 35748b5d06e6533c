//! Collision detection for box and sphere volumes
//!
//! # Architecture
//!
//! Collision shapes are a closed sum type over {box, sphere}. Each entity
//! owns exactly one [`CollisionVolume`] holding the canonical model-space
//! shape; `update` recomputes the world-space bounds from the owning
//! transform every tick, and all queries run against those cached bounds.
//!
//! # Module Organization
//!
//! - [`primitives`] - Geometric primitives (rays, planes, frustums, AABBs,
//!   bounding spheres) and the pairwise intersection tests
//! - [`volume`] - The entity-facing [`CollisionVolume`] with update /
//!   projected-move / ray / frustum queries
//!
//! # Key Types
//!
//! - [`CollisionVolume`] - Per-entity volume, recomputed from a `Transform`
//! - [`Aabb`], [`BoundingSphere`] - World-space bounds
//! - [`Ray`], [`Plane`], [`Frustum`] - Query primitives

pub mod primitives;
pub mod volume;

// Re-export commonly used types
pub use primitives::{Aabb, BoundingSphere, Frustum, Plane, Ray};
pub use volume::CollisionVolume;
