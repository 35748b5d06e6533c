//! Entity-owned collision volumes
//!
//! A [`CollisionVolume`] stores a canonical model-space shape and caches the
//! world-space bounds computed by [`CollisionVolume::update`]. Callers must
//! `update` once after construction before querying; a volume queried before
//! its first update answers with the degenerate empty result (no
//! intersection, no hit) and logs a warning instead of crashing.

use log::warn;

use super::primitives::{Aabb, BoundingSphere, Frustum, Ray};
use crate::foundation::math::{Transform, Vec3};

/// Extent of the canonical unit box along each axis.
///
/// The box spans `(0,0,0)..(0.975,0.975,0.975)` in model space: the minimum
/// corner sits on the origin, not at the center. Grid placement math relies
/// on this asymmetric corner-anchored shape, so it must not be centered.
pub const UNIT_BOX_EXTENT: f32 = 0.975;

/// World-space bounds cached by a volume after `update`
#[derive(Debug, Clone, Copy)]
enum WorldBounds {
    Box(Aabb),
    Sphere(BoundingSphere),
}

impl WorldBounds {
    fn translated(self, offset: Vec3) -> Self {
        match self {
            Self::Box(aabb) => Self::Box(aabb.translated(offset)),
            Self::Sphere(sphere) => Self::Sphere(sphere.translated(offset)),
        }
    }

    fn intersects(self, other: Self) -> bool {
        match (self, other) {
            (Self::Box(a), Self::Box(b)) => a.intersects(&b),
            (Self::Box(aabb), Self::Sphere(sphere))
            | (Self::Sphere(sphere), Self::Box(aabb)) => aabb.intersects_sphere(&sphere),
            (Self::Sphere(a), Self::Sphere(b)) => a.intersects(&b),
        }
    }
}

/// A collision volume owned by a single entity
///
/// Closed sum type over the two shapes the game uses: corner-anchored
/// axis-aligned boxes for solid blocks and bounding spheres for trigger
/// zones. `Clone` is a plain deep copy; clones share no mutable state with
/// the original.
#[derive(Debug, Clone)]
pub enum CollisionVolume {
    /// Axis-aligned box grown from the canonical unit box by the transform
    Box {
        /// World-space bounds from the most recent `update`
        world: Option<Aabb>,
    },
    /// Sphere scaled from a canonical model-space radius
    Sphere {
        /// Model-space radius before transform scaling
        canonical_radius: f32,
        /// World-space bounds from the most recent `update`
        world: Option<BoundingSphere>,
    },
}

impl CollisionVolume {
    /// Create a box volume; call [`update`](Self::update) before querying
    pub fn unit_box() -> Self {
        Self::Box { world: None }
    }

    /// Create a sphere volume with the given canonical radius
    pub fn sphere(canonical_radius: f32) -> Self {
        Self::Sphere {
            canonical_radius,
            world: None,
        }
    }

    /// Recompute world-space bounds from the owning entity's transform
    ///
    /// Box: the canonical `(0,0,0)..(0.975,0.975,0.975)` box scaled
    /// component-wise by `transform.scale`, then translated. Sphere: center
    /// at the translation, radius = canonical radius * (|scale| / 2), where
    /// |scale| is the Euclidean length of the scale vector.
    ///
    /// Idempotent: updating twice with the same transform yields identical
    /// bounds.
    pub fn update(&mut self, transform: &Transform) {
        match self {
            Self::Box { world } => {
                let min = transform.position;
                let max = transform.position
                    + Vec3::new(
                        transform.scale.x * UNIT_BOX_EXTENT,
                        transform.scale.y * UNIT_BOX_EXTENT,
                        transform.scale.z * UNIT_BOX_EXTENT,
                    );
                *world = Some(Aabb::new(min, max));
            }
            Self::Sphere {
                canonical_radius,
                world,
            } => {
                let radius = *canonical_radius * (transform.scale.magnitude() / 2.0);
                *world = Some(BoundingSphere::new(transform.position, radius));
            }
        }
    }

    /// Whether `update` has been called at least once
    pub fn is_initialized(&self) -> bool {
        match self {
            Self::Box { world } => world.is_some(),
            Self::Sphere { world, .. } => world.is_some(),
        }
    }

    /// World-space AABB of the most recent `update`, if any
    pub fn world_aabb(&self) -> Option<Aabb> {
        match self {
            Self::Box { world } => *world,
            Self::Sphere { world, .. } => world.map(|sphere| {
                Aabb::from_center_extents(
                    sphere.center,
                    Vec3::new(sphere.radius, sphere.radius, sphere.radius),
                )
            }),
        }
    }

    fn bounds(&self) -> Option<WorldBounds> {
        match self {
            Self::Box { world } => world.map(WorldBounds::Box),
            Self::Sphere { world, .. } => world.map(WorldBounds::Sphere),
        }
    }

    fn bounds_or_warn(&self, query: &str) -> Option<WorldBounds> {
        let bounds = self.bounds();
        if bounds.is_none() {
            warn!("collision volume queried ({query}) before its first update; reporting empty");
        }
        bounds
    }

    /// Test intersection against another volume
    pub fn intersects(&self, other: &CollisionVolume) -> bool {
        match (
            self.bounds_or_warn("intersects"),
            other.bounds_or_warn("intersects"),
        ) {
            (Some(a), Some(b)) => a.intersects(b),
            _ => false,
        }
    }

    /// Projected test: would this volume, moved by `translation`, intersect?
    ///
    /// Pure and non-mutating; equivalent to calling `update` with a
    /// translated transform and then testing, without committing the move.
    pub fn intersects_moved(&self, other: &CollisionVolume, translation: Vec3) -> bool {
        match (
            self.bounds_or_warn("intersects_moved"),
            other.bounds_or_warn("intersects_moved"),
        ) {
            (Some(a), Some(b)) => a.translated(translation).intersects(b),
            _ => false,
        }
    }

    /// Test ray intersection, returning the nearest hit distance
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        match self.bounds_or_warn("intersect_ray")? {
            WorldBounds::Box(aabb) => aabb.intersect_ray(ray),
            WorldBounds::Sphere(sphere) => sphere.intersect_ray(ray),
        }
    }

    /// True if the frustum contains or partially intersects this volume
    pub fn in_frustum(&self, frustum: &Frustum) -> bool {
        match self.bounds_or_warn("in_frustum") {
            Some(WorldBounds::Box(aabb)) => frustum.intersects_aabb(&aabb),
            Some(WorldBounds::Sphere(sphere)) => frustum.intersects_sphere(&sphere),
            None => false,
        }
    }
}
