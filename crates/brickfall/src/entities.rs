//! Typed game entities built from decoded level cells
//!
//! Solid kinds carry box volumes and block movement; zone kinds carry
//! sphere volumes and trigger on overlap with the player. Each kind knows
//! its own vertical placement offset above the cell base.

use grid_engine::foundation::math::{Transform, Vec3};
use grid_engine::physics::collision::CollisionVolume;

/// Stable index into the world's entity list
pub type EntityId = usize;

/// What a placed entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Brick that disappears when broken
    Breakable,
    /// Permanent solid block
    Unbreakable,
    /// Level-exit trigger zone
    Goal,
    /// Optional pickup trigger zone
    Objective,
    /// The player avatar
    Player,
}

impl EntityKind {
    /// Vertical offset above the cell's base translation
    pub const fn vertical_offset(self) -> f32 {
        match self {
            Self::Breakable | Self::Unbreakable => 0.0,
            Self::Goal | Self::Objective => 0.25,
            Self::Player => 0.05,
        }
    }

    /// Canonical sphere radius for zone kinds
    pub const fn zone_radius(self) -> f32 {
        match self {
            Self::Goal => 0.6,
            Self::Objective => 0.4,
            _ => 0.0,
        }
    }

    /// Solid kinds block movement
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Breakable | Self::Unbreakable)
    }

    /// Zone kinds trigger on player overlap instead of blocking
    pub const fn is_zone(self) -> bool {
        matches!(self, Self::Goal | Self::Objective)
    }

    fn volume(self) -> CollisionVolume {
        if self.is_zone() {
            CollisionVolume::sphere(self.zone_radius())
        } else {
            CollisionVolume::unit_box()
        }
    }
}

/// One placed entity
#[derive(Debug, Clone)]
pub struct Entity {
    /// Index in the owning world's entity list
    pub id: EntityId,
    /// Entity kind
    pub kind: EntityKind,
    /// Field value from the level cell; for breakables this is the
    /// opacity level, counted down as the brick is hit
    pub opacity: u32,
    /// World transform
    pub transform: Transform,
    /// Collision volume, kept in sync with the transform
    pub volume: CollisionVolume,
    /// Set once a zone entity has been collected
    pub collected: bool,
    /// Set once a breakable entity has been broken through
    pub broken: bool,
}

impl Entity {
    /// Build an entity at a cell's base translation
    ///
    /// Applies the kind's vertical offset and initializes the collision
    /// volume so the entity is queryable immediately.
    pub fn new(id: EntityId, kind: EntityKind, opacity: u32, base: Vec3) -> Self {
        let position = base + Vec3::new(0.0, kind.vertical_offset(), 0.0);
        let transform = Transform::from_position(position);
        let mut volume = kind.volume();
        volume.update(&transform);

        Self {
            id,
            kind,
            opacity,
            transform,
            volume,
            collected: false,
            broken: false,
        }
    }

    /// Breakables with opacity 2 or higher render translucent
    pub fn is_translucent(&self) -> bool {
        self.kind == EntityKind::Breakable && self.opacity >= 2
    }

    /// Whether this entity currently blocks movement
    pub fn blocks_movement(&self) -> bool {
        self.kind.is_solid() && !self.broken
    }

    /// Move the entity and resync its collision volume
    pub fn translate(&mut self, offset: Vec3) {
        self.transform = self.transform.translated(offset);
        self.volume.update(&self.transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn construction_applies_vertical_offset_and_updates_volume() {
        let goal = Entity::new(0, EntityKind::Goal, 1, Vec3::new(2.0, 0.0, 4.0));
        assert_relative_eq!(goal.transform.position.y, 0.25);
        assert!(goal.volume.is_initialized());
    }

    #[test]
    fn zone_kinds_get_spheres_and_solids_get_boxes() {
        let brick = Entity::new(0, EntityKind::Breakable, 1, Vec3::zeros());
        let goal = Entity::new(1, EntityKind::Goal, 1, Vec3::zeros());
        assert!(matches!(brick.volume, CollisionVolume::Box { .. }));
        assert!(matches!(goal.volume, CollisionVolume::Sphere { .. }));
    }

    #[test]
    fn broken_brick_stops_blocking() {
        let mut brick = Entity::new(0, EntityKind::Breakable, 1, Vec3::zeros());
        assert!(brick.blocks_movement());
        brick.broken = true;
        assert!(!brick.blocks_movement());
    }

    #[test]
    fn translucency_needs_breakable_with_high_opacity() {
        let thin = Entity::new(0, EntityKind::Breakable, 1, Vec3::zeros());
        let thick = Entity::new(1, EntityKind::Breakable, 3, Vec3::zeros());
        let wall = Entity::new(2, EntityKind::Unbreakable, 3, Vec3::zeros());
        assert!(!thin.is_translucent());
        assert!(thick.is_translucent());
        assert!(!wall.is_translucent());
    }

    #[test]
    fn translate_keeps_volume_in_sync() {
        let mut player = Entity::new(0, EntityKind::Player, 1, Vec3::zeros());
        player.translate(Vec3::new(3.0, 0.0, 0.0));
        let aabb = player.volume.world_aabb().expect("updated");
        assert_relative_eq!(aabb.min.x, 3.0);
    }
}
