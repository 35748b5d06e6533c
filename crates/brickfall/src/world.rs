//! The live game world
//!
//! [`GameWorld`] is the game's [`CellVisitor`]: the materializer walks the
//! decoded grid and this type turns every field value into a typed entity.
//! After construction it answers the queries gameplay needs, such as
//! movement blocking, zone collection, ray picking, and frustum visibility.

use log::debug;

use grid_engine::foundation::math::Vec3;
use grid_engine::levelmap::{CellVisitor, FieldDescriptor, GridPos, LevelFraming};
use grid_engine::physics::collision::{Frustum, Ray};

use crate::entities::{Entity, EntityId, EntityKind};
use crate::layout::FieldKind;

/// All entities of the current level plus bookkeeping for win detection
#[derive(Debug, Default)]
pub struct GameWorld {
    entities: Vec<Entity>,
    player: Option<EntityId>,
    goal_count: usize,
    framing: LevelFraming,
}

impl CellVisitor for GameWorld {
    fn place(&mut self, field: &FieldDescriptor, value: u32, cell: GridPos, world: Vec3) {
        let Some(kind) = FieldKind::from_name(&field.name) else {
            debug!("no constructor for field '{}' at {:?}; skipping", field.name, cell);
            return;
        };

        let kind = match kind {
            FieldKind::Breakable => EntityKind::Breakable,
            FieldKind::Unbreakable => EntityKind::Unbreakable,
            FieldKind::Goal => EntityKind::Goal,
            FieldKind::Objective => EntityKind::Objective,
            FieldKind::Player => EntityKind::Player,
        };

        let id = self.entities.len();
        self.entities.push(Entity::new(id, kind, value, world));

        match kind {
            EntityKind::Goal => self.goal_count += 1,
            EntityKind::Player => self.player = Some(id),
            _ => {}
        }
    }
}

impl GameWorld {
    /// Create an empty world ready to receive materialized cells
    pub fn new() -> Self {
        Self::default()
    }

    /// All entities, in placement order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Entity lookup by id
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// The player entity's id, if the level placed one
    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    /// Number of goal zones placed by the level
    pub fn goal_count(&self) -> usize {
        self.goal_count
    }

    /// Record the framing computed during materialization
    pub fn set_framing(&mut self, framing: LevelFraming) {
        self.framing = framing;
    }

    /// Used-extent framing of the loaded level
    pub fn framing(&self) -> LevelFraming {
        self.framing
    }

    /// Whether moving entity `id` by `offset` would collide with a solid
    ///
    /// Uses the projected test: nothing moves, no volume mutates. Broken
    /// bricks and zone entities never block.
    pub fn can_move(&self, id: EntityId, offset: Vec3) -> bool {
        let Some(mover) = self.entities.get(id) else {
            return false;
        };

        !self
            .entities
            .iter()
            .filter(|other| other.id != id && other.blocks_movement())
            .any(|other| mover.volume.intersects_moved(&other.volume, offset))
    }

    /// Move an entity, syncing its collision volume
    pub fn translate_entity(&mut self, id: EntityId, offset: Vec3) {
        if let Some(entity) = self.entities.get_mut(id) {
            entity.translate(offset);
        }
    }

    /// Collect every uncollected zone the player currently overlaps
    ///
    /// Returns the ids and kinds of newly collected zones, in entity order.
    pub fn collect_touched_zones(&mut self) -> Vec<(EntityId, EntityKind)> {
        let Some(player_id) = self.player else {
            return Vec::new();
        };
        let player_volume = self.entities[player_id].volume.clone();

        let mut collected = Vec::new();
        for entity in &mut self.entities {
            if entity.kind.is_zone()
                && !entity.collected
                && player_volume.intersects(&entity.volume)
            {
                entity.collected = true;
                collected.push((entity.id, entity.kind));
            }
        }
        collected
    }

    /// Break a brick; returns false if `id` is not an unbroken breakable
    pub fn break_block(&mut self, id: EntityId) -> bool {
        match self.entities.get_mut(id) {
            Some(entity) if entity.kind == EntityKind::Breakable && !entity.broken => {
                entity.broken = true;
                true
            }
            _ => false,
        }
    }

    /// Nearest entity hit by a ray, skipping broken bricks and collected
    /// zones
    pub fn pick(&self, ray: &Ray) -> Option<(EntityId, f32)> {
        self.entities
            .iter()
            .filter(|entity| !entity.broken && !entity.collected)
            .filter_map(|entity| entity.volume.intersect_ray(ray).map(|t| (entity.id, t)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// Ids of live entities inside or crossing the frustum
    pub fn visible(&self, frustum: &Frustum) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|entity| !entity.broken && !entity.collected)
            .filter(|entity| entity.volume.in_frustum(frustum))
            .map(|entity| entity.id)
            .collect()
    }
}
