//! Win-condition and camera state for the current level

use grid_engine::foundation::math::Vec3;
use grid_engine::levelmap::LevelFraming;

use crate::entities::EntityKind;

/// Outcome of the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStatus {
    /// Goals remain uncollected
    InProgress,
    /// Every goal zone has been collected
    Won,
    /// The player fell out of the level or got stuck
    Failed,
}

/// Camera framing derived once per level load
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFraming {
    /// Orbit focal point
    pub focus: Vec3,
    /// Orbit pull-back distance
    pub distance: f32,
}

/// Per-level progress toward the win condition
#[derive(Debug, Clone)]
pub struct GameState {
    /// One-based index of the level being played
    pub level_index: usize,
    /// Goal zones the level placed
    pub goals_total: usize,
    /// Goal zones collected so far
    pub goals_collected: usize,
    /// Current outcome
    pub status: LevelStatus,
    /// Camera framing for this level
    pub camera: CameraFraming,
}

impl GameState {
    /// Start a level with the given goal count and framing
    pub fn begin_level(
        level_index: usize,
        goals_total: usize,
        framing: LevelFraming,
        cell_size: Vec3,
        camera_margin: f32,
    ) -> Self {
        // A level with no goals is already won; keep it InProgress so the
        // player can still explore, but record_collection never fires.
        Self {
            level_index,
            goals_total,
            goals_collected: 0,
            status: LevelStatus::InProgress,
            camera: CameraFraming {
                focus: framing.orbit_focus(cell_size),
                distance: framing.orbit_distance(cell_size, camera_margin),
            },
        }
    }

    /// Record a collected zone; goals advance the win condition
    pub fn record_collection(&mut self, kind: EntityKind) {
        if kind == EntityKind::Goal && self.status == LevelStatus::InProgress {
            self.goals_collected += 1;
            if self.goals_collected >= self.goals_total {
                self.status = LevelStatus::Won;
            }
        }
    }

    /// Mark the level as failed
    pub fn fail(&mut self) {
        if self.status == LevelStatus::InProgress {
            self.status = LevelStatus::Failed;
        }
    }

    /// The level index to persist and play next after a win
    pub fn next_level_index(&self) -> usize {
        self.level_index + 1
    }
}
