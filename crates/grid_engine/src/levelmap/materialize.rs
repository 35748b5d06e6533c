//! Grid-to-entity materialization
//!
//! The engine walks the finished grid and hands every non-empty field value
//! to a caller-registered [`CellVisitor`], the construction seam behind
//! which games build their typed entities. The walk also tracks the used
//! extent of the level, from which the camera's orbit focal point and
//! pull-back distance are derived once per load.

use log::debug;

use super::bitfield::{extract, BitFieldLayout, FieldDescriptor};
use super::grid::{GridPos, GridSize, LevelGrid};
use crate::foundation::math::Vec3;

/// Construction callback seam between the decoder and the game
///
/// Implementations receive exactly one call per non-empty field value in
/// the grid, in a fixed deterministic order: cells walk with X innermost,
/// then Y, then Z; fields fire in layout declaration order within a cell.
pub trait CellVisitor {
    /// Place one entity
    ///
    /// `value` is the field's variant/opacity level (always > 0 here);
    /// `world` is the cell's base translation; per-type offsets are the
    /// visitor's business.
    fn place(&mut self, field: &FieldDescriptor, value: u32, cell: GridPos, world: Vec3);
}

/// Used extent of a materialized level, for camera framing
///
/// Tracks the running maximum (x, y, z) dimension over all non-empty cells;
/// a level whose text over-allocates empty border cells frames only what is
/// actually placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelFraming {
    /// Dimensions actually occupied by non-empty cells
    pub used: GridSize,
}

impl LevelFraming {
    /// Camera orbit focal point: half the used world extent per axis
    pub fn orbit_focus(&self, cell_size: Vec3) -> Vec3 {
        Vec3::new(
            self.used.x as f32 * cell_size.x / 2.0,
            self.used.y as f32 * cell_size.y / 2.0,
            self.used.z as f32 * cell_size.z / 2.0,
        )
    }

    /// Camera pull-back distance: the largest used world extent plus margin
    pub fn orbit_distance(&self, cell_size: Vec3, margin: f32) -> f32 {
        let extent = (self.used.x as f32 * cell_size.x)
            .max(self.used.y as f32 * cell_size.y)
            .max(self.used.z as f32 * cell_size.z);
        extent + margin
    }
}

/// Walk the grid and invoke the visitor for every non-empty field value
///
/// The cell's world translation is `(x * cell_size.x, y * cell_size.y,
/// z * cell_size.z)` with a fixed canonical orientation; nothing rotates
/// per cell. Iteration order is part of the contract: entity indices
/// assigned by visitors stay stable across loads of the same level.
pub fn materialize(
    grid: &LevelGrid,
    layout: &BitFieldLayout,
    cell_size: Vec3,
    visitor: &mut dyn CellVisitor,
) -> LevelFraming {
    let size = grid.size();
    let mut used = GridSize::default();
    let mut placed = 0usize;

    for z in 0..size.z {
        for y in 0..size.y {
            for x in 0..size.x {
                let pos = GridPos { x, y, z };
                let packed = grid.cell(pos);
                if packed == 0 {
                    continue;
                }

                let world = Vec3::new(
                    x as f32 * cell_size.x,
                    y as f32 * cell_size.y,
                    z as f32 * cell_size.z,
                );

                for (field, shift) in layout.fields() {
                    let value = extract(packed, field.bits, shift);
                    if value > 0 {
                        visitor.place(field, value, pos, world);
                        placed += 1;
                    }
                }

                used.x = used.x.max(x + 1);
                used.y = used.y.max(y + 1);
                used.z = used.z.max(z + 1);
            }
        }
    }

    debug!(
        "materialized {placed} field value(s); used extent {}x{}x{}",
        used.x, used.y, used.z
    );
    LevelFraming { used }
}
