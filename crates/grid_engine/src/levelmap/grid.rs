//! Size inference and the bit-packed level grid
//!
//! Building a level is a two-pass job: the first pass scans the parsed
//! tokens for the 3D extent so the dense grid can be allocated, the second
//! shifts and ORs every field value into place. The ordering is required
//! because indexed writes need the full allocation up front.

use super::bitfield::{pack, BitFieldLayout};
use super::error::DecodeError;
use super::parser::{ParsedLevel, STRUCTURAL_GROUP};

/// 3D extent of a level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridSize {
    /// Cells per line (X)
    pub x: usize,
    /// Layers (Y)
    pub y: usize,
    /// Lines per layer (Z)
    pub z: usize,
}

impl GridSize {
    /// Infer the extent of a parsed level
    ///
    /// Y is the layer count, Z the maximum line count across layers, and X
    /// the maximum cell count across all structural lines. The structural
    /// group governs the X dimension; shape validation has already pinned
    /// every other group to it.
    pub fn infer(level: &ParsedLevel) -> Self {
        let y = level.layer_count();
        let z = level.layers().map(super::parser::Layer::line_count).max().unwrap_or(0);
        let x = level
            .layers()
            .flat_map(|layer| layer.lines())
            .map(|line| line.group(STRUCTURAL_GROUP).len())
            .max()
            .unwrap_or(0);
        Self { x, y, z }
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.x * self.y * self.z
    }
}

/// A cell coordinate within a level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPos {
    /// Cell index within its line
    pub x: usize,
    /// Layer index
    pub y: usize,
    /// Line index within its layer
    pub z: usize,
}

/// Dense 3D array of bit-packed cells
#[derive(Debug, Clone)]
pub struct LevelGrid {
    size: GridSize,
    cells: Vec<u32>,
}

impl LevelGrid {
    /// Pack a parsed level into a dense grid using the given layout
    ///
    /// For each layer (Y) and line (Z, restarting at zero per layer), every
    /// layout field reads its group's cells (X advancing per cell) and ORs
    /// `value << shift` into the cell. Writes are purely cumulative: each
    /// cell is touched exactly once per field, so packed values can never
    /// collide by double-accumulation.
    pub fn build(level: &ParsedLevel, layout: &BitFieldLayout) -> Result<Self, DecodeError> {
        let size = GridSize::infer(level);
        let mut grid = Self {
            size,
            cells: vec![0; size.cell_count()],
        };

        for (y, layer) in level.layers().enumerate() {
            for (z, line) in layer.lines().enumerate() {
                for (field, shift) in layout.fields() {
                    for (x, &value) in line.group(field.group).iter().enumerate() {
                        if value > field.max_value() {
                            return Err(DecodeError::ValueOutOfRange {
                                field: field.name.clone(),
                                value,
                                bits: field.bits,
                                x,
                                y,
                                z,
                            });
                        }
                        let index = grid.index(x, y, z);
                        grid.cells[index] |= pack(value, field.bits, shift);
                    }
                }
            }
        }

        Ok(grid)
    }

    /// Grid extent
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Packed value of one cell
    pub fn cell(&self, pos: GridPos) -> u32 {
        self.cells[self.index(pos.x, pos.y, pos.z)]
    }

    // Row-major with X fastest, matching the materializer's walk order.
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.size.x && y < self.size.y && z < self.size.z);
        (z * self.size.y + y) * self.size.x + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levelmap::bitfield::{extract, FieldDescriptor};
    use crate::levelmap::parser::LevelSet;

    fn test_layout() -> BitFieldLayout {
        BitFieldLayout::new(vec![
            FieldDescriptor::new("room", 1, 6),
            FieldDescriptor::new("pickup", 2, 4),
        ])
        .expect("valid layout")
    }

    #[test]
    fn size_inference_from_two_level_blob() {
        // Two levels, one layer each, two lines of three cells
        let set = LevelSet::from_str("1-1,1,1/1-2,2,2*1-0,0,0/1-0,0,0");
        let level = set.parse_level(0).expect("valid");
        assert_eq!(GridSize::infer(&level), GridSize { x: 3, y: 1, z: 2 });
    }

    #[test]
    fn size_inference_counts_layers_on_y() {
        let level = ParsedLevel::parse("a-1,1/b-1,1&a-1,1/b-1,1&a-1,1/b-1,1").expect("valid");
        assert_eq!(GridSize::infer(&level), GridSize { x: 2, y: 3, z: 2 });
    }

    #[test]
    fn build_packs_fields_at_their_shifts() {
        let layout = test_layout();
        let level = ParsedLevel::parse("a-3,0-0,9").expect("valid");
        let grid = LevelGrid::build(&level, &layout).expect("builds");

        let first = grid.cell(GridPos { x: 0, y: 0, z: 0 });
        assert_eq!(extract(first, 6, 0), 3);
        assert_eq!(extract(first, 4, 6), 0);

        let second = grid.cell(GridPos { x: 1, y: 0, z: 0 });
        assert_eq!(extract(second, 6, 0), 0);
        assert_eq!(extract(second, 4, 6), 9);
    }

    #[test]
    fn line_index_resets_between_layers() {
        let layout = test_layout();
        let level = ParsedLevel::parse("a-1/b-2&a-3/b-4").expect("valid");
        let grid = LevelGrid::build(&level, &layout).expect("builds");

        assert_eq!(grid.cell(GridPos { x: 0, y: 1, z: 0 }), 3);
        assert_eq!(grid.cell(GridPos { x: 0, y: 1, z: 1 }), 4);
    }

    #[test]
    fn oversized_cell_value_is_rejected_with_coordinates() {
        let layout = test_layout();
        // 16 does not fit the pickup field's 4 bits
        let level = ParsedLevel::parse("a-1,1/b-1,1-0,16").expect("valid shape");
        let err = LevelGrid::build(&level, &layout).expect_err("too large");
        match err {
            DecodeError::ValueOutOfRange {
                field,
                value,
                bits,
                x,
                y,
                z,
            } => {
                assert_eq!(field, "pickup");
                assert_eq!((value, bits), (16, 4));
                assert_eq!((x, y, z), (1, 0, 1));
            }
            other => panic!("expected ValueOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn omitted_groups_leave_cells_empty() {
        let layout = test_layout();
        let level = ParsedLevel::parse("a-0,5,0").expect("valid");
        let grid = LevelGrid::build(&level, &layout).expect("builds");

        assert_eq!(grid.cell(GridPos { x: 0, y: 0, z: 0 }), 0);
        assert_eq!(grid.cell(GridPos { x: 1, y: 0, z: 0 }), 5);
    }
}
