//! Bit-packed level-map codec
//!
//! Decodes a multi-level text blob into a dense 3D grid of packed integers
//! and back out into game entities, in four stages:
//!
//! 1. [`parser`] - split the raw text on the delimiter grammar (`*` levels,
//!    `&` layers, `/` lines, `-` field groups, `,` cells) into integer
//!    tokens, with strict shape validation
//! 2. [`grid`] - infer the 3D extent from the tokens, then pack every field
//!    group's values into disjoint bit ranges of one `u32` per cell
//! 3. [`bitfield`] - the reservation/shift scheme the grid packs with,
//!    validated once at startup
//! 4. [`materialize`] - walk the finished grid and hand each non-empty
//!    field value to a caller-registered visitor, tracking the used extent
//!    for camera framing
//!
//! The codec is pure CPU batch work with no suspension points; a level
//! either decodes completely or fails with a coordinate-carrying error
//! before any entity is constructed.

pub mod bitfield;
pub mod error;
pub mod grid;
pub mod materialize;
pub mod parser;

pub use bitfield::{BitFieldLayout, FieldDescriptor, LayoutError};
pub use error::DecodeError;
pub use grid::{GridPos, GridSize, LevelGrid};
pub use materialize::{materialize, CellVisitor, LevelFraming};
pub use parser::{LevelSet, ParsedLevel};
