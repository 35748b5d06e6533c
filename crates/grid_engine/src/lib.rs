//! # Grid Engine
//!
//! A headless engine core for grid-based 3D puzzle games.
//!
//! ## Features
//!
//! - **Level-Map Codec**: Text-based multi-layer level format decoded into a
//!   dense bit-packed voxel grid
//! - **Collision Volumes**: Axis-aligned box and sphere volumes with a full
//!   intersection matrix (volume, ray, frustum, and projected-move tests)
//! - **Entity Materialization**: Visitor-based construction seam that keeps
//!   the engine ignorant of concrete game entities
//! - **Configuration**: TOML/RON config loading with typed errors
//!
//! Rendering, audio, and input are deliberately absent: games own those
//! surfaces and consume this crate only through the decoder and the
//! collision queries.
//!
//! ## Quick Start
//!
//! ```rust
//! use grid_engine::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = BitFieldLayout::new(vec![
//!     FieldDescriptor::new("room", 1, 6),
//!     FieldDescriptor::new("pickup", 2, 4),
//! ])?;
//!
//! let levels = LevelSet::from_str("r0-1,1,1/r1-0,1,0");
//! let parsed = levels.parse_level(0)?;
//! let grid = LevelGrid::build(&parsed, &layout)?;
//! assert_eq!(grid.size(), GridSize { x: 3, y: 1, z: 2 });
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod levelmap;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::config::{Config, ConfigError};
    pub use crate::foundation::math::{Mat4, Point3, Quat, Transform, Vec3};
    pub use crate::levelmap::{
        BitFieldLayout, CellVisitor, DecodeError, FieldDescriptor, GridPos, GridSize,
        LayoutError, LevelFraming, LevelGrid, LevelSet, ParsedLevel,
    };
    pub use crate::physics::collision::{
        Aabb, BoundingSphere, CollisionVolume, Frustum, Plane, Ray,
    };
}
