//! Brickfall game logic
//!
//! A 3D puzzle/platformer: break through brick walls, collect objectives,
//! and reach the goal. This crate owns everything the engine deliberately
//! does not know about: the concrete field-group layout of the level text,
//! the typed entities built from decoded cells, the win-condition state,
//! and the persisted level progress. Rendering and input live elsewhere and
//! talk to this crate only through the entity list and collision queries.

pub mod config;
pub mod entities;
pub mod layout;
pub mod levels;
pub mod progress;
pub mod state;
pub mod world;
