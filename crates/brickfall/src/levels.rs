//! Level loading
//!
//! Binds the engine's decode pipeline to the game's field layout and
//! entity constructors. A level loads atomically: parse, validate, build
//! the grid, then materialize into a fresh [`GameWorld`]; any failure
//! leaves the caller's previous world untouched.

use std::path::Path;

use log::{info, warn};
use thiserror::Error;

use grid_engine::levelmap::{materialize, DecodeError, LayoutError, LevelGrid, LevelSet};

use crate::config::GameConfig;
use crate::layout::field_layout;
use crate::world::GameWorld;

/// Levels compiled into the binary, used when the level file is absent
pub const DEFAULT_LEVELS: &str = include_str!("../assets/levels.txt");

/// Errors from loading a level
#[derive(Debug, Error)]
pub enum LoadError {
    /// The bit layout no longer fits a cell
    #[error("field layout is invalid: {0}")]
    Layout(#[from] LayoutError),

    /// The level text failed to decode
    #[error("level {index} failed to decode: {source}")]
    Decode {
        /// Zero-based level index within the set
        index: usize,
        /// Underlying decode failure
        #[source]
        source: DecodeError,
    },
}

/// Load the level set from disk, falling back to the embedded levels
pub fn load_level_set(path: &Path) -> LevelSet {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            info!("loaded level set from {}", path.display());
            LevelSet::from_str(&text)
        }
        Err(err) => {
            warn!(
                "could not read level file {}: {err}; using built-in levels",
                path.display()
            );
            LevelSet::from_str(DEFAULT_LEVELS)
        }
    }
}

/// Decode and materialize one level into a fresh world
///
/// `index` is zero-based within the set.
pub fn load_level(set: &LevelSet, index: usize, config: &GameConfig) -> Result<GameWorld, LoadError> {
    let layout = field_layout()?;
    let level = set
        .parse_level(index)
        .map_err(|source| LoadError::Decode { index, source })?;
    let grid =
        LevelGrid::build(&level, &layout).map_err(|source| LoadError::Decode { index, source })?;

    let mut world = GameWorld::new();
    let framing = materialize(&grid, &layout, config.block_size(), &mut world);
    world.set_framing(framing);

    info!(
        "level {} ready: {} entities, {} goal(s), grid {}x{}x{}",
        index + 1,
        world.entities().len(),
        world.goal_count(),
        grid.size().x,
        grid.size().y,
        grid.size().z,
    );
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_level_set_has_two_levels() {
        let set = LevelSet::from_str(DEFAULT_LEVELS);
        assert_eq!(set.level_count(), 2);
    }

    #[test]
    fn missing_level_file_falls_back_to_built_ins() {
        let set = load_level_set(Path::new("/nonexistent/levels.txt"));
        assert_eq!(set.level_count(), 2);
    }

    #[test]
    fn out_of_range_index_reports_which_level() {
        let set = LevelSet::from_str(DEFAULT_LEVELS);
        let err = load_level(&set, 9, &GameConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::Decode { index: 9, .. }));
    }
}
