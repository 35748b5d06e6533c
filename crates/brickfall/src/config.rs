//! Game configuration
//!
//! Loaded from `config.toml` when present; every field has a sensible
//! default so a missing file or missing keys never stop the game.

use grid_engine::config::{Config, Deserialize, Serialize};
use grid_engine::foundation::math::Vec3;

/// Top-level Brickfall configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// World-space width of one grid cell (X)
    pub block_width: f32,
    /// World-space height of one grid cell (Y)
    pub block_height: f32,
    /// World-space depth of one grid cell (Z)
    pub block_depth: f32,
    /// Extra camera pull-back beyond the level's largest extent
    pub camera_margin: f32,
    /// Path to the level set text file
    pub levels_path: String,
    /// Path to the persisted level progress file
    pub progress_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            block_width: 1.0,
            block_height: 1.0,
            block_depth: 1.0,
            camera_margin: 8.0,
            levels_path: "assets/levels.txt".to_string(),
            progress_path: "current_level.txt".to_string(),
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Cell size vector handed to the materializer
    pub fn block_size(&self) -> Vec3 {
        Vec3::new(self.block_width, self.block_height, self.block_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unit_blocks() {
        let config = GameConfig::default();
        assert_eq!(config.block_size(), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(config.levels_path, "assets/levels.txt");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: GameConfig = toml::from_str("block_width = 2.5").expect("parses");
        assert_eq!(config.block_width, 2.5);
        assert_eq!(config.block_height, 1.0);
        assert_eq!(config.camera_margin, 8.0);
    }
}
