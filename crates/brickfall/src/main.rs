//! Brickfall entry point
//!
//! Boots logging, loads configuration and persisted progress, then decodes
//! and materializes the current level. A load failure logs the exact
//! coordinates of the problem and exits without touching the progress file.

use std::path::Path;
use std::process::ExitCode;

use log::{error, info};

use brickfall::config::GameConfig;
use brickfall::levels::{load_level, load_level_set};
use brickfall::progress::read_level_index;
use brickfall::state::GameState;
use grid_engine::config::Config;

const CONFIG_PATH: &str = "config.toml";

fn main() -> ExitCode {
    grid_engine::foundation::logging::init();

    let config = if Path::new(CONFIG_PATH).exists() {
        match GameConfig::load_from_file(CONFIG_PATH) {
            Ok(config) => config,
            Err(err) => {
                error!("failed to load {CONFIG_PATH}: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        GameConfig::default()
    };

    let set = load_level_set(Path::new(&config.levels_path));
    if set.level_count() == 0 {
        error!("level set is empty");
        return ExitCode::FAILURE;
    }

    let level_index = read_level_index(Path::new(&config.progress_path));
    let world = match load_level(&set, level_index - 1, &config) {
        Ok(world) => world,
        Err(err) => {
            error!("cannot start level {level_index}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let state = GameState::begin_level(
        level_index,
        world.goal_count(),
        world.framing(),
        config.block_size(),
        config.camera_margin,
    );

    info!(
        "level {} of {}: {} entities, {} goal(s), camera focus ({:.1}, {:.1}, {:.1}) at distance {:.1}",
        state.level_index,
        set.level_count(),
        world.entities().len(),
        state.goals_total,
        state.camera.focus.x,
        state.camera.focus.y,
        state.camera.focus.z,
        state.camera.distance,
    );

    ExitCode::SUCCESS
}
