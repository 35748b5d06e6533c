//! End-to-end level loading: text blob in, playable world out

use approx::assert_relative_eq;

use brickfall::config::GameConfig;
use brickfall::entities::EntityKind;
use brickfall::levels::{load_level, DEFAULT_LEVELS};
use grid_engine::levelmap::LevelSet;

fn count_kind(world: &brickfall::world::GameWorld, kind: EntityKind) -> usize {
    world
        .entities()
        .iter()
        .filter(|entity| entity.kind == kind)
        .count()
}

#[test]
fn spawn_only_level_builds_one_player_and_nothing_else() {
    let set = LevelSet::from_str("p0-0-0-0-0-1");
    let world = load_level(&set, 0, &GameConfig::default()).expect("loads");

    assert_eq!(world.entities().len(), 1);
    assert_eq!(count_kind(&world, EntityKind::Player), 1);
    assert_eq!(world.goal_count(), 0);
    assert!(world.player_id().is_some());
}

#[test]
fn breakable_value_carries_through_to_the_entity() {
    let set = LevelSet::from_str("w0-2");
    let world = load_level(&set, 0, &GameConfig::default()).expect("loads");

    assert_eq!(world.entities().len(), 1);
    let brick = &world.entities()[0];
    assert_eq!(brick.kind, EntityKind::Breakable);
    assert_eq!(brick.opacity, 2);
    assert!(brick.is_translucent());
    assert_relative_eq!(brick.transform.position.x, 0.0);
}

#[test]
fn cell_size_scales_entity_placement() {
    let config = GameConfig {
        block_width: 2.0,
        block_depth: 3.0,
        ..GameConfig::default()
    };
    let set = LevelSet::from_str("w0-0,1/w1-0,0");
    let world = load_level(&set, 0, &config).expect("loads");

    assert_eq!(world.entities().len(), 1);
    let brick = &world.entities()[0];
    assert_relative_eq!(brick.transform.position.x, 2.0);
    assert_relative_eq!(brick.transform.position.z, 0.0);
}

#[test]
fn built_in_level_one_has_expected_population() {
    let set = LevelSet::from_str(DEFAULT_LEVELS);
    let world = load_level(&set, 0, &GameConfig::default()).expect("level 1 loads");

    assert_eq!(count_kind(&world, EntityKind::Unbreakable), 20);
    assert_eq!(count_kind(&world, EntityKind::Breakable), 5);
    assert_eq!(count_kind(&world, EntityKind::Player), 1);
    assert_eq!(count_kind(&world, EntityKind::Objective), 1);
    assert_eq!(world.goal_count(), 1);
}

#[test]
fn built_in_level_two_loads_and_frames_its_used_extent() {
    let set = LevelSet::from_str(DEFAULT_LEVELS);
    let world = load_level(&set, 1, &GameConfig::default()).expect("level 2 loads");

    assert_eq!(count_kind(&world, EntityKind::Unbreakable), 6);
    assert_eq!(world.goal_count(), 1);

    let used = world.framing().used;
    assert_eq!((used.x, used.y, used.z), (3, 2, 2));
}

#[test]
fn a_loaded_level_is_immediately_queryable() {
    let set = LevelSet::from_str(DEFAULT_LEVELS);
    let world = load_level(&set, 0, &GameConfig::default()).expect("loads");

    // Every entity's collision volume was initialized during placement
    assert!(world.entities().iter().all(|e| e.volume.is_initialized()));
}
