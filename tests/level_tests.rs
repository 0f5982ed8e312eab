//! Level and config file tests - parsing from disk, entity derivation

use std::path::PathBuf;

use tui_arcade::config::ArcadeConfig;
use tui_arcade::core::{GridModel, PlatformerSession};
use tui_arcade::types::{TileKind, TILE};
use tui_arcade::{default_level, load_level, LevelError, LoadLevelError};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tui-arcade-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_default_level_entities() {
    let session = PlatformerSession::new(default_level());
    assert_eq!(session.coins().len(), 3);
    assert_eq!(session.enemies().len(), 1);

    // Flag marker at (31, 18); the hit region ends at that row's bottom.
    let flag = session.flag().unwrap();
    assert_eq!(flag.x, 31 * TILE + 8);
    assert_eq!(flag.bottom(), 19 * TILE);
    assert_eq!(flag.h, 3 * TILE);
}

#[test]
fn test_load_level_from_file() {
    let path = scratch_dir("level").join("tiny.txt");
    std::fs::write(&path, "0000\n0029\n1111\n").unwrap();

    let grid = load_level(&path).unwrap();
    assert_eq!((grid.cols(), grid.rows()), (4, 3));
    assert_eq!(grid.cell_at(2, 1), Some(TileKind::Coin));
    assert!(grid.is_solid(3, 2));
}

#[test]
fn test_load_level_errors_carry_the_path() {
    let dir = scratch_dir("level-errors");
    let missing = dir.join("nope.txt");
    let _ = std::fs::remove_file(&missing);
    assert!(matches!(load_level(&missing), Err(LoadLevelError::Io { .. })));

    let ragged = dir.join("ragged.txt");
    std::fs::write(&ragged, "000\n0000\n").unwrap();
    match load_level(&ragged) {
        Err(LoadLevelError::Parse { path, source }) => {
            assert_eq!(path, ragged);
            assert_eq!(
                source,
                LevelError::Ragged {
                    row: 1,
                    expected: 3,
                    found: 4
                }
            );
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_config_file_paths_are_relative_to_the_file() {
    let dir = scratch_dir("config");
    let path = dir.join("arcade.toml");
    std::fs::write(
        &path,
        r#"
[platformer]
level_path = "levels/one.txt"

[puzzle]
record_path = "best.txt"
seed = 7
"#,
    )
    .unwrap();

    let cfg = ArcadeConfig::load(Some(&path)).unwrap();
    assert_eq!(cfg.platformer.level_path, Some(dir.join("levels/one.txt")));
    assert_eq!(cfg.puzzle.record_path, dir.join("best.txt"));
    assert_eq!(cfg.puzzle.seed, Some(7));
}

#[test]
fn test_config_search_falls_back_on_bad_files() {
    let empty = scratch_dir("config-empty");
    let _ = std::fs::remove_file(empty.join("arcade.toml"));
    assert_eq!(ArcadeConfig::search(&[empty]), ArcadeConfig::default());

    let broken = scratch_dir("config-broken");
    std::fs::write(broken.join("arcade.toml"), "[puzzle\nseed = ").unwrap();
    assert_eq!(ArcadeConfig::search(&[broken.clone()]), ArcadeConfig::default());

    // Named explicitly, the same file is an error.
    assert!(ArcadeConfig::load(Some(&broken.join("arcade.toml"))).is_err());
}
