//! Platformer level files.
//!
//! A level is a rectangular grid of ASCII digits, one row per line:
//! `0` empty, `1` ground, `2` coin, `3` enemy spawn, `4` platform, `9` flag.
//! Blank lines and surrounding whitespace are ignored.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::TileGrid;
use crate::types::TileKind;

/// Built-in level: 32 columns by 24 rows.
pub const DEFAULT_LEVEL: &str = "\
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000002000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000200000000000000000002000000
00011100000000111000000011100000
00000000000000000000000000000000
00000000000300000000000000000000
00000000000000000000000000000000
00000111110000011111000000111110
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000009
11111111111111111111111111111111
11111111111111111111111111111111
11111111111111111111111111111111
11111111111111111111111111111111
11111111111111111111111111111111
";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level has no rows")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownChar { row: usize, col: usize, ch: char },
}

#[derive(Debug, Error)]
pub enum LoadLevelError {
    #[error("could not read level {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("bad level {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: LevelError,
    },
}

/// Parse a digit grid. Row and column numbers in errors are 0-based and count
/// only non-blank lines.
pub fn parse_level(text: &str) -> Result<TileGrid, LevelError> {
    let mut rows: Vec<Vec<TileKind>> = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let row = rows.len();
        let mut tiles = Vec::with_capacity(line.len());
        for (col, ch) in line.chars().enumerate() {
            let kind = u8::try_from(ch)
                .ok()
                .and_then(TileKind::from_digit)
                .ok_or(LevelError::UnknownChar { row, col, ch })?;
            tiles.push(kind);
        }
        if let Some(first) = rows.first() {
            if first.len() != tiles.len() {
                return Err(LevelError::Ragged {
                    row,
                    expected: first.len(),
                    found: tiles.len(),
                });
            }
        }
        rows.push(tiles);
    }

    TileGrid::from_rows(&rows).ok_or(LevelError::Empty)
}

pub fn default_level() -> TileGrid {
    // The built-in grid is covered by tests; an empty 1x1 grid is unreachable.
    parse_level(DEFAULT_LEVEL).unwrap_or_else(|_| TileGrid::new(1, 1))
}

pub fn load_level(path: &Path) -> Result<TileGrid, LoadLevelError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadLevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_level(&text).map_err(|source| LoadLevelError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
