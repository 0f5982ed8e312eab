//! External configuration loader.
//!
//! Reads `arcade.toml` from the executable's directory, then the current
//! working directory. A missing file or missing keys fall back to defaults;
//! a file that exists but cannot be read or parsed is an error when it was
//! named explicitly and a logged warning when it was only found by search.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::types::{BASE_DROP_DELAY_MS, PLATFORMER_TICK_MS, PUZZLE_INPUT_TICK_MS};

pub const CONFIG_FILE: &str = "arcade.toml";
pub const DEFAULT_RECORD_FILE: &str = "record.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("bad config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArcadeConfig {
    pub platformer: PlatformerConfig,
    pub puzzle: PuzzleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformerConfig {
    pub tick_ms: u32,
    /// Digit-grid level file; the built-in level when unset
    pub level_path: Option<PathBuf>,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            tick_ms: PLATFORMER_TICK_MS,
            level_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PuzzleConfig {
    pub input_tick_ms: u32,
    /// Gravity interval at level 1
    pub base_delay_ms: u32,
    pub record_path: PathBuf,
    /// Fixed piece seed; time-seeded when unset
    pub seed: Option<u32>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            input_tick_ms: PUZZLE_INPUT_TICK_MS,
            base_delay_ms: BASE_DROP_DELAY_MS,
            record_path: PathBuf::from(DEFAULT_RECORD_FILE),
            seed: None,
        }
    }
}

impl ArcadeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse one file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut cfg = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(dir) = path.parent() {
            cfg.resolve_relative_to(dir);
        }
        Ok(cfg)
    }

    /// Load `explicit` if given, otherwise search the candidate directories.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!("loading config from {}", path.display());
            return Self::from_file(path);
        }
        Ok(Self::search(&candidate_dirs()))
    }

    /// First readable `arcade.toml` in `dirs`, or defaults.
    pub fn search(dirs: &[PathBuf]) -> Self {
        for dir in dirs {
            let path = dir.join(CONFIG_FILE);
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(cfg) => {
                    info!("loaded config from {}", path.display());
                    return cfg;
                }
                Err(e) => {
                    warn!("{e}; using default settings");
                    return Self::default();
                }
            }
        }
        Self::default()
    }

    /// Relative paths inside a config file are taken relative to that file.
    fn resolve_relative_to(&mut self, dir: &Path) {
        if let Some(level) = &self.platformer.level_path {
            if level.is_relative() {
                self.platformer.level_path = Some(dir.join(level));
            }
        }
        if self.puzzle.record_path.is_relative() {
            self.puzzle.record_path = dir.join(&self.puzzle.record_path);
        }
    }
}

/// Executable directory first, then the working directory (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}
