//! TUI Arcade (workspace facade crate).
//!
//! Re-exports the simulation, input and terminal crates under
//! `tui_arcade::{core, input, term, types}` and adds the pieces that touch the
//! filesystem: configuration, level files and the high-score store.

pub use tui_arcade_core as core;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;

pub mod config;
pub mod level;
pub mod record;

pub use config::{ArcadeConfig, ConfigError};
pub use level::{default_level, load_level, parse_level, LevelError, LoadLevelError};
pub use record::FileRecord;
