//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout libraries and renders snapshots into a plain framebuffer,
//! which is then diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Views consume snapshots only and never mutate game state
//! - Precise control over aspect ratio (2 columns per board cell or tile)

pub mod fb;
pub mod platformer_view;
pub mod puzzle_view;
pub mod renderer;
pub mod view;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use platformer_view::PlatformerView;
pub use puzzle_view::PuzzleView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::Viewport;
