//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework: maps `crossterm` key events into logical
//! buttons and samples them into one [`crate::types::InputFrame`] per tick,
//! including on terminals that never send key-release events.

pub mod map;
pub mod sampler;

pub use tui_arcade_types as types;

pub use map::{map_key, should_quit, Button, Layout};
pub use sampler::KeySampler;
