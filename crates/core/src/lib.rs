//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules and state of both arcade games. It has no
//! dependency on the terminal, the filesystem or the clock, which makes it:
//!
//! - **Deterministic**: the same inputs and piece sequence give the same game
//! - **Testable**: every rule is exercised headless
//! - **Portable**: any front end that can draw a snapshot can host it
//!
//! # Module Structure
//!
//! Shared:
//! - [`grid`]: the [`GridModel`] query trait and the platformer's [`TileGrid`]
//! - [`clock`]: fixed-step [`TickClock`]
//! - [`snapshot`]: read-only views handed to renderers
//!
//! Platformer:
//! - [`collision`]: axis-separated rect vs. tile resolution
//! - [`player`]: input, gravity, jumping
//! - [`enemy`]: patrol with a ledge probe
//! - [`platformer`]: the session that owns a round, coins, stomps and hits
//!
//! Puzzle:
//! - [`pieces`]: shape matrices and rotation
//! - [`board`]: 10x20 board with line clearing
//! - [`rng`]: piece sources
//! - [`scoring`]: points, level and gravity speed
//! - [`record`]: high-score persistence seam
//! - [`game_state`]: the puzzle round
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::{MemoryRecord, PuzzleGame, SequenceSource};
//! use tui_arcade_types::{GameAction, PieceKind};
//!
//! let mut game = PuzzleGame::new(
//!     SequenceSource::new([PieceKind::I]),
//!     Box::new(MemoryRecord::default()),
//! );
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Both games run on a fixed step:
//! - **Platformer**: one [`PlatformerSession::step`] every 16ms
//! - **Puzzle**: input every 16ms, gravity every [`scoring::drop_delay_ms`]
//!   (500ms at level 1, 50ms faster per level, never below 100ms)

pub mod board;
pub mod clock;
pub mod collision;
pub mod enemy;
pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod platformer;
pub mod player;
pub mod record;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_arcade_types as types;

pub use board::Board;
pub use clock::TickClock;
pub use enemy::Enemy;
pub use game_state::{LockReport, MoveResult, PuzzleEvent, PuzzleGame, TickOutcome};
pub use grid::{GridModel, TileGrid};
pub use pieces::{Piece, Shape};
pub use platformer::{PlatformerEvent, PlatformerSession};
pub use player::Player;
pub use record::{MemoryRecord, RecordKeeper};
pub use rng::{PieceSource, SequenceSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, PlatformerSnapshot, PuzzleSnapshot};
