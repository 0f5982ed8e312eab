//! Read-only views of game state for renderers
//!
//! Views draw from these and nothing else. The puzzle snapshot is a plain
//! `Copy` value; the platformer one borrows the session's entity lists for the
//! duration of a frame.

use crate::enemy::Enemy;
use crate::grid::TileGrid;
use crate::pieces::{Piece, Shape};
use crate::types::{
    Cell, PieceKind, PlatformerRound, PuzzleRound, Rect, BOARD_HEIGHT, BOARD_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute board cells covered by the piece
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub record: u32,
    pub round: PuzzleRound,
}

impl PuzzleSnapshot {
    pub fn paused(&self) -> bool {
        self.round == PuzzleRound::Paused
    }

    pub fn game_over(&self) -> bool {
        self.round == PuzzleRound::GameOver
    }

    /// Higher of the live score and the stored record
    pub fn best(&self) -> u32 {
        self.score.max(self.record)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlatformerSnapshot<'a> {
    pub tiles: &'a TileGrid,
    pub coins: &'a [Rect],
    pub enemies: &'a [Enemy],
    pub flag: Option<Rect>,
    pub player: Rect,
    pub score: u32,
    pub lives: u32,
    pub round: PlatformerRound,
    pub ticks: u64,
}
