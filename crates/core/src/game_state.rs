//! Game state module - one puzzle round and everything it owns
//!
//! Ties together the board, the falling piece, the piece source, scoring and
//! the high-score record. Handles gravity timing, movement, rotation, locking
//! and the Playing / Paused / GameOver lifecycle.
//!
//! Lock sequence, always in this order:
//!
//! 1. imprint the piece's color into the board
//! 2. clear full rows and score them
//! 3. promote `next` to the falling piece and draw a new `next`
//! 4. if the new piece does not fit at its spawn, the round is over and the
//!    record is committed

use log::{debug, info};

use crate::board::{Board, ClearedRows};
use crate::pieces::Piece;
use crate::record::RecordKeeper;
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{drop_delay_from, level_for_score, line_clear_points};
use crate::snapshot::{ActiveSnapshot, PuzzleSnapshot};
use crate::types::{GameAction, InputFrame, PieceKind, PuzzleRound, BASE_DROP_DELAY_MS};

/// Result of an atomic move or rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    /// Illegal target; nothing changed
    Rejected,
}

impl MoveResult {
    pub fn moved(self) -> bool {
        self == MoveResult::Moved
    }
}

/// What one lock did to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockReport {
    /// Cleared row indices, top to bottom
    pub cleared: ClearedRows,
    pub points: u32,
    /// The replacement piece did not fit
    pub game_over: bool,
}

/// Outcome of a gravity step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not time yet, or the round is not running
    Idle,
    /// Piece moved down one row
    Fell,
    Locked(LockReport),
}

/// Lifecycle events, drained by [`PuzzleGame::take_events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleEvent {
    Locked { kind: PieceKind },
    LinesCleared { count: u32, points: u32 },
    Paused,
    Resumed,
    GameOver { score: u32, new_record: bool },
    Restarted,
}

/// Complete puzzle state
#[derive(Debug)]
pub struct PuzzleGame<S: PieceSource = SimpleRng> {
    board: Board,
    active: Piece,
    next: PieceKind,
    source: S,
    keeper: Box<dyn RecordKeeper>,
    record: u32,
    score: u32,
    lines: u32,
    round: PuzzleRound,
    base_delay_ms: u32,
    drop_timer_ms: u32,
    events: Vec<PuzzleEvent>,
}

impl<S: PieceSource> PuzzleGame<S> {
    /// Fresh round drawing from `source`; the stored record is loaded once here.
    pub fn new(mut source: S, mut keeper: Box<dyn RecordKeeper>) -> Self {
        let record = keeper.load_record();
        let active = Piece::spawn(source.next_kind());
        let next = source.next_kind();
        Self {
            board: Board::new(),
            active,
            next,
            source,
            keeper,
            record,
            score: 0,
            lines: 0,
            round: PuzzleRound::Playing,
            base_delay_ms: BASE_DROP_DELAY_MS,
            drop_timer_ms: 0,
            events: Vec::new(),
        }
    }

    /// Use `ms` as the level-1 gravity interval.
    pub fn with_base_delay(mut self, ms: u32) -> Self {
        self.base_delay_ms = ms;
        self
    }

    pub fn round(&self) -> PuzzleRound {
        self.round
    }

    pub fn paused(&self) -> bool {
        self.round == PuzzleRound::Paused
    }

    pub fn game_over(&self) -> bool {
        self.round == PuzzleRound::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    /// Best score persisted so far
    pub fn record(&self) -> u32 {
        self.record
    }

    /// Current gravity interval
    pub fn drop_delay_ms(&self) -> u32 {
        drop_delay_from(self.base_delay_ms, self.level())
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Is the live score above the stored record?
    pub fn is_new_record(&self) -> bool {
        self.score > self.record
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            board: self.board.to_rows(),
            active: Some(ActiveSnapshot::from(self.active)),
            next: self.next,
            score: self.score,
            lines: self.lines,
            level: self.level(),
            record: self.record,
            round: self.round,
        }
    }

    /// Events since the last call
    pub fn take_events(&mut self) -> Vec<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply every action asserted in `input`, in [`InputFrame::puzzle_actions`]
    /// order, and return the resulting events.
    pub fn step(&mut self, input: &InputFrame) -> Vec<PuzzleEvent> {
        for action in input.puzzle_actions() {
            self.apply_action(action);
        }
        self.take_events()
    }

    /// Apply one discrete action.
    ///
    /// Only `Restart` is honoured after game over; only `Pause` and `Restart`
    /// while paused. Drops report `Moved` whenever they changed anything,
    /// including a lock without movement.
    pub fn apply_action(&mut self, action: GameAction) -> MoveResult {
        match (self.round, action) {
            (_, GameAction::Restart) => {
                self.restart();
                MoveResult::Moved
            }
            (PuzzleRound::GameOver, _) => MoveResult::Rejected,
            (_, GameAction::Pause) => {
                self.toggle_pause();
                MoveResult::Moved
            }
            (PuzzleRound::Paused, _) => MoveResult::Rejected,
            (PuzzleRound::Playing, GameAction::MoveLeft) => self.try_move(-1, 0),
            (PuzzleRound::Playing, GameAction::MoveRight) => self.try_move(1, 0),
            (PuzzleRound::Playing, GameAction::Rotate) => self.try_rotate(),
            (PuzzleRound::Playing, GameAction::SoftDrop) => {
                self.soft_drop();
                MoveResult::Moved
            }
            (PuzzleRound::Playing, GameAction::HardDrop) => {
                self.hard_drop();
                MoveResult::Moved
            }
        }
    }

    /// Shift the falling piece if the target fits.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> MoveResult {
        self.commit_if_fits(self.active.shifted(dx, dy))
    }

    /// Rotate clockwise in place if it fits. No kicks.
    pub fn try_rotate(&mut self) -> MoveResult {
        self.commit_if_fits(self.active.rotated())
    }

    fn commit_if_fits(&mut self, candidate: Piece) -> MoveResult {
        if self.round != PuzzleRound::Playing || !self.board.fits(&candidate) {
            return MoveResult::Rejected;
        }
        self.active = candidate;
        MoveResult::Moved
    }

    /// Advance the gravity timer; falls or locks once a full interval passed.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickOutcome {
        if self.round != PuzzleRound::Playing {
            return TickOutcome::Idle;
        }
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_delay_ms() {
            return TickOutcome::Idle;
        }
        self.drop_timer_ms = 0;
        self.gravity_tick()
    }

    /// One gravity step regardless of the timer.
    pub fn gravity_tick(&mut self) -> TickOutcome {
        if self.round != PuzzleRound::Playing {
            return TickOutcome::Idle;
        }
        match self.try_move(0, 1) {
            MoveResult::Moved => TickOutcome::Fell,
            MoveResult::Rejected => TickOutcome::Locked(self.lock_piece()),
        }
    }

    /// Down key: one row, locking if the piece cannot move.
    pub fn soft_drop(&mut self) -> TickOutcome {
        self.gravity_tick()
    }

    /// Drop to the lowest legal row and lock at once.
    pub fn hard_drop(&mut self) -> Option<LockReport> {
        if self.round != PuzzleRound::Playing {
            return None;
        }
        while self.try_move(0, 1).moved() {}
        Some(self.lock_piece())
    }

    /// Lock the falling piece where it stands.
    pub fn lock_piece(&mut self) -> LockReport {
        let locked = self.active;
        self.board.imprint(&locked);
        self.events.push(PuzzleEvent::Locked { kind: locked.kind });

        let cleared = self.board.clear_full_rows();
        let points = line_clear_points(cleared.len());
        if !cleared.is_empty() {
            self.lines += cleared.len() as u32;
            self.score = self.score.saturating_add(points);
            debug!(
                "cleared rows {:?} for {} points, score {}",
                cleared.as_slice(),
                points,
                self.score
            );
            self.events.push(PuzzleEvent::LinesCleared {
                count: cleared.len() as u32,
                points,
            });
        }

        self.active = Piece::spawn(self.next);
        self.next = self.source.next_kind();
        self.drop_timer_ms = 0;

        let game_over = !self.board.fits(&self.active);
        if game_over {
            self.round = PuzzleRound::GameOver;
            let new_record = self.commit_record();
            info!(
                "puzzle over: score {}, lines {}, new record: {}",
                self.score, self.lines, new_record
            );
            self.events.push(PuzzleEvent::GameOver {
                score: self.score,
                new_record,
            });
        }

        LockReport {
            cleared,
            points,
            game_over,
        }
    }

    /// Persist the score if it beats the stored record. Returns true if written.
    pub fn commit_record(&mut self) -> bool {
        if !self.is_new_record() {
            return false;
        }
        self.keeper.save_record(self.score);
        self.record = self.score;
        info!("new puzzle record {}", self.record);
        true
    }

    /// Playing and Paused swap; GameOver stays put.
    pub fn toggle_pause(&mut self) {
        self.round = match self.round {
            PuzzleRound::Playing => {
                self.events.push(PuzzleEvent::Paused);
                PuzzleRound::Paused
            }
            PuzzleRound::Paused => {
                self.events.push(PuzzleEvent::Resumed);
                PuzzleRound::Playing
            }
            PuzzleRound::GameOver => PuzzleRound::GameOver,
        };
    }

    /// Empty board, zero score, two fresh pieces. The record survives.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = Piece::spawn(self.source.next_kind());
        self.next = self.source.next_kind();
        self.score = 0;
        self.lines = 0;
        self.round = PuzzleRound::Playing;
        self.drop_timer_ms = 0;
        self.events.push(PuzzleEvent::Restarted);
        info!("puzzle restarted, record {}", self.record);
    }
}

impl PuzzleGame<SimpleRng> {
    /// Seeded game with an in-memory record starting at 0
    pub fn seeded(seed: u32) -> Self {
        Self::new(
            SimpleRng::new(seed),
            Box::new(crate::record::MemoryRecord::default()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MemoryRecord;
    use crate::rng::SequenceSource;
    use crate::types::Rgb;

    const GRAY: Rgb = Rgb::new(0x80, 0x80, 0x80);

    fn game_of(kinds: &[PieceKind]) -> PuzzleGame<SequenceSource> {
        PuzzleGame::new(
            SequenceSource::new(kinds.to_vec()),
            Box::new(MemoryRecord::default()),
        )
    }

    #[test]
    fn test_rejected_move_leaves_piece() {
        let mut game = game_of(&[PieceKind::O]);
        for _ in 0..4 {
            assert_eq!(game.try_move(-1, 0), MoveResult::Moved);
        }
        let before = game.active();
        assert_eq!(game.try_move(-1, 0), MoveResult::Rejected);
        assert_eq!(game.active(), before);
    }

    #[test]
    fn test_rotation_rejected_at_wall() {
        let mut game = game_of(&[PieceKind::I]);
        // A vertical I standing in a one-wide well cannot turn back.
        assert_eq!(game.try_rotate(), MoveResult::Moved);
        for y in 0..4 {
            game.board_mut().fill_row(y, GRAY, &[3]);
        }
        let before = game.active();
        assert_eq!(game.try_rotate(), MoveResult::Rejected);
        assert_eq!(game.active(), before);
    }

    #[test]
    fn test_gravity_respects_delay() {
        let mut game = game_of(&[PieceKind::T]);
        assert_eq!(game.tick(499), TickOutcome::Idle);
        assert_eq!(game.tick(1), TickOutcome::Fell);
        assert_eq!(game.active().y, 1);
    }

    #[test]
    fn test_hard_drop_locks_and_promotes_next() {
        let mut game = game_of(&[PieceKind::I, PieceKind::T]);
        assert_eq!(game.next(), PieceKind::T);

        let report = game.hard_drop().unwrap();
        assert!(report.cleared.is_empty());
        assert!(!report.game_over);
        assert_eq!(game.active().kind, PieceKind::T);
        assert_eq!(game.next(), PieceKind::I);
        assert_eq!(game.board().get(3, 19), Some(Some(PieceKind::I.color())));
    }

    #[test]
    fn test_soft_drop_locks_when_blocked() {
        let mut game = game_of(&[PieceKind::O]);
        for _ in 0..18 {
            assert_eq!(game.soft_drop(), TickOutcome::Fell);
        }
        assert!(matches!(game.soft_drop(), TickOutcome::Locked(_)));
        assert_eq!(game.board().filled_count(), 4);
    }

    #[test]
    fn test_line_clear_scores() {
        let mut game = game_of(&[PieceKind::I]);
        game.board_mut().fill_row(19, GRAY, &[3, 4, 5, 6]);
        let report = game.hard_drop().unwrap();
        assert_eq!(report.cleared.as_slice(), &[19]);
        assert_eq!(report.points, 100);
        assert_eq!((game.score(), game.lines()), (100, 1));
        assert_eq!(game.board().filled_count(), 0);

        let events = game.take_events();
        assert!(events.contains(&PuzzleEvent::LinesCleared {
            count: 1,
            points: 100
        }));
    }

    #[test]
    fn test_pause_blocks_play() {
        let mut game = game_of(&[PieceKind::T]);
        game.apply_action(GameAction::Pause);
        assert!(game.paused());
        assert_eq!(game.apply_action(GameAction::MoveLeft), MoveResult::Rejected);
        assert_eq!(game.tick(10_000), TickOutcome::Idle);
        assert_eq!(game.active().y, 0);

        game.apply_action(GameAction::Pause);
        assert_eq!(game.round(), PuzzleRound::Playing);
        assert_eq!(game.apply_action(GameAction::MoveLeft), MoveResult::Moved);
    }

    #[test]
    fn test_blocked_spawn_is_game_over_and_commits_record() {
        let mut game = game_of(&[PieceKind::O]);
        game.score = 450;
        // Occupy the spawn area without completing any row.
        for y in 2..4 {
            game.board_mut().fill_row(y, GRAY, &[0]);
        }
        game.board_mut().set(4, 1, Some(GRAY));

        let report = game.hard_drop().unwrap();
        assert!(report.game_over);
        assert!(game.game_over());
        assert_eq!(game.record(), 450);

        let snap = game.snapshot();
        for action in [GameAction::MoveLeft, GameAction::HardDrop, GameAction::Pause] {
            assert_eq!(game.apply_action(action), MoveResult::Rejected);
        }
        assert_eq!(game.tick(5_000), TickOutcome::Idle);
        assert_eq!(game.snapshot(), snap);

        game.apply_action(GameAction::Restart);
        assert_eq!(game.round(), PuzzleRound::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.record(), 450);
        assert_eq!(game.board().filled_count(), 0);
    }

    #[test]
    fn test_level_speeds_up_gravity() {
        let mut game = game_of(&[PieceKind::T]);
        assert_eq!(game.drop_delay_ms(), 500);
        game.score = 2_000;
        assert_eq!(game.level(), 3);
        assert_eq!(game.drop_delay_ms(), 400);
        let game = game.with_base_delay(300);
        assert_eq!(game.drop_delay_ms(), 200);
    }
}
