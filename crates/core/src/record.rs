//! Record module - persistence seam for the puzzle high score
//!
//! The core only ever asks for the stored value once per game and writes it
//! back at most once per round. Storage failures are the implementor's
//! problem: neither method can fail from the game's point of view.

use std::fmt::Debug;

/// Loads and stores the best puzzle score
pub trait RecordKeeper: Debug {
    /// Stored record, or 0 when nothing usable is stored
    fn load_record(&mut self) -> u32;

    fn save_record(&mut self, score: u32);
}

/// In-memory record, for tests and headless runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRecord {
    pub value: u32,
    /// Number of times `save_record` was called
    pub writes: u32,
}

impl MemoryRecord {
    pub fn new(value: u32) -> Self {
        Self { value, writes: 0 }
    }
}

impl RecordKeeper for MemoryRecord {
    fn load_record(&mut self) -> u32 {
        self.value
    }

    fn save_record(&mut self, score: u32) {
        self.value = score;
        self.writes += 1;
    }
}

/// Shared handle so a test can keep inspecting the record after handing it to
/// a game.
impl<R: RecordKeeper> RecordKeeper for std::rc::Rc<std::cell::RefCell<R>> {
    fn load_record(&mut self) -> u32 {
        self.borrow_mut().load_record()
    }

    fn save_record(&mut self, score: u32) {
        self.borrow_mut().save_record(score)
    }
}
