//! Fixed-step clock
//!
//! Wall time goes in, whole ticks come out. Leftover milliseconds carry to
//! the next call. After a long stall only `max_catch_up` ticks are released
//! and the rest of the backlog is dropped, so the simulation never tries to
//! replay seconds of game time in one frame.

/// Accumulator that converts elapsed milliseconds into fixed ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    tick_ms: u32,
    max_catch_up: u32,
    pending_ms: u32,
}

impl TickClock {
    /// Default backlog cap, in ticks
    pub const MAX_CATCH_UP: u32 = 5;

    pub fn new(tick_ms: u32) -> Self {
        Self::with_catch_up(tick_ms, Self::MAX_CATCH_UP)
    }

    /// `tick_ms` and `max_catch_up` are clamped to at least 1.
    pub fn with_catch_up(tick_ms: u32, max_catch_up: u32) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            max_catch_up: max_catch_up.max(1),
            pending_ms: 0,
        }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Add `elapsed_ms` and return how many ticks are now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.pending_ms = self.pending_ms.saturating_add(elapsed_ms);
        let due = self.pending_ms / self.tick_ms;
        if due > self.max_catch_up {
            self.pending_ms = 0;
            return self.max_catch_up;
        }
        self.pending_ms -= due * self.tick_ms;
        due
    }

    /// Milliseconds until the next tick is due
    pub fn until_next_ms(&self) -> u32 {
        self.tick_ms.saturating_sub(self.pending_ms)
    }
}
