//! RNG module - where the next puzzle piece comes from
//!
//! Every draw is independent and uniform over the seven kinds; there is no bag
//! and no history. [`PieceSource`] is the seam the game draws through, so tests
//! can script the exact sequence with [`SequenceSource`].

use crate::types::PieceKind;

/// Supplies piece kinds to the puzzle game
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// 32-bit linear congruential generator, `state = state * A + C (mod 2^32)`.
/// Deterministic for a given seed, which is all the puzzle needs.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Seed from the wall clock
    pub fn from_time() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1);
        Self::new(nanos)
    }

    pub fn next_u32(&mut self) -> u32 {
        const A: u32 = 1_664_525;
        const C: u32 = 1_013_904_223;
        self.state = self.state.wrapping_mul(A).wrapping_add(C);
        self.state
    }

    /// Random value in `[0, max)`, using the high bits (the low bits of an
    /// LCG cycle with short periods).
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max.max(1)
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Cycles through a fixed list of kinds forever
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    at: usize,
}

impl SequenceSource {
    /// An empty list yields `O` pieces.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds.push(PieceKind::O);
        }
        Self { kinds, at: 0 }
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.at % self.kinds.len()];
        self.at += 1;
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_rng_draws_every_kind() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = rng.next_kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds: {seen:?}");
    }

    #[test]
    fn test_sequence_cycles() {
        let mut src = SequenceSource::new([PieceKind::I, PieceKind::T]);
        let drawn: Vec<_> = (0..5).map(|_| src.next_kind()).collect();
        assert_eq!(
            drawn,
            vec![PieceKind::I, PieceKind::T, PieceKind::I, PieceKind::T, PieceKind::I]
        );
    }

    #[test]
    fn test_empty_sequence_falls_back_to_o() {
        let mut src = SequenceSource::new(Vec::new());
        assert_eq!(src.next_kind(), PieceKind::O);
    }
}
