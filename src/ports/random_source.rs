//! RandomSource port for the micro-decision fallback.

/// A source of uniform random indices.
///
/// The only randomness in the engine flows through this trait, so tests can
/// substitute a deterministic stub.
pub trait RandomSource {
    /// Picks a uniformly random index in `0..n`. `n` must be non-zero.
    fn pick(&mut self, n: usize) -> usize;
}

/// Deterministic source that replays a fixed sequence of picks.
/// Intended for tests; wraps around when the sequence is exhausted.
#[derive(Debug, Clone)]
pub struct FixedSource {
    picks: Vec<usize>,
    cursor: usize,
}

impl FixedSource {
    /// Creates a source replaying the given picks (each taken modulo `n`).
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }
}

impl RandomSource for FixedSource {
    fn pick(&mut self, n: usize) -> usize {
        let value = self.picks[self.cursor % self.picks.len()] % n;
        self.cursor += 1;
        value
    }
}
