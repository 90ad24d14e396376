//! Thread-local RNG adapter for the `RandomSource` port.

use rand::Rng;

use crate::ports::RandomSource;

/// Production randomness source backed by `rand::thread_rng`.
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_stays_in_range() {
        let mut source = ThreadRngSource;
        for _ in 0..100 {
            assert!(source.pick(5) < 5);
        }
    }

    #[test]
    fn pick_of_zero_is_zero() {
        let mut source = ThreadRngSource;
        assert_eq!(source.pick(0), 0);
    }
}
