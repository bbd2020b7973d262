//! RNG module - injectable random sources for gem generation
//!
//! The engine never owns a global generator. Every fill and reseed draws from a
//! [`RandomSource`] handed to it, so a fixed seed (or a scripted source in
//! tests) reproduces a session exactly.
//!
//! [`SimpleRng`] is the default source: a small LCG that is fast and stable
//! across platforms.

use crate::types::Gem;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Value in `[0, max)`. `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift keeps the high bits, which are the well-mixed ones for an LCG.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform gem among the first `symbol_count` kinds.
    fn next_gem(&mut self, symbol_count: u8) -> Gem {
        let idx = self.next_range(symbol_count.max(1) as u32) as usize;
        Gem::from_index(idx).unwrap_or(Gem::Blue)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }

    fn next_gem(&mut self, symbol_count: u8) -> Gem {
        (**self).next_gem(symbol_count)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state (feeding it back into `new` resumes the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
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
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_next_gem_covers_every_kind_in_play() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [0u32; 7];
        for _ in 0..7000 {
            seen[rng.next_gem(7).index()] += 1;
        }
        // Roughly uniform: every bucket within a generous band of 1000.
        for count in seen {
            assert!((700..1300).contains(&count), "skewed bucket: {:?}", seen);
        }
    }

    #[test]
    fn test_next_gem_respects_symbol_count() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..500 {
            assert!(rng.next_gem(3).index() < 3);
        }
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(42);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
