//! Shared fixtures for integration tests.

#![allow(dead_code)]

use gemswap::core::RandomSource;
use gemswap::types::Gem;

/// Hands out a fixed gem sequence, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    gems: Vec<Gem>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(gems: &[Gem]) -> Self {
        assert!(!gems.is_empty());
        Self {
            gems: gems.to_vec(),
            next: 0,
        }
    }

    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_gem(7).index() as u32
    }

    fn next_gem(&mut self, _symbol_count: u8) -> Gem {
        let gem = self.gems[self.next % self.gems.len()];
        self.next += 1;
        gem
    }
}

/// Quiescent 3x5 layout; swapping (2,0) with (2,1) completes R R R on the bottom row.
pub const SCENARIO: &str = "PRWYP
                            RWYPR
                            RBRRG";
