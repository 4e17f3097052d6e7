//! Random move selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Strategy;
use crate::game::Cell;

/// Proposes uniformly random cells, with unbounded retries.
///
/// On a nearly full board this can resample occupied cells for a long
/// time with vanishing probability of success. That liveness risk is a
/// known property of the protocol and is deliberately left unguarded;
/// there is no retry cap and no timeout.
pub struct Stochastic {
    rng: StdRng,
}

impl Stochastic {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a strategy with a fixed seed, for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Stochastic {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Stochastic {
    fn next_candidate(&mut self) -> Cell {
        Cell::new(self.rng.random_range(0..3), self.rng.random_range(0..3))
    }
}
