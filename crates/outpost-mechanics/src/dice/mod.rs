//! Six-sided dice pools.
//!
//! A pool is an ordered list of d6 results; order is roll order. Pools grow
//! by appending a fresh die and change by replacing a single slot, never by
//! removal.

pub mod history;
pub mod reroll;
pub mod score;

pub use history::RollHistory;
pub use reroll::reroll_lowest;
pub use score::score_successes;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on every die in the engine.
pub const FACES: u8 = 6;

/// Roll a single d6.
pub fn roll_die(rng: &mut impl Rng) -> u8 {
    rng.random_range(1..=FACES)
}

/// Roll `count` independent d6.
pub fn roll_pool(count: u32, rng: &mut impl Rng) -> DicePool {
    DicePool {
        dice: (0..count).map(|_| roll_die(rng)).collect(),
    }
}

/// An ordered sequence of d6 results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DicePool {
    dice: Vec<u8>,
}

impl DicePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from known values. Values must be in 1..=6.
    pub fn from_values(values: impl IntoIterator<Item = u8>) -> Self {
        let dice: Vec<u8> = values.into_iter().collect();
        debug_assert!(dice.iter().all(|d| (1..=FACES).contains(d)));
        Self { dice }
    }

    /// The die values in roll order.
    pub fn values(&self) -> &[u8] {
        &self.dice
    }

    /// Number of dice.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Append a freshly rolled die.
    pub fn push_rolled(&mut self, rng: &mut impl Rng) -> u8 {
        let value = roll_die(rng);
        self.dice.push(value);
        value
    }

    /// Index of the lowest die, taking the first one on ties.
    pub fn lowest_index(&self) -> Option<usize> {
        let min = *self.dice.iter().min()?;
        self.dice.iter().position(|&d| d == min)
    }

    pub(crate) fn replace(&mut self, index: usize, value: u8) {
        self.dice[index] = value;
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", values.join(", "))
    }
}
