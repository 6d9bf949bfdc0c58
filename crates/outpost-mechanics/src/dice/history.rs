//! Past states of a pool, kept for display.

use serde::{Deserialize, Serialize};

use super::DicePool;

/// Append-only list of pool snapshots, oldest first.
///
/// A snapshot is recorded immediately before each reroll, so the list never
/// contains the current pool and never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollHistory {
    snapshots: Vec<DicePool>,
}

impl RollHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a copy of `pool`.
    pub fn record(&mut self, pool: &DicePool) {
        self.snapshots.push(pool.clone());
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[DicePool] {
        &self.snapshots
    }

    /// The most recent snapshot.
    pub fn last(&self) -> Option<&DicePool> {
        self.snapshots.last()
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
