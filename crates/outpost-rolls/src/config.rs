//! Configuration for the roll engine.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Dice per participant when a roll opens.
pub const DEFAULT_BASE_DICE: u32 = 3;

/// Configuration for an [`crate::Engine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Dice rolled per participant when a session opens.
    pub base_dice: u32,
    /// Acknowledge solo inputs that change nothing (unaffordable or
    /// irrelevant). Lobby and group inputs are always acknowledged.
    pub acknowledge_rejected: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            base_dice: DEFAULT_BASE_DICE,
            acknowledge_rejected: true,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-participant dice count (at least 1).
    pub fn with_base_dice(mut self, dice: u32) -> Self {
        self.base_dice = dice.max(1);
        self
    }

    /// Choose whether rejected solo inputs are acknowledged.
    pub fn with_rejected_acks(mut self, acknowledge: bool) -> Self {
        self.acknowledge_rejected = acknowledge;
        self
    }

    /// Build the engine RNG.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
