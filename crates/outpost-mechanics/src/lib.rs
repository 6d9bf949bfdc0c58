//! Dice mechanics for Outpost.
//!
//! Provides the d6 pool engine (rolling, success scoring, reroll-lowest),
//! the per-actor [`SkillBudget`] that funds refinement, the combined
//! budget-and-pool refinement steps, and the weighted loot table used by
//! scavenging.

pub mod budget;
pub mod dice;
pub mod loot;
pub mod refine;

pub use budget::{ADD_DIE_COST, REROLL_COST, SkillBudget};
pub use dice::{DicePool, RollHistory, reroll_lowest, roll_die, roll_pool, score_successes};
pub use loot::{LootDrop, Rarity, roll_loot, summarize_loot};
pub use refine::{add_die, reroll};
