//! Paid refinement steps shared by solo and group rolls.
//!
//! Each step checks the budget, debits it and mutates the pool together.
//! When the budget is short nothing changes.

use rand::Rng;

use crate::budget::{ADD_DIE_COST, REROLL_COST, SkillBudget};
use crate::dice::{DicePool, RollHistory, reroll_lowest};

/// Pay [`ADD_DIE_COST`] to append a die. Returns the new die's value.
pub fn add_die(pool: &mut DicePool, budget: &mut SkillBudget, rng: &mut impl Rng) -> Option<u8> {
    budget.spend_with(ADD_DIE_COST, || pool.push_rolled(rng))
}

/// Pay [`REROLL_COST`] to reroll the lowest die. Returns the rerolled index.
///
/// An empty pool is not charged.
pub fn reroll(
    pool: &mut DicePool,
    history: &mut RollHistory,
    budget: &mut SkillBudget,
    rng: &mut impl Rng,
) -> Option<usize> {
    if pool.is_empty() {
        return None;
    }
    budget
        .spend_with(REROLL_COST, || reroll_lowest(pool, history, rng))
        .flatten()
}
