//! Skill budgets: the points an actor spends to refine a roll.

use serde::{Deserialize, Serialize};

/// Cost of appending one die to a pool.
pub const ADD_DIE_COST: u32 = 3;
/// Cost of rerolling the lowest die.
pub const REROLL_COST: u32 = 1;

/// A non-negative pool of skill points.
///
/// Points only leave through [`SkillBudget::spend_with`], which debits and
/// applies the paid-for change as one step or does neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillBudget {
    points: u32,
}

impl SkillBudget {
    /// Create a budget holding `points`.
    pub fn new(points: u32) -> Self {
        Self { points }
    }

    /// Points left.
    pub fn remaining(&self) -> u32 {
        self.points
    }

    /// Returns true if `cost` can be paid.
    pub fn can_afford(&self, cost: u32) -> bool {
        self.points >= cost
    }

    /// Pay `cost` and run `change`, or do nothing if the budget is short.
    pub fn spend_with<T>(&mut self, cost: u32, change: impl FnOnce() -> T) -> Option<T> {
        let left = self.points.checked_sub(cost)?;
        let out = change();
        self.points = left;
        Some(out)
    }
}

impl std::fmt::Display for SkillBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.points)
    }
}
