//! Reroll-lowest refinement.

use rand::Rng;

use super::{DicePool, RollHistory, roll_die};

/// Reroll the lowest die in place.
///
/// On ties the first (lowest-index) minimum is chosen. A copy of the pool as
/// it was before the change is appended to `history`. Returns the rerolled
/// index, or `None` (and touches nothing) when the pool is empty.
pub fn reroll_lowest(pool: &mut DicePool, history: &mut RollHistory, rng: &mut impl Rng) -> Option<usize> {
    let index = pool.lowest_index()?;
    history.record(pool);
    pool.replace(index, roll_die(rng));
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn first_minimum_is_replaced() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = DicePool::from_values([2, 5, 2]);
        let mut history = RollHistory::new();

        let index = reroll_lowest(&mut pool, &mut history, &mut rng);

        assert_eq!(index, Some(0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last(), Some(&DicePool::from_values([2, 5, 2])));
        assert_eq!(&pool.values()[1..], &[5, 2]);
    }

    #[test]
    fn empty_pool_is_untouched() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = DicePool::new();
        let mut history = RollHistory::new();
        assert_eq!(reroll_lowest(&mut pool, &mut history, &mut rng), None);
        assert!(pool.is_empty());
        assert!(history.is_empty());
    }

    proptest! {
        #[test]
        fn only_the_first_minimum_can_change(
            values in prop::collection::vec(1u8..=6, 1..12),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let before = DicePool::from_values(values.clone());
            let mut pool = before.clone();
            let mut history = RollHistory::new();

            let index = reroll_lowest(&mut pool, &mut history, &mut rng).unwrap();

            let min = *values.iter().min().unwrap();
            prop_assert_eq!(index, values.iter().position(|&v| v == min).unwrap());
            prop_assert_eq!(pool.len(), before.len());
            prop_assert_eq!(history.snapshots(), &[before.clone()]);
            for (i, (a, b)) in before.values().iter().zip(pool.values()).enumerate() {
                if i != index {
                    prop_assert_eq!(a, b);
                }
            }
        }
    }
}
