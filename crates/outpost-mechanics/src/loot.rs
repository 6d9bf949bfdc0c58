//! Weighted loot tables.
//!
//! Every success earned on a scavenging roll buys one draw: pick a rarity by
//! weight, then pick an entry uniformly within it. Stackable entries roll an
//! amount from their range; everything else drops singly.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Loot rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    /// Everyday salvage.
    Common,
    /// Useful finds, including basic tools.
    Uncommon,
    /// Prized gear.
    Rare,
}

impl Rarity {
    /// Every tier in table order.
    pub const ALL: [Rarity; 3] = [Self::Common, Self::Uncommon, Self::Rare];

    /// Relative draw weight.
    pub fn weight(self) -> u32 {
        match self {
            Self::Common => 60,
            Self::Uncommon => 30,
            Self::Rare => 10,
        }
    }

    /// Entries in this tier.
    pub fn entries(self) -> &'static [LootEntry] {
        match self {
            Self::Common => &COMMON,
            Self::Uncommon => &UNCOMMON,
            Self::Rare => &RARE,
        }
    }
}

/// One row in a loot tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LootEntry {
    /// Item or resource name.
    pub name: &'static str,
    /// Inclusive amount range for stackables; `None` drops exactly one.
    pub amount: Option<(u32, u32)>,
}

const fn stack(name: &'static str, min: u32, max: u32) -> LootEntry {
    LootEntry {
        name,
        amount: Some((min, max)),
    }
}

const fn single(name: &'static str) -> LootEntry {
    LootEntry { name, amount: None }
}

static COMMON: [LootEntry; 4] = [
    stack("Materials", 1, 4),
    stack("Food", 1, 3),
    stack("Water", 1, 3),
    single("Medicine"),
];

static UNCOMMON: [LootEntry; 10] = [
    stack("Materials", 4, 8),
    stack("Food", 4, 6),
    stack("Water", 4, 6),
    stack("Medicine", 2, 3),
    stack("Fuel", 1, 2),
    stack("Ammo", 3, 6),
    single("Hoe"),
    single("Frying Pan"),
    single("Crowbar"),
    single("Knife"),
];

static RARE: [LootEntry; 3] = [
    single("Hunting Bow"),
    single("Combat Knife"),
    single("Medical Kit"),
];

/// One item found, with its amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootDrop {
    /// Item or resource name.
    pub name: String,
    /// Units found.
    pub amount: u32,
}

fn choose_rarity(rng: &mut impl Rng) -> Rarity {
    let total: u32 = Rarity::ALL.iter().map(|r| r.weight()).sum();
    let mut roll = rng.random_range(0..total);
    for rarity in Rarity::ALL {
        if roll < rarity.weight() {
            return rarity;
        }
        roll -= rarity.weight();
    }
    Rarity::Common
}

/// Draw loot for a roll's success score. Zero or negative scores find nothing.
pub fn roll_loot(successes: i32, rng: &mut impl Rng) -> Vec<LootDrop> {
    let draws = u32::try_from(successes).unwrap_or(0);
    (0..draws)
        .map(|_| {
            let entries = choose_rarity(rng).entries();
            let entry = entries[rng.random_range(0..entries.len())];
            let amount = match entry.amount {
                Some((min, max)) => rng.random_range(min..=max),
                None => 1,
            };
            LootDrop {
                name: entry.name.to_string(),
                amount,
            }
        })
        .collect()
}

/// Merge drops by name, keeping first-seen order.
pub fn summarize_loot(drops: &[LootDrop]) -> Vec<LootDrop> {
    let mut merged: Vec<LootDrop> = Vec::new();
    for drop in drops {
        match merged.iter_mut().find(|d| d.name == drop.name) {
            Some(existing) => existing.amount += drop.amount,
            None => merged.push(drop.clone()),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn known(name: &str) -> Option<LootEntry> {
        Rarity::ALL
            .iter()
            .flat_map(|r| r.entries())
            .find(|e| e.name == name)
            .copied()
    }

    #[test]
    fn weights_sum_to_hundred() {
        let total: u32 = Rarity::ALL.iter().map(|r| r.weight()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn one_draw_per_success() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(roll_loot(4, &mut rng).len(), 4);
    }

    #[test]
    fn no_loot_without_successes() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(roll_loot(0, &mut rng).is_empty());
        assert!(roll_loot(-3, &mut rng).is_empty());
    }

    #[test]
    fn drops_come_from_the_table() {
        let mut rng = StdRng::seed_from_u64(7);
        for drop in roll_loot(200, &mut rng) {
            assert!(known(&drop.name).is_some(), "unknown drop {}", drop.name);
            assert!(drop.amount >= 1 && drop.amount <= 8);
        }
    }

    #[test]
    fn summarize_merges_by_name() {
        let drops = vec![
            LootDrop { name: "Food".into(), amount: 2 },
            LootDrop { name: "Crowbar".into(), amount: 1 },
            LootDrop { name: "Food".into(), amount: 3 },
        ];
        let merged = summarize_loot(&drops);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], LootDrop { name: "Food".into(), amount: 5 });
        assert_eq!(merged[1].name, "Crowbar");
    }
}
