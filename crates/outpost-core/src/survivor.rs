use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::background::Background;
use crate::error::{CoreError, CoreResult};
use crate::item::{InventoryItem, equipment_bonus, is_abstract_resource};
use crate::skill::Skill;

/// Free skill points every new survivor starts with.
pub const STARTING_POINTS: u32 = 5;

/// Most points one skill may receive from the starting allocation.
pub const ALLOCATION_CAP: u32 = 3;

fn starting_points() -> u32 {
    STARTING_POINTS
}

/// A player's survivor: trained skills and carried gear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survivor {
    /// Survivor name.
    pub name: String,
    /// Name of the background chosen at creation.
    pub background: String,
    /// Trained skill values. Every skill is present, untrained ones at 0.
    pub skills: BTreeMap<Skill, u32>,
    /// Carried and equipped items, one entry per unit.
    pub inventory: Vec<InventoryItem>,
    /// Starting points not yet spent.
    #[serde(default = "starting_points")]
    pub unallocated_points: u32,
    /// Whether the one-time allocation happened.
    #[serde(default)]
    pub allocated: bool,
}

impl Survivor {
    /// Create a survivor with the background's bonuses and starting gear.
    pub fn from_background(name: impl Into<String>, background: &Background) -> Self {
        let mut skills: BTreeMap<Skill, u32> = Skill::ALL.into_iter().map(|s| (s, 0)).collect();
        for (skill, bonus) in background.skills {
            *skills.entry(*skill).or_default() += bonus;
        }
        Self {
            name: name.into(),
            background: background.name.to_string(),
            skills,
            inventory: background.starting_inventory(),
            unallocated_points: STARTING_POINTS,
            allocated: false,
        }
    }

    /// Trained value for a skill.
    pub fn skill(&self, skill: Skill) -> u32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    /// Bonus from equipped gear for a skill.
    pub fn equipment_bonus(&self, skill: Skill) -> u32 {
        equipment_bonus(&self.inventory, skill)
    }

    /// Trained value plus equipment bonus.
    pub fn skill_total(&self, skill: Skill) -> u32 {
        self.skill(skill).saturating_add(self.equipment_bonus(skill))
    }

    /// Spend starting points on skills. Allowed once.
    ///
    /// Points for the same skill are summed before the cap is checked.
    /// Nothing changes unless the whole request is valid.
    pub fn allocate(&mut self, points: &[(Skill, u32)]) -> CoreResult<()> {
        if self.allocated {
            return Err(CoreError::AlreadyAllocated);
        }
        let mut per_skill: BTreeMap<Skill, u32> = BTreeMap::new();
        for &(skill, n) in points {
            let entry = per_skill.entry(skill).or_default();
            *entry = entry.saturating_add(n);
        }
        let requested = per_skill.values().fold(0u32, |acc, n| acc.saturating_add(*n));
        if requested > self.unallocated_points {
            return Err(CoreError::NotEnoughPoints {
                available: self.unallocated_points,
                requested,
            });
        }
        if let Some((&skill, _)) = per_skill.iter().find(|(_, n)| **n > ALLOCATION_CAP) {
            return Err(CoreError::AllocationCap {
                skill,
                cap: ALLOCATION_CAP,
            });
        }

        for (skill, n) in per_skill {
            let value = self.skills.entry(skill).or_default();
            *value = value.saturating_add(n);
        }
        self.unallocated_points -= requested;
        self.allocated = true;
        Ok(())
    }

    /// Equip the first held (unequipped) item with this name.
    pub fn equip(&mut self, item: &str) -> CoreResult<()> {
        let slot = self
            .inventory
            .iter_mut()
            .find(|i| !i.is_equipped() && i.name().eq_ignore_ascii_case(item))
            .ok_or_else(|| CoreError::ItemNotHeld(item.to_string()))?;
        *slot = InventoryItem::Equipped(slot.name().to_string());
        Ok(())
    }

    /// Put away the first equipped item with this name.
    pub fn unequip(&mut self, item: &str) -> CoreResult<()> {
        let slot = self
            .inventory
            .iter_mut()
            .find(|i| i.is_equipped() && i.name().eq_ignore_ascii_case(item))
            .ok_or_else(|| CoreError::ItemNotEquipped(item.to_string()))?;
        *slot = InventoryItem::Held(slot.name().to_string());
        Ok(())
    }

    /// Add `amount` units of loot. Camp resources are stored lower-case.
    pub fn add_loot(&mut self, name: &str, amount: u32) {
        let stored = if is_abstract_resource(name) {
            name.to_lowercase()
        } else {
            name.to_string()
        };
        self.inventory
            .extend((0..amount).map(|_| InventoryItem::Held(stored.clone())));
    }

    /// Units carried of an item, equipped or not (any case).
    pub fn count(&self, item: &str) -> u32 {
        let n = self
            .inventory
            .iter()
            .filter(|i| i.name().eq_ignore_ascii_case(item))
            .count();
        u32::try_from(n).unwrap_or(u32::MAX)
    }

    /// Take `amount` units of an item out of the inventory.
    ///
    /// Held units go before equipped ones. Returns the item's stored name.
    /// Nothing is removed unless all `amount` units are there.
    pub fn remove_items(&mut self, item: &str, amount: u32) -> CoreResult<String> {
        if amount == 0 {
            return Err(CoreError::ZeroAmount);
        }
        let have = self.count(item);
        if have < amount {
            return Err(CoreError::NotEnoughItems {
                item: item.to_string(),
                have,
                wanted: amount,
            });
        }

        let mut name = item.to_string();
        let mut left = amount;
        for equipped in [false, true] {
            while left > 0 {
                let Some(pos) = self
                    .inventory
                    .iter()
                    .position(|i| i.is_equipped() == equipped && i.name().eq_ignore_ascii_case(item))
                else {
                    break;
                };
                name = self.inventory.remove(pos).name().to_string();
                left -= 1;
            }
        }
        Ok(name)
    }

    /// Inventory grouped by (name, equipped), in first-seen order.
    pub fn inventory_counts(&self) -> Vec<(&str, bool, u32)> {
        let mut counts: Vec<(&str, bool, u32)> = Vec::new();
        for item in &self.inventory {
            let key = (item.name(), item.is_equipped());
            match counts.iter_mut().find(|(n, e, _)| (*n, *e) == key) {
                Some(entry) => entry.2 += 1,
                None => counts.push((key.0, key.1, 1)),
            }
        }
        counts
    }
}
