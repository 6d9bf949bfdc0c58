use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::is_abstract_resource;

/// The camp's shared store. Group actions deposit their haul here and
/// survivors store and take items by hand.
///
/// Camp resources are kept lower-case; other items keep the spelling they
/// were first deposited with. Lookups ignore case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stash {
    items: BTreeMap<String, u32>,
}

impl Stash {
    /// Create an empty stash.
    pub fn new() -> Self {
        Self::default()
    }

    fn key(&self, name: &str) -> Option<&String> {
        self.items.keys().find(|k| k.eq_ignore_ascii_case(name))
    }

    /// Add `amount` units of an item.
    pub fn deposit(&mut self, name: &str, amount: u32) {
        let key = match self.key(name) {
            Some(existing) => existing.clone(),
            None if is_abstract_resource(name) => name.to_lowercase(),
            None => name.to_string(),
        };
        let count = self.items.entry(key).or_default();
        *count = count.saturating_add(amount);
    }

    /// Remove `amount` units of an item. Returns the stored name.
    pub fn withdraw(&mut self, name: &str, amount: u32) -> CoreResult<String> {
        if amount == 0 {
            return Err(CoreError::ZeroAmount);
        }
        let have = self.count(name);
        let key = match self.key(name) {
            Some(key) if have >= amount => key.clone(),
            _ => {
                return Err(CoreError::NotEnoughItems {
                    item: name.to_string(),
                    have,
                    wanted: amount,
                });
            }
        };
        if have == amount {
            self.items.remove(&key);
        } else if let Some(count) = self.items.get_mut(&key) {
            *count -= amount;
        }
        Ok(key)
    }

    /// Units held of an item (any case).
    pub fn count(&self, name: &str) -> u32 {
        self.key(name)
            .and_then(|k| self.items.get(k))
            .copied()
            .unwrap_or(0)
    }

    /// All items with their counts, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns true if the stash is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
