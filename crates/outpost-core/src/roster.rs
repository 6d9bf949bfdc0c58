//! In-memory survivor records keyed by actor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::background::find_background;
use crate::error::{CoreError, CoreResult};
use crate::gate::DailyActionGate;
use crate::id::ActorId;
use crate::skill::Skill;
use crate::stash::Stash;
use crate::survivor::Survivor;

/// Every survivor in camp plus the daily action gate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    survivors: HashMap<ActorId, Survivor>,
    daily: DailyActionGate,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a survivor for `actor` from a named background.
    pub fn create(&mut self, actor: ActorId, name: &str, background: &str) -> CoreResult<&Survivor> {
        if self.survivors.contains_key(&actor) {
            return Err(CoreError::DuplicateSurvivor(actor));
        }
        let bg = find_background(background)
            .ok_or_else(|| CoreError::UnknownBackground(background.to_string()))?;
        Ok(self
            .survivors
            .entry(actor)
            .or_insert_with(|| Survivor::from_background(name, bg)))
    }

    /// Returns true if the actor has a survivor.
    pub fn contains(&self, actor: ActorId) -> bool {
        self.survivors.contains_key(&actor)
    }

    /// Get an actor's survivor.
    pub fn get(&self, actor: ActorId) -> Option<&Survivor> {
        self.survivors.get(&actor)
    }

    /// Get an actor's survivor mutably.
    pub fn get_mut(&mut self, actor: ActorId) -> CoreResult<&mut Survivor> {
        self.survivors
            .get_mut(&actor)
            .ok_or(CoreError::SurvivorNotFound(actor))
    }

    /// Trained skill value, or 0 when the actor has no survivor.
    pub fn skill_value(&self, actor: ActorId, skill: Skill) -> u32 {
        self.get(actor).map(|s| s.skill(skill)).unwrap_or(0)
    }

    /// Equipment bonus, or 0 when the actor has no survivor.
    pub fn equipment_bonus(&self, actor: ActorId, skill: Skill) -> u32 {
        self.get(actor)
            .map(|s| s.equipment_bonus(skill))
            .unwrap_or(0)
    }

    /// Spend an actor's starting skill points. See [`Survivor::allocate`].
    pub fn allocate(&mut self, actor: ActorId, points: &[(Skill, u32)]) -> CoreResult<()> {
        self.get_mut(actor)?.allocate(points)
    }

    /// Move `amount` units of an item from one survivor to another.
    ///
    /// Given items arrive unequipped. Returns the item's stored name.
    pub fn give(&mut self, from: ActorId, to: ActorId, item: &str, amount: u32) -> CoreResult<String> {
        if !self.contains(to) {
            return Err(CoreError::SurvivorNotFound(to));
        }
        let name = self.get_mut(from)?.remove_items(item, amount)?;
        self.get_mut(to)?.add_loot(&name, amount);
        Ok(name)
    }

    /// Move `amount` units from a survivor into the camp stash.
    pub fn store(&mut self, actor: ActorId, stash: &mut Stash, item: &str, amount: u32) -> CoreResult<String> {
        let name = self.get_mut(actor)?.remove_items(item, amount)?;
        stash.deposit(&name, amount);
        Ok(name)
    }

    /// Move `amount` units from the camp stash to a survivor.
    pub fn take(&mut self, actor: ActorId, stash: &mut Stash, item: &str, amount: u32) -> CoreResult<String> {
        let survivor = self.get_mut(actor)?;
        let name = stash.withdraw(item, amount)?;
        survivor.add_loot(&name, amount);
        Ok(name)
    }

    /// The daily action gate.
    pub fn daily(&self) -> &DailyActionGate {
        &self.daily
    }

    /// The daily action gate, mutably.
    pub fn daily_mut(&mut self) -> &mut DailyActionGate {
        &mut self.daily
    }

    /// Number of survivors.
    pub fn len(&self) -> usize {
        self.survivors.len()
    }

    /// Returns true if nobody has a survivor yet.
    pub fn is_empty(&self) -> bool {
        self.survivors.is_empty()
    }
}
