//! The camp's survivors and stash, shared between the engine's store and
//! resolver and the console's own commands.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use outpost_core::{ActorId, Roster, Skill, Stash};
use outpost_mechanics::{LootDrop, roll_loot, summarize_loot};
use outpost_rolls::{ActionResolver, CharacterStore, Participants, Resolution};
use rand::rngs::StdRng;
use tracing::{info, warn};

/// Survivors plus the shared stash.
#[derive(Debug, Default)]
pub struct Camp {
    pub roster: Roster,
    pub stash: Stash,
}

pub type SharedCamp = Arc<Mutex<Camp>>;

/// Lock the camp. A panic elsewhere cannot leave the roster half-written,
/// so a poisoned lock is taken over.
pub fn lock(camp: &SharedCamp) -> MutexGuard<'_, Camp> {
    camp.lock().unwrap_or_else(PoisonError::into_inner)
}

/// [`CharacterStore`] view of the camp roster.
#[derive(Debug, Clone)]
pub struct CampStore(pub SharedCamp);

impl CharacterStore for CampStore {
    fn skill_value(&self, actor: ActorId, skill: Skill) -> u32 {
        lock(&self.0).roster.skill_value(actor, skill)
    }

    fn equipment_bonus(&self, actor: ActorId, skill: Skill) -> u32 {
        lock(&self.0).roster.equipment_bonus(actor, skill)
    }

    fn has_character(&self, actor: ActorId) -> bool {
        lock(&self.0).roster.contains(actor)
    }

    fn has_done_daily_action(&self, actor: ActorId) -> bool {
        lock(&self.0).roster.daily().has_acted(actor)
    }

    fn set_daily_action(&mut self, actor: ActorId) {
        lock(&self.0).roster.daily_mut().mark(actor);
    }
}

/// Applies finished rolls to the camp.
///
/// Scavenging turns successes into loot: a solo scavenger keeps it, a group
/// puts it in the stash. Every other action only reports completion.
#[derive(Debug)]
pub struct CampResolver {
    camp: SharedCamp,
    rng: StdRng,
}

impl CampResolver {
    pub fn new(camp: SharedCamp, rng: StdRng) -> Self {
        Self { camp, rng }
    }

    fn scavenge(&mut self, resolution: &Resolution) -> String {
        let loot = summarize_loot(&roll_loot(resolution.successes, &mut self.rng));
        let mut camp = lock(&self.camp);
        match &resolution.participants {
            Participants::Solo(actor) => match camp.roster.get_mut(*actor) {
                Ok(survivor) => {
                    for drop in &loot {
                        survivor.add_loot(&drop.name, drop.amount);
                    }
                }
                Err(e) => {
                    warn!(%actor, error = %e, "loot lost");
                    return format!("Scavenge failed: {e}");
                }
            },
            Participants::Group(_) => {
                for drop in &loot {
                    camp.stash.deposit(&drop.name, drop.amount);
                }
            }
        }
        info!(session = %resolution.session, drops = loot.len(), "scavenge loot stored");
        describe_loot(&loot)
    }
}

impl ActionResolver for CampResolver {
    fn resolve(&mut self, resolution: &Resolution) -> String {
        match resolution.action.key {
            "scavenge" => self.scavenge(resolution),
            _ => format!("{} complete", resolution.action.name),
        }
    }
}

fn describe_loot(loot: &[LootDrop]) -> String {
    if loot.is_empty() {
        return "Found nothing".to_string();
    }
    let items = loot
        .iter()
        .map(|d| {
            if d.amount > 1 {
                format!("{}x {}", d.amount, d.name)
            } else {
                d.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("Found: {items}")
}
