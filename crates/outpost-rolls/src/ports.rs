//! Collaborator interfaces the engine depends on.
//!
//! Survivor records, action effects, rendering and input acknowledgment all
//! live outside the engine. Rendering and acknowledgment are best effort:
//! their errors are logged and never undo a committed transition.

use outpost_core::{ActorId, Roster, Skill};
use outpost_mechanics::SkillBudget;
use thiserror::Error;

use crate::effect::Resolution;
use crate::event::InputEvent;
use crate::view::{ResolutionReport, SessionView};

/// Failure reported by a display or acknowledgment collaborator.
#[derive(Debug, Error)]
pub enum CollabError {
    /// The display could not draw.
    #[error("display failed: {0}")]
    Display(String),

    /// The input could not be marked as consumed.
    #[error("acknowledgment failed: {0}")]
    Acknowledge(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read access to survivors, plus the daily action gate.
pub trait CharacterStore {
    /// Trained value of `skill`, 0 if untrained or unknown.
    fn skill_value(&self, actor: ActorId, skill: Skill) -> u32;
    /// Bonus from equipped gear for `skill`.
    fn equipment_bonus(&self, actor: ActorId, skill: Skill) -> u32;
    /// Returns true if the actor has a survivor.
    fn has_character(&self, actor: ActorId) -> bool;
    /// Returns true if the actor already completed today's action.
    fn has_done_daily_action(&self, actor: ActorId) -> bool;
    /// Record that the actor completed today's action.
    fn set_daily_action(&mut self, actor: ActorId);
}

/// Budget an actor brings to a roll: trained skill plus equipment bonus,
/// saturating at `u32::MAX`.
pub fn price_budget(store: &dyn CharacterStore, actor: ActorId, skill: Skill) -> SkillBudget {
    SkillBudget::new(
        store
            .skill_value(actor, skill)
            .saturating_add(store.equipment_bonus(actor, skill)),
    )
}

/// Applies the in-world effect of a finished roll.
pub trait ActionResolver {
    /// Apply `resolution` and describe what happened. Called exactly once
    /// per resolved session.
    fn resolve(&mut self, resolution: &Resolution) -> String;
}

/// Draws sessions and final results.
pub trait SessionDisplay {
    /// Draw the current state of a session.
    fn render(&mut self, view: &SessionView) -> Result<(), CollabError>;
    /// Announce a resolved session.
    fn report(&mut self, report: &ResolutionReport) -> Result<(), CollabError>;
}

/// Marks inputs as consumed so the input surface can clear them.
pub trait Acknowledger {
    /// Consume `event`.
    fn consume(&mut self, event: &InputEvent) -> Result<(), CollabError>;
}

impl CharacterStore for Roster {
    fn skill_value(&self, actor: ActorId, skill: Skill) -> u32 {
        Roster::skill_value(self, actor, skill)
    }

    fn equipment_bonus(&self, actor: ActorId, skill: Skill) -> u32 {
        Roster::equipment_bonus(self, actor, skill)
    }

    fn has_character(&self, actor: ActorId) -> bool {
        self.contains(actor)
    }

    fn has_done_daily_action(&self, actor: ActorId) -> bool {
        self.daily().has_acted(actor)
    }

    fn set_daily_action(&mut self, actor: ActorId) {
        self.daily_mut().mark(actor);
    }
}
