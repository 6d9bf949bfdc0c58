//! Gathering members before a group action.
//!
//! Anyone may join an open lobby; joining twice is harmless. Only the leader
//! can launch. Launching freezes the membership, prices each member's skill
//! budget from the character store and closes the lobby; the registry turns
//! the result into a [`crate::GroupRollSession`]. Every input that reaches a
//! lobby is acknowledged, valid or not.

use std::collections::BTreeSet;

use outpost_core::{ActionDef, ActorId, SessionId};
use outpost_mechanics::SkillBudget;
use tracing::{debug, warn};

use crate::effect::Effect;
use crate::event::{EventKind, InputEvent};
use crate::ports::{CharacterStore, price_budget};
use crate::registry::Outcome;
use crate::view::{LobbyView, SessionView};

/// Lifecycle of a lobby.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LobbyStatus {
    /// Accepting members.
    Open,
    /// Launched. Terminal.
    Closed,
}

/// Frozen membership handed to a new group roll.
pub type LaunchRoster = Vec<(ActorId, SkillBudget)>;

/// What a lobby input led to.
#[derive(Debug)]
pub enum LobbyStep {
    /// The lobby stays in place.
    Stay(Outcome),
    /// The lobby closed; start a group roll with this roster.
    Launch(LaunchRoster),
}

/// Pre-roll gathering for a group action.
#[derive(Debug, Clone)]
pub struct GroupLobby {
    id: SessionId,
    leader: ActorId,
    action: &'static ActionDef,
    members: BTreeSet<ActorId>,
    status: LobbyStatus,
}

impl GroupLobby {
    /// Open a lobby. The leader is its first member.
    pub fn new(id: SessionId, leader: ActorId, action: &'static ActionDef) -> Self {
        Self {
            id,
            leader,
            action,
            members: BTreeSet::from([leader]),
            status: LobbyStatus::Open,
        }
    }

    /// Lobby handle.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The actor allowed to launch.
    pub fn leader(&self) -> ActorId {
        self.leader
    }

    /// The group action.
    pub fn action(&self) -> &'static ActionDef {
        self.action
    }

    /// Members in actor order.
    pub fn members(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.members.iter().copied()
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Lifecycle state.
    pub fn status(&self) -> LobbyStatus {
        self.status
    }

    /// Snapshot for the display.
    pub fn view(&self) -> SessionView {
        SessionView::Lobby(LobbyView {
            session: self.id,
            leader: self.leader,
            action: self.action,
            members: self.members().collect(),
        })
    }

    /// Add a member. Returns false if already present or the lobby is closed.
    pub fn join(&mut self, actor: ActorId) -> bool {
        self.status == LobbyStatus::Open && self.members.insert(actor)
    }

    /// Close the lobby and price each member's budget.
    ///
    /// Refused unless `actor` is the leader and the lobby is open. Members
    /// without a survivor are left out; if nobody is left the lobby stays
    /// open.
    pub fn launch(&mut self, actor: ActorId, store: &dyn CharacterStore) -> Option<LaunchRoster> {
        if self.status != LobbyStatus::Open || actor != self.leader {
            return None;
        }

        let skill = self.action.skill;
        let roster: LaunchRoster = self
            .members
            .iter()
            .filter(|&&member| {
                let known = store.has_character(member);
                if !known {
                    warn!(lobby = %self.id, %member, "member has no survivor, leaving them out");
                }
                known
            })
            .map(|&member| (member, price_budget(store, member, skill)))
            .collect();

        if roster.is_empty() {
            warn!(lobby = %self.id, "no member can roll, launch refused");
            return None;
        }

        self.status = LobbyStatus::Closed;
        Some(roster)
    }

    /// Apply one input, appending the side effects it requires.
    pub fn apply(
        &mut self,
        event: &InputEvent,
        store: &dyn CharacterStore,
        effects: &mut Vec<Effect>,
    ) -> LobbyStep {
        let step = match event.kind {
            EventKind::Join => {
                if self.join(event.actor) {
                    debug!(lobby = %self.id, actor = %event.actor, "joined lobby");
                    effects.push(Effect::Render(self.view()));
                    LobbyStep::Stay(Outcome::Accepted)
                } else {
                    LobbyStep::Stay(Outcome::Unchanged)
                }
            }
            EventKind::Launch => match self.launch(event.actor, store) {
                Some(roster) => LobbyStep::Launch(roster),
                None => LobbyStep::Stay(Outcome::Unchanged),
            },
            EventKind::AddDie | EventKind::Reroll | EventKind::Submit => {
                LobbyStep::Stay(Outcome::Unchanged)
            }
        };
        effects.push(Effect::Acknowledge(*event));
        step
    }
}
