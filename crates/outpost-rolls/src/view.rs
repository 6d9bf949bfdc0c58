//! Snapshots of session state handed to the display.

use chrono::{DateTime, Utc};
use outpost_core::{ActionDef, ActorId, SessionId, Skill};
use outpost_mechanics::{DicePool, RollHistory};
use serde::Serialize;

use crate::effect::{Participants, Resolution};

/// What the display is asked to draw after an accepted input.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionView {
    /// A solo roll in progress.
    Solo(SoloView),
    /// A lobby gathering members.
    Lobby(LobbyView),
    /// A group roll in progress.
    Group(GroupView),
}

impl SessionView {
    /// The session this view belongs to.
    pub fn session(&self) -> SessionId {
        match self {
            Self::Solo(v) => v.session,
            Self::Lobby(v) => v.session,
            Self::Group(v) => v.session,
        }
    }
}

/// State of a solo roll.
#[derive(Debug, Clone, Serialize)]
pub struct SoloView {
    /// Session handle.
    pub session: SessionId,
    /// The rolling actor.
    pub owner: ActorId,
    /// The action being attempted.
    pub action: &'static ActionDef,
    /// The skill funding the roll.
    pub skill: Skill,
    /// Current dice.
    pub pool: DicePool,
    /// Success score of the current dice.
    pub successes: i32,
    /// Skill points left.
    pub budget: u32,
    /// Pools as they were before each reroll.
    pub history: RollHistory,
}

/// State of a lobby.
#[derive(Debug, Clone, Serialize)]
pub struct LobbyView {
    /// Lobby handle.
    pub session: SessionId,
    /// The actor who may launch.
    pub leader: ActorId,
    /// The group action.
    pub action: &'static ActionDef,
    /// Everyone who joined, leader included.
    pub members: Vec<ActorId>,
}

/// One member's line in a group roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemberView {
    /// The member.
    pub actor: ActorId,
    /// Skill points they have left.
    pub budget: u32,
    /// Whether they are ready.
    pub submitted: bool,
}

/// State of a group roll.
#[derive(Debug, Clone, Serialize)]
pub struct GroupView {
    /// Session handle.
    pub session: SessionId,
    /// The group action.
    pub action: &'static ActionDef,
    /// The shared dice.
    pub pool: DicePool,
    /// Success score of the shared dice.
    pub successes: i32,
    /// Every member, in actor order.
    pub members: Vec<MemberView>,
    /// Pools as they were before each reroll.
    pub history: RollHistory,
}

impl GroupView {
    /// Members who have submitted.
    pub fn submitted(&self) -> impl Iterator<Item = &MemberView> {
        self.members.iter().filter(|m| m.submitted)
    }

    /// Members still refining.
    pub fn waiting(&self) -> impl Iterator<Item = &MemberView> {
        self.members.iter().filter(|m| !m.submitted)
    }
}

/// The final word on a resolved session.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionReport {
    /// The retired session.
    pub session: SessionId,
    /// The action that was attempted.
    pub action: &'static ActionDef,
    /// Who rolled.
    pub participants: Participants,
    /// The final dice.
    pub pool: DicePool,
    /// Final success score.
    pub successes: i32,
    /// Description of what the action achieved.
    pub effect: String,
    /// When the session resolved.
    pub resolved_at: DateTime<Utc>,
}

impl ResolutionReport {
    /// Attach the resolver's effect description to a resolution.
    pub fn new(resolution: Resolution, effect: String) -> Self {
        Self {
            session: resolution.session,
            action: resolution.action,
            participants: resolution.participants,
            pool: resolution.pool,
            successes: resolution.successes,
            effect,
            resolved_at: Utc::now(),
        }
    }
}
