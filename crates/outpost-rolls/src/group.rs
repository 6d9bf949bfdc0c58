//! A group roll over one shared pool.
//!
//! The pool belongs to the group, not to any member. Each member pays for
//! refinement from their own budget, but the die they add or reroll is just
//! a die in the shared pool: a member's reroll may replace a die that
//! another member paid for, and nothing tracks who added what.
//!
//! Membership is frozen at launch. The session resolves once, on the submit
//! that makes the submitted set equal to the full membership; members may
//! keep refining after they submit.

use std::collections::{BTreeMap, BTreeSet};

use outpost_core::{ActionDef, ActorId, SessionId};
use outpost_mechanics::{DicePool, RollHistory, SkillBudget, add_die, reroll, score_successes};
use rand::Rng;
use tracing::debug;

use crate::effect::{Effect, Participants, Resolution};
use crate::event::{EventKind, InputEvent};
use crate::registry::Outcome;
use crate::view::{GroupView, MemberView, SessionView};

/// Lifecycle of a group roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    /// Accepting refinement and submissions.
    Active,
    /// Every member submitted. Terminal.
    Resolved,
}

/// Shared-pool roll session for a launched lobby.
#[derive(Debug, Clone)]
pub struct GroupRollSession {
    id: SessionId,
    action: &'static ActionDef,
    members: BTreeMap<ActorId, SkillBudget>,
    pool: DicePool,
    history: RollHistory,
    submitted: BTreeSet<ActorId>,
    state: GroupState,
}

impl GroupRollSession {
    /// Open a session with a frozen membership over an already rolled pool.
    pub fn new(
        id: SessionId,
        action: &'static ActionDef,
        members: impl IntoIterator<Item = (ActorId, SkillBudget)>,
        pool: DicePool,
    ) -> Self {
        Self {
            id,
            action,
            members: members.into_iter().collect(),
            pool,
            history: RollHistory::new(),
            submitted: BTreeSet::new(),
            state: GroupState::Active,
        }
    }

    /// Session handle.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The group action.
    pub fn action(&self) -> &'static ActionDef {
        self.action
    }

    /// Returns true if `actor` is on the frozen roster.
    pub fn is_member(&self, actor: ActorId) -> bool {
        self.members.contains_key(&actor)
    }

    /// Members in actor order.
    pub fn members(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.members.keys().copied()
    }

    /// A member's remaining budget.
    pub fn budget(&self, actor: ActorId) -> Option<SkillBudget> {
        self.members.get(&actor).copied()
    }

    /// The shared dice.
    pub fn pool(&self) -> &DicePool {
        &self.pool
    }

    /// Pools as they were before each reroll.
    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    /// Members who have submitted.
    pub fn submitted(&self) -> &BTreeSet<ActorId> {
        &self.submitted
    }

    /// Lifecycle state.
    pub fn state(&self) -> GroupState {
        self.state
    }

    /// Success score of the shared pool.
    pub fn successes(&self) -> i32 {
        score_successes(&self.pool)
    }

    /// Returns true once every member has submitted.
    pub fn quorum_met(&self) -> bool {
        self.submitted.len() == self.members.len()
            && self.members.keys().all(|m| self.submitted.contains(m))
    }

    /// Snapshot for the display.
    pub fn view(&self) -> SessionView {
        SessionView::Group(GroupView {
            session: self.id,
            action: self.action,
            pool: self.pool.clone(),
            successes: self.successes(),
            members: self
                .members
                .iter()
                .map(|(&actor, budget)| MemberView {
                    actor,
                    budget: budget.remaining(),
                    submitted: self.submitted.contains(&actor),
                })
                .collect(),
            history: self.history.clone(),
        })
    }

    /// Apply one input, appending the side effects it requires.
    ///
    /// Inputs from non-members are ignored outright. Member inputs are
    /// always acknowledged.
    pub fn apply(&mut self, event: &InputEvent, rng: &mut impl Rng, effects: &mut Vec<Effect>) -> Outcome {
        if self.state == GroupState::Resolved || !self.is_member(event.actor) {
            return Outcome::Ignored;
        }

        let outcome = match event.kind {
            EventKind::AddDie => {
                let paid = match self.members.get_mut(&event.actor) {
                    Some(budget) => add_die(&mut self.pool, budget, rng).is_some(),
                    None => false,
                };
                self.refined(event, paid, effects)
            }
            EventKind::Reroll => {
                let paid = match self.members.get_mut(&event.actor) {
                    Some(budget) => reroll(&mut self.pool, &mut self.history, budget, rng).is_some(),
                    None => false,
                };
                self.refined(event, paid, effects)
            }
            EventKind::Submit => {
                let fresh = self.submitted.insert(event.actor);
                if self.quorum_met() {
                    self.state = GroupState::Resolved;
                    effects.push(Effect::Resolve(Resolution {
                        session: self.id,
                        action: self.action,
                        participants: Participants::Group(self.members().collect()),
                        pool: self.pool.clone(),
                        successes: self.successes(),
                    }));
                    Outcome::Resolved
                } else {
                    debug!(session = %self.id, actor = %event.actor, waiting = self.members.len() - self.submitted.len(), "member ready");
                    effects.push(Effect::Render(self.view()));
                    if fresh {
                        Outcome::Accepted
                    } else {
                        Outcome::Unchanged
                    }
                }
            }
            EventKind::Join | EventKind::Launch => Outcome::Unchanged,
        };
        effects.push(Effect::Acknowledge(*event));
        outcome
    }

    fn refined(&self, event: &InputEvent, paid: bool, effects: &mut Vec<Effect>) -> Outcome {
        if !paid {
            return Outcome::Unchanged;
        }
        debug!(session = %self.id, actor = %event.actor, kind = %event.kind, pool = %self.pool, "shared pool refined");
        effects.push(Effect::Render(self.view()));
        Outcome::Accepted
    }
}
