//! A single actor refining their own roll.
//!
//! Only the owner can touch the session. Adding a die costs 3 skill points,
//! rerolling the lowest die costs 1; either is silently refused when the
//! budget is short. Submitting scores the pool, spends the owner's daily
//! action and retires the session for good.

use outpost_core::{ActionDef, ActorId, SessionId};
use outpost_mechanics::{DicePool, RollHistory, SkillBudget, add_die, reroll, score_successes};
use rand::Rng;
use tracing::debug;

use crate::effect::{Effect, Participants, Resolution};
use crate::event::{EventKind, InputEvent};
use crate::registry::Outcome;
use crate::view::{SessionView, SoloView};

/// Lifecycle of a solo roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoloState {
    /// Accepting refinement.
    Active,
    /// Submitted. Terminal.
    Resolved,
}

/// One actor's roll-refinement session.
#[derive(Debug, Clone)]
pub struct SoloRollSession {
    id: SessionId,
    owner: ActorId,
    action: &'static ActionDef,
    pool: DicePool,
    history: RollHistory,
    budget: SkillBudget,
    state: SoloState,
}

impl SoloRollSession {
    /// Open a session over an already rolled pool.
    pub fn new(
        id: SessionId,
        owner: ActorId,
        action: &'static ActionDef,
        budget: SkillBudget,
        pool: DicePool,
    ) -> Self {
        Self {
            id,
            owner,
            action,
            pool,
            history: RollHistory::new(),
            budget,
            state: SoloState::Active,
        }
    }

    /// Session handle.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The only actor whose inputs count.
    pub fn owner(&self) -> ActorId {
        self.owner
    }

    /// The attempted action.
    pub fn action(&self) -> &'static ActionDef {
        self.action
    }

    /// Current dice.
    pub fn pool(&self) -> &DicePool {
        &self.pool
    }

    /// Pools as they were before each reroll.
    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    /// Skill points left.
    pub fn budget(&self) -> SkillBudget {
        self.budget
    }

    /// Lifecycle state.
    pub fn state(&self) -> SoloState {
        self.state
    }

    /// Success score of the current pool.
    pub fn successes(&self) -> i32 {
        score_successes(&self.pool)
    }

    /// Snapshot for the display.
    pub fn view(&self) -> SessionView {
        SessionView::Solo(SoloView {
            session: self.id,
            owner: self.owner,
            action: self.action,
            skill: self.action.skill,
            pool: self.pool.clone(),
            successes: self.successes(),
            budget: self.budget.remaining(),
            history: self.history.clone(),
        })
    }

    /// Apply one input, appending the side effects it requires.
    ///
    /// `acknowledge_rejected` controls whether owner inputs that change
    /// nothing are still acknowledged.
    pub fn apply(
        &mut self,
        event: &InputEvent,
        rng: &mut impl Rng,
        acknowledge_rejected: bool,
        effects: &mut Vec<Effect>,
    ) -> Outcome {
        if self.state == SoloState::Resolved || event.actor != self.owner {
            return Outcome::Ignored;
        }

        let changed = match event.kind {
            EventKind::AddDie => add_die(&mut self.pool, &mut self.budget, rng).is_some(),
            EventKind::Reroll => {
                reroll(&mut self.pool, &mut self.history, &mut self.budget, rng).is_some()
            }
            EventKind::Submit => return self.submit(event, effects),
            EventKind::Join | EventKind::Launch => false,
        };

        if changed {
            debug!(session = %self.id, kind = %event.kind, pool = %self.pool, budget = %self.budget, "solo roll refined");
            effects.push(Effect::Render(self.view()));
            effects.push(Effect::Acknowledge(*event));
            Outcome::Accepted
        } else {
            if acknowledge_rejected {
                effects.push(Effect::Acknowledge(*event));
            }
            Outcome::Unchanged
        }
    }

    fn submit(&mut self, event: &InputEvent, effects: &mut Vec<Effect>) -> Outcome {
        self.state = SoloState::Resolved;
        effects.push(Effect::Resolve(Resolution {
            session: self.id,
            action: self.action,
            participants: Participants::Solo(self.owner),
            pool: self.pool.clone(),
            successes: self.successes(),
        }));
        effects.push(Effect::MarkDailyAction(self.owner));
        effects.push(Effect::Acknowledge(*event));
        Outcome::Resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outpost_core::find_action;
    use outpost_mechanics::roll_die;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const OWNER: ActorId = ActorId(1);

    fn session(budget: u32, pool: &[u8]) -> SoloRollSession {
        SoloRollSession::new(
            SessionId(1),
            OWNER,
            find_action("scavenge").unwrap(),
            SkillBudget::new(budget),
            DicePool::from_values(pool.iter().copied()),
        )
    }

    fn send(s: &mut SoloRollSession, actor: ActorId, kind: EventKind) -> (Outcome, Vec<Effect>) {
        let mut rng = StdRng::seed_from_u64(11);
        let mut effects = Vec::new();
        let event = InputEvent::new(s.id(), actor, kind);
        let outcome = s.apply(&event, &mut rng, true, &mut effects);
        (outcome, effects)
    }

    #[test]
    fn add_then_reroll_scenario() {
        // Adding a die draws exactly one face, so pick a seed whose first
        // face is not a 1 and the original 2 stays the lowest die.
        let seed = (0u64..)
            .find(|&seed| roll_die(&mut StdRng::seed_from_u64(seed)) >= 2)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = session(10, &[3, 5, 2]);
        let mut effects = Vec::new();

        let add = InputEvent::new(s.id(), OWNER, EventKind::AddDie);
        assert_eq!(s.apply(&add, &mut rng, true, &mut effects), Outcome::Accepted);
        assert_eq!(s.budget().remaining(), 7);
        assert_eq!(s.pool().len(), 4);
        assert!(s.pool().values()[3] >= 2);

        let before = s.pool().clone();
        let reroll = InputEvent::new(s.id(), OWNER, EventKind::Reroll);
        assert_eq!(s.apply(&reroll, &mut rng, true, &mut effects), Outcome::Accepted);
        assert_eq!(s.budget().remaining(), 6);
        assert_eq!(s.history().last(), Some(&before));
        assert_eq!(before.lowest_index(), Some(2));
        assert_eq!(&s.pool().values()[..2], &[3, 5]);
        assert_eq!(s.pool().values()[3], before.values()[3]);
    }

    #[test]
    fn accepted_input_renders_then_acknowledges() {
        let mut s = session(10, &[3, 5, 2]);
        let (_, effects) = send(&mut s, OWNER, EventKind::Reroll);
        assert_eq!(effects.len(), 2);
        assert!(matches!(effects[0], Effect::Render(SessionView::Solo(_))));
        assert!(matches!(effects[1], Effect::Acknowledge(_)));
    }

    #[test]
    fn short_budget_changes_nothing() {
        let mut s = session(2, &[3, 5, 2]);
        let (outcome, effects) = send(&mut s, OWNER, EventKind::AddDie);
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(s.pool().values(), &[3, 5, 2]);
        assert_eq!(s.budget().remaining(), 2);
        assert!(matches!(effects.as_slice(), [Effect::Acknowledge(_)]));

        let mut s = session(0, &[3, 5, 2]);
        let (outcome, _) = send(&mut s, OWNER, EventKind::Reroll);
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(s.history().is_empty());
    }

    #[test]
    fn rejected_input_not_acknowledged_in_strict_mode() {
        let mut s = session(0, &[3, 5, 2]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut effects = Vec::new();
        let event = InputEvent::new(s.id(), OWNER, EventKind::AddDie);
        assert_eq!(s.apply(&event, &mut rng, false, &mut effects), Outcome::Unchanged);
        assert!(effects.is_empty());
    }

    #[test]
    fn other_actors_are_ignored() {
        let mut s = session(10, &[3, 5, 2]);
        for kind in [EventKind::AddDie, EventKind::Reroll, EventKind::Submit] {
            let (outcome, effects) = send(&mut s, ActorId(2), kind);
            assert_eq!(outcome, Outcome::Ignored);
            assert!(effects.is_empty());
        }
        assert_eq!(s.budget().remaining(), 10);
        assert_eq!(s.state(), SoloState::Active);
    }

    #[test]
    fn submit_resolves_once() {
        let mut s = session(10, &[6, 4, 1]);
        let (outcome, effects) = send(&mut s, OWNER, EventKind::Submit);
        assert_eq!(outcome, Outcome::Resolved);
        assert_eq!(s.state(), SoloState::Resolved);
        match &effects[0] {
            Effect::Resolve(r) => {
                assert_eq!(r.successes, 2);
                assert_eq!(r.participants, Participants::Solo(OWNER));
            }
            other => panic!("expected resolve, got {other:?}"),
        }
        assert!(matches!(effects[1], Effect::MarkDailyAction(OWNER)));
        assert!(matches!(effects[2], Effect::Acknowledge(_)));

        let (outcome, effects) = send(&mut s, OWNER, EventKind::Submit);
        assert_eq!(outcome, Outcome::Ignored);
        assert!(effects.is_empty());
    }

    #[test]
    fn lobby_inputs_do_nothing() {
        let mut s = session(10, &[3, 5, 2]);
        let (outcome, _) = send(&mut s, OWNER, EventKind::Join);
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(s.budget().remaining(), 10);
    }
}
