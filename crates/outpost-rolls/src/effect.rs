//! Side effects requested by session transitions.
//!
//! Transitions never talk to the outside world. They return a list of
//! [`Effect`]s in the order they must run, and the engine carries them out.

use outpost_core::{ActionDef, ActorId, SessionId};
use outpost_mechanics::DicePool;
use serde::Serialize;

use crate::event::InputEvent;
use crate::view::SessionView;

/// Who a resolution applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Participants {
    /// A single actor's roll.
    Solo(ActorId),
    /// Every member of a group roll, in actor order.
    Group(Vec<ActorId>),
}

impl Participants {
    /// The participating actors.
    pub fn actors(&self) -> &[ActorId] {
        match self {
            Self::Solo(actor) => std::slice::from_ref(actor),
            Self::Group(actors) => actors,
        }
    }
}

/// A finished roll waiting for its effect to be applied.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// The session that resolved.
    pub session: SessionId,
    /// The attempted action.
    pub action: &'static ActionDef,
    /// Who rolled.
    pub participants: Participants,
    /// The final dice.
    pub pool: DicePool,
    /// Final success score.
    pub successes: i32,
}

/// One side effect.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Redraw a session.
    Render(SessionView),
    /// Mark an input as consumed.
    Acknowledge(InputEvent),
    /// Apply a finished roll through the action resolver.
    Resolve(Resolution),
    /// Record that the actor used their daily action.
    MarkDailyAction(ActorId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participants_actors() {
        assert_eq!(Participants::Solo(ActorId(1)).actors(), &[ActorId(1)]);
        let group = Participants::Group(vec![ActorId(1), ActorId(2)]);
        assert_eq!(group.actors().len(), 2);
    }
}
