//! Discrete inputs routed to live sessions.

use std::fmt;

use outpost_core::{ActorId, SessionId};
use serde::{Deserialize, Serialize};

/// The input alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Join an open lobby.
    Join,
    /// Launch a lobby into a group roll (leader only).
    Launch,
    /// Pay to add a die.
    AddDie,
    /// Pay to reroll the lowest die.
    Reroll,
    /// Finalize (solo) or mark ready (group).
    Submit,
}

impl EventKind {
    /// Parse a console keyword.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "join" => Some(Self::Join),
            "launch" => Some(Self::Launch),
            "add" | "add_die" => Some(Self::AddDie),
            "reroll" => Some(Self::Reroll),
            "submit" => Some(Self::Submit),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Join => "join",
            Self::Launch => "launch",
            Self::AddDie => "add_die",
            Self::Reroll => "reroll",
            Self::Submit => "submit",
        };
        f.write_str(s)
    }
}

/// One input: an actor doing something to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    /// The session or lobby the input targets.
    pub session: SessionId,
    /// Who sent it.
    pub actor: ActorId,
    /// What they did.
    pub kind: EventKind,
}

impl InputEvent {
    /// Build an event.
    pub fn new(session: SessionId, actor: ActorId, kind: EventKind) -> Self {
        Self {
            session,
            actor,
            kind,
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} by {}", self.kind, self.session, self.actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keywords() {
        assert_eq!(EventKind::parse("ADD"), Some(EventKind::AddDie));
        assert_eq!(EventKind::parse("add_die"), Some(EventKind::AddDie));
        assert_eq!(EventKind::parse("submit"), Some(EventKind::Submit));
        assert_eq!(EventKind::parse("dance"), None);
    }

    #[test]
    fn display() {
        let e = InputEvent::new(SessionId(3), ActorId(9), EventKind::Reroll);
        assert_eq!(e.to_string(), "reroll on #3 by @9");
    }
}
