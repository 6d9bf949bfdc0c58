pub mod actions;
pub mod backgrounds;
pub mod play;

use outpost_core::{ActorId, SessionId};

/// Parse `@3` or `3` as an actor.
pub fn parse_actor(s: &str) -> Result<ActorId, String> {
    s.trim_start_matches('@')
        .parse::<u64>()
        .map(ActorId)
        .map_err(|_| format!("not an actor id: '{s}'"))
}

/// Parse `#3` or `3` as a session.
pub fn parse_session(s: &str) -> Result<SessionId, String> {
    s.trim_start_matches('#')
        .parse::<u64>()
        .map(SessionId)
        .map_err(|_| format!("not a session id: '{s}'"))
}
