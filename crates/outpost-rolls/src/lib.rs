//! Roll session engine for Outpost.
//!
//! A skill check is not a single roll. The actor opens a session, then
//! refines the pool with discrete, budget-limited inputs (add a die, reroll
//! the lowest die) until they submit. This crate owns every live session:
//!
//! - [`SoloRollSession`]: one actor refining their own pool.
//! - [`GroupLobby`]: actors gathering before a group action; the leader
//!   launches it.
//! - [`GroupRollSession`]: one shared pool refined by every member, each
//!   paying from their own budget, resolved once every member has submitted.
//!
//! The [`SessionRegistry`] applies an [`InputEvent`] to whichever session
//! owns its id and returns the resulting [`Effect`]s without performing any
//! I/O. The [`Engine`] runs those effects against the collaborator traits in
//! [`ports`] (character store, action resolver, display, acknowledgment).

pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod event;
pub mod group;
pub mod lobby;
pub mod ports;
pub mod registry;
pub mod shared;
pub mod solo;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use config::EngineConfig;
pub use effect::{Effect, Participants, Resolution};
pub use engine::Engine;
pub use error::{RollError, RollResult};
pub use event::{EventKind, InputEvent};
pub use group::GroupRollSession;
pub use lobby::{GroupLobby, LobbyStatus};
pub use ports::{Acknowledger, ActionResolver, CharacterStore, CollabError, SessionDisplay};
pub use registry::{Outcome, SessionKind, SessionRegistry};
pub use shared::SharedEngine;
pub use solo::SoloRollSession;
pub use view::{GroupView, LobbyView, MemberView, ResolutionReport, SessionView, SoloView};
