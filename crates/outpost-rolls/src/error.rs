//! Error types for the roll session engine.

use outpost_core::ActorId;
use thiserror::Error;

/// Result type for engine operations.
pub type RollResult<T> = Result<T, RollError>;

/// Reasons a session could not be started.
///
/// Events sent to live sessions never fail: invalid or unaffordable inputs
/// are reported through [`crate::Outcome`] instead.
#[derive(Debug, Error)]
pub enum RollError {
    /// The actor has no survivor.
    #[error("{0} needs to create a survivor first")]
    NoCharacter(ActorId),

    /// The action key is not in the catalog.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The actor already completed today's action.
    #[error("{0} already did an action today")]
    DailyActionSpent(ActorId),

    /// Another thread panicked while holding the shared engine.
    #[error("engine lock poisoned")]
    Poisoned,
}
