use crate::id::ActorId;
use crate::skill::Skill;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating survivors and their gear.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The actor already has a survivor on the roster.
    #[error("{0} already has a survivor")]
    DuplicateSurvivor(ActorId),

    /// No survivor is registered for the actor.
    #[error("{0} has no survivor")]
    SurvivorNotFound(ActorId),

    /// The named background does not exist.
    #[error("unknown background: \"{0}\"")]
    UnknownBackground(String),

    /// The survivor does not carry an unequipped item with this name.
    #[error("item not held: \"{0}\"")]
    ItemNotHeld(String),

    /// The survivor has no equipped item with this name.
    #[error("item not equipped: \"{0}\"")]
    ItemNotEquipped(String),

    /// Fewer units are available than were asked for.
    #[error("not enough \"{item}\": have {have}, wanted {wanted}")]
    NotEnoughItems {
        /// Item name as requested.
        item: String,
        /// Units available.
        have: u32,
        /// Units requested.
        wanted: u32,
    },

    /// Transfers must move at least one unit.
    #[error("amount must be at least 1")]
    ZeroAmount,

    /// Starting skill points can only be spent once.
    #[error("skill points already allocated")]
    AlreadyAllocated,

    /// The allocation asks for more points than the survivor has.
    #[error("only {available} points to spend, tried to spend {requested}")]
    NotEnoughPoints {
        /// Unallocated points.
        available: u32,
        /// Points in the request.
        requested: u32,
    },

    /// A single skill was given more than the creation cap.
    #[error("cannot assign more than {cap} points to {skill} at creation")]
    AllocationCap {
        /// The over-allocated skill.
        skill: Skill,
        /// The per-skill cap.
        cap: u32,
    },
}
