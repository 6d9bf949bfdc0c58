//! Core types for Outpost: survivors, skills, actions, and equipment.
//!
//! This crate holds the static catalogs (actions, backgrounds, items) and the
//! keyed records the roll engine reads from: the survivor [`Roster`], the
//! camp [`Stash`], and the [`DailyActionGate`]. Nothing in here knows about
//! dice or live sessions.

/// The action catalog survivors can attempt.
pub mod action;
/// Survivor backgrounds with starting skills and equipment.
pub mod background;
/// Error types used throughout the crate.
pub mod error;
/// Per-actor gate recording who already took their daily action.
pub mod gate;
/// Actor and session identifiers.
pub mod id;
/// Item definitions, inventory entries, and equipment bonuses.
pub mod item;
/// The in-memory survivor roster.
pub mod roster;
/// Skills survivors train and actions test.
pub mod skill;
/// The camp's shared stash of resources.
pub mod stash;
/// Survivor records.
pub mod survivor;

/// Re-export catalog lookups.
pub use action::{ACTIONS, ActionDef, find_action};
/// Re-export background types.
pub use background::{BACKGROUNDS, Background, find_background};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the daily action gate.
pub use gate::DailyActionGate;
/// Re-export identifiers.
pub use id::{ActorId, SessionId};
/// Re-export item types.
pub use item::{ITEMS, InventoryItem, ItemDef, ItemKind, find_item};
/// Re-export the roster.
pub use roster::Roster;
/// Re-export skills.
pub use skill::Skill;
/// Re-export the stash.
pub use stash::Stash;
/// Re-export survivors.
pub use survivor::{ALLOCATION_CAP, STARTING_POINTS, Survivor};
