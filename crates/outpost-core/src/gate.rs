use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::id::ActorId;

/// Records which actors have spent their daily action.
///
/// Set-once: there is no reset. Whoever owns the gate decides if and when a
/// new day starts by replacing it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyActionGate {
    acted: HashSet<ActorId>,
}

impl DailyActionGate {
    /// Create an empty gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the actor already completed today's action.
    pub fn has_acted(&self, actor: ActorId) -> bool {
        self.acted.contains(&actor)
    }

    /// Mark the actor as done. Returns false if they were already marked.
    pub fn mark(&mut self, actor: ActorId) -> bool {
        self.acted.insert(actor)
    }

    /// Number of actors marked.
    pub fn len(&self) -> usize {
        self.acted.len()
    }

    /// Returns true if nobody has acted.
    pub fn is_empty(&self) -> bool {
        self.acted.is_empty()
    }
}
