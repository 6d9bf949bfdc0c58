//! Thread-safe handle to an [`Engine`].
//!
//! Every call takes the same lock, so inputs from concurrent sources are
//! processed one at a time and a budget check can never race its debit.

use std::sync::{Arc, Mutex, MutexGuard};

use outpost_core::{ActorId, SessionId};

use crate::engine::Engine;
use crate::error::{RollError, RollResult};
use crate::event::InputEvent;
use crate::ports::{Acknowledger, ActionResolver, CharacterStore, SessionDisplay};
use crate::registry::Outcome;

/// Cloneable, lock-guarded engine.
#[derive(Debug)]
pub struct SharedEngine<S, R, D, A> {
    inner: Arc<Mutex<Engine<S, R, D, A>>>,
}

impl<S, R, D, A> Clone for SharedEngine<S, R, D, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, R, D, A> SharedEngine<S, R, D, A>
where
    S: CharacterStore,
    R: ActionResolver,
    D: SessionDisplay,
    A: Acknowledger,
{
    /// Wrap an engine.
    pub fn new(engine: Engine<S, R, D, A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> RollResult<MutexGuard<'_, Engine<S, R, D, A>>> {
        self.inner.lock().map_err(|_| RollError::Poisoned)
    }

    /// See [`Engine::dispatch`].
    pub fn dispatch(&self, event: InputEvent) -> RollResult<Outcome> {
        Ok(self.lock()?.dispatch(event))
    }

    /// See [`Engine::start_solo`].
    pub fn start_solo(&self, actor: ActorId, action_key: &str) -> RollResult<SessionId> {
        self.lock()?.start_solo(actor, action_key)
    }

    /// See [`Engine::open_lobby`].
    pub fn open_lobby(&self, leader: ActorId, action_key: &str) -> RollResult<SessionId> {
        self.lock()?.open_lobby(leader, action_key)
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut Engine<S, R, D, A>) -> T) -> RollResult<T> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::testing::engine;

    #[test]
    fn concurrent_rerolls_never_overspend() {
        let shared = SharedEngine::new(engine());
        // Scavenger: Scavenging 2 + Crowbar 1.
        let id = shared.start_solo(ActorId(4), "scavenge").unwrap();

        let outcomes: Vec<Outcome> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..10)
                .map(|_| {
                    let shared = shared.clone();
                    scope.spawn(move || {
                        shared
                            .dispatch(InputEvent::new(id, ActorId(4), EventKind::Reroll))
                            .unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let accepted = outcomes.iter().filter(|o| **o == Outcome::Accepted).count();
        assert_eq!(accepted, 3);
        shared
            .with(|e| {
                let solo = e.registry().solo(id).unwrap();
                assert_eq!(solo.budget().remaining(), 0);
                assert_eq!(solo.history().len(), 3);
                assert_eq!(e.acks().consumed.len(), 10);
            })
            .unwrap();
    }

    #[test]
    fn clones_share_state() {
        let a = SharedEngine::new(engine());
        let b = a.clone();
        let id = a.open_lobby(ActorId(1), "heal").unwrap();
        assert_eq!(
            b.dispatch(InputEvent::new(id, ActorId(2), EventKind::Join)).unwrap(),
            Outcome::Accepted
        );
        assert_eq!(a.with(|e| e.registry().lobby(id).map(|l| l.member_count())).unwrap(), Some(2));
    }
}
