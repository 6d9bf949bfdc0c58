//! The single dispatch point.
//!
//! [`Engine`] owns the registry, the RNG and the collaborators. Each input
//! goes through [`SessionRegistry::apply`], which commits the new state and
//! returns effects; the engine then runs those effects in order. A failing
//! display or acknowledger is logged and skipped, never retried, and never
//! rolls back the transition.

use outpost_core::{ActorId, SessionId, find_action};
use outpost_mechanics::roll_pool;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::effect::Effect;
use crate::error::{RollError, RollResult};
use crate::event::InputEvent;
use crate::ports::{Acknowledger, ActionResolver, CharacterStore, SessionDisplay, price_budget};
use crate::registry::{Outcome, SessionRegistry, StepContext};
use crate::view::ResolutionReport;

/// Roll session engine wired to its collaborators.
#[derive(Debug)]
pub struct Engine<S, R, D, A> {
    config: EngineConfig,
    registry: SessionRegistry,
    rng: StdRng,
    store: S,
    resolver: R,
    display: D,
    acks: A,
}

impl<S, R, D, A> Engine<S, R, D, A>
where
    S: CharacterStore,
    R: ActionResolver,
    D: SessionDisplay,
    A: Acknowledger,
{
    /// Build an engine with an empty registry.
    pub fn new(config: EngineConfig, store: S, resolver: R, display: D, acks: A) -> Self {
        let rng = config.rng();
        Self {
            config,
            registry: SessionRegistry::new(),
            rng,
            store,
            resolver,
            display,
            acks,
        }
    }

    /// Open a solo roll for `actor`.
    ///
    /// Rejected before anything is created if the actor already acted
    /// today, has no survivor, or names an unknown action. The budget is the
    /// survivor's skill plus equipment bonus for the action's skill.
    pub fn start_solo(&mut self, actor: ActorId, action_key: &str) -> RollResult<SessionId> {
        if self.store.has_done_daily_action(actor) {
            return Err(RollError::DailyActionSpent(actor));
        }
        if !self.store.has_character(actor) {
            return Err(RollError::NoCharacter(actor));
        }
        let action =
            find_action(action_key).ok_or_else(|| RollError::UnknownAction(action_key.to_string()))?;

        let budget = price_budget(&self.store, actor, action.skill);
        let pool = roll_pool(self.config.base_dice, &mut self.rng);
        let id = self.registry.open_solo(actor, action, budget, pool);
        self.render(id);
        Ok(id)
    }

    /// Open a group lobby led by `leader`.
    pub fn open_lobby(&mut self, leader: ActorId, action_key: &str) -> RollResult<SessionId> {
        let action =
            find_action(action_key).ok_or_else(|| RollError::UnknownAction(action_key.to_string()))?;
        if !self.store.has_character(leader) {
            return Err(RollError::NoCharacter(leader));
        }
        if self.store.has_done_daily_action(leader) {
            return Err(RollError::DailyActionSpent(leader));
        }

        let id = self.registry.open_lobby(leader, action);
        self.render(id);
        Ok(id)
    }

    /// Route one input to its session and run the resulting effects.
    pub fn dispatch(&mut self, event: InputEvent) -> Outcome {
        let mut ctx = StepContext {
            rng: &mut self.rng,
            store: &self.store,
            config: &self.config,
        };
        let (outcome, effects) = self.registry.apply(&event, &mut ctx);
        debug!(%event, ?outcome, effects = effects.len(), "dispatched");
        for effect in effects {
            self.execute(effect);
        }
        outcome
    }

    fn render(&mut self, id: SessionId) {
        if let Some(view) = self.registry.view(id) {
            self.execute(Effect::Render(view));
        }
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::Render(view) => {
                if let Err(e) = self.display.render(&view) {
                    warn!(session = %view.session(), error = %e, "render failed");
                }
            }
            Effect::Acknowledge(event) => {
                if let Err(e) = self.acks.consume(&event) {
                    warn!(%event, error = %e, "acknowledgment failed");
                }
            }
            Effect::Resolve(resolution) => {
                let description = self.resolver.resolve(&resolution);
                let report = ResolutionReport::new(resolution, description);
                if let Err(e) = self.display.report(&report) {
                    warn!(session = %report.session, error = %e, "report failed");
                }
            }
            Effect::MarkDailyAction(actor) => self.store.set_daily_action(actor),
        }
    }

    /// Live sessions.
    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Engine settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The character store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the character store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The action resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// The display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The acknowledger.
    pub fn acks(&self) -> &A {
        &self.acks
    }
}
