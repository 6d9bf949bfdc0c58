//! Live sessions keyed by id, and the pure transition step.
//!
//! [`SessionRegistry::apply`] routes an input to whichever session owns its
//! id, applies it, and returns the effects to run. It performs no I/O, so
//! the engine can commit the new state before any collaborator is called.

use std::collections::HashMap;

use outpost_core::{ActionDef, ActorId, SessionId};
use outpost_mechanics::{DicePool, SkillBudget, roll_pool};
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::effect::Effect;
use crate::event::InputEvent;
use crate::group::GroupRollSession;
use crate::lobby::{GroupLobby, LaunchRoster, LobbyStep};
use crate::ports::CharacterStore;
use crate::solo::SoloRollSession;
use crate::view::SessionView;

/// Which registry a live id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// A lobby waiting for launch.
    Lobby,
    /// A launched group roll.
    Group,
    /// A solo roll.
    Solo,
}

/// What happened to one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No live session has the event's id.
    Unknown,
    /// The session ignores this actor.
    Ignored,
    /// The input was valid but changed nothing.
    Unchanged,
    /// The session state changed.
    Accepted,
    /// The session resolved and was retired.
    Resolved,
    /// The lobby launched into the group roll with this id.
    Launched(SessionId),
}

/// Everything a transition may read besides the session itself.
pub struct StepContext<'a> {
    /// Dice source.
    pub rng: &'a mut StdRng,
    /// Survivor data used to price budgets at launch.
    pub store: &'a dyn CharacterStore,
    /// Engine settings.
    pub config: &'a EngineConfig,
}

/// Owns every live lobby, group roll and solo roll.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    lobbies: HashMap<SessionId, GroupLobby>,
    groups: HashMap<SessionId, GroupRollSession>,
    solos: HashMap<SessionId, SoloRollSession>,
    last_id: u64,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> SessionId {
        self.last_id += 1;
        SessionId(self.last_id)
    }

    /// Register a solo roll and return its id.
    pub fn open_solo(
        &mut self,
        owner: ActorId,
        action: &'static ActionDef,
        budget: SkillBudget,
        pool: DicePool,
    ) -> SessionId {
        let id = self.next_id();
        info!(session = %id, %owner, action = action.key, pool = %pool, %budget, "solo roll opened");
        self.solos
            .insert(id, SoloRollSession::new(id, owner, action, budget, pool));
        id
    }

    /// Register a lobby and return its id.
    pub fn open_lobby(&mut self, leader: ActorId, action: &'static ActionDef) -> SessionId {
        let id = self.next_id();
        info!(lobby = %id, %leader, action = action.key, "lobby opened");
        self.lobbies.insert(id, GroupLobby::new(id, leader, action));
        id
    }

    /// Register a group roll and return its id.
    pub fn open_group(
        &mut self,
        action: &'static ActionDef,
        members: LaunchRoster,
        pool: DicePool,
    ) -> SessionId {
        let id = self.next_id();
        info!(session = %id, action = action.key, members = members.len(), pool = %pool, "group roll opened");
        self.groups
            .insert(id, GroupRollSession::new(id, action, members, pool));
        id
    }

    /// Which registry holds `id`, checking lobbies, then groups, then solos.
    pub fn kind_of(&self, id: SessionId) -> Option<SessionKind> {
        if self.lobbies.contains_key(&id) {
            Some(SessionKind::Lobby)
        } else if self.groups.contains_key(&id) {
            Some(SessionKind::Group)
        } else if self.solos.contains_key(&id) {
            Some(SessionKind::Solo)
        } else {
            None
        }
    }

    /// A live solo roll.
    pub fn solo(&self, id: SessionId) -> Option<&SoloRollSession> {
        self.solos.get(&id)
    }

    /// A live lobby.
    pub fn lobby(&self, id: SessionId) -> Option<&GroupLobby> {
        self.lobbies.get(&id)
    }

    /// A live group roll.
    pub fn group(&self, id: SessionId) -> Option<&GroupRollSession> {
        self.groups.get(&id)
    }

    /// Current view of any live session.
    pub fn view(&self, id: SessionId) -> Option<SessionView> {
        match self.kind_of(id)? {
            SessionKind::Lobby => self.lobbies.get(&id).map(GroupLobby::view),
            SessionKind::Group => self.groups.get(&id).map(GroupRollSession::view),
            SessionKind::Solo => self.solos.get(&id).map(SoloRollSession::view),
        }
    }

    /// Ids of every live session, sorted.
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self
            .lobbies
            .keys()
            .chain(self.groups.keys())
            .chain(self.solos.keys())
            .copied()
            .collect();
        ids.sort();
        ids
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.lobbies.len() + self.groups.len() + self.solos.len()
    }

    /// Returns true if nothing is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply one input to the session that owns its id.
    ///
    /// Resolved sessions and launched lobbies are removed before this
    /// returns, so their ids read as unknown from then on.
    pub fn apply(&mut self, event: &InputEvent, ctx: &mut StepContext<'_>) -> (Outcome, Vec<Effect>) {
        let mut effects = Vec::new();
        let outcome = match self.kind_of(event.session) {
            None => {
                debug!(%event, "no live session");
                Outcome::Unknown
            }
            Some(SessionKind::Lobby) => self.apply_lobby(event, ctx, &mut effects),
            Some(SessionKind::Group) => {
                let outcome = match self.groups.get_mut(&event.session) {
                    Some(group) => group.apply(event, &mut *ctx.rng, &mut effects),
                    None => Outcome::Unknown,
                };
                if outcome == Outcome::Resolved {
                    self.groups.remove(&event.session);
                    info!(session = %event.session, "group roll resolved");
                }
                outcome
            }
            Some(SessionKind::Solo) => {
                let outcome = match self.solos.get_mut(&event.session) {
                    Some(solo) => {
                        solo.apply(event, &mut *ctx.rng, ctx.config.acknowledge_rejected, &mut effects)
                    }
                    None => Outcome::Unknown,
                };
                if outcome == Outcome::Resolved {
                    self.solos.remove(&event.session);
                    info!(session = %event.session, "solo roll resolved");
                }
                outcome
            }
        };
        (outcome, effects)
    }

    fn apply_lobby(
        &mut self,
        event: &InputEvent,
        ctx: &mut StepContext<'_>,
        effects: &mut Vec<Effect>,
    ) -> Outcome {
        let Some(lobby) = self.lobbies.get_mut(&event.session) else {
            return Outcome::Unknown;
        };
        match lobby.apply(event, ctx.store, effects) {
            LobbyStep::Stay(outcome) => outcome,
            LobbyStep::Launch(roster) => {
                let action = lobby.action();
                self.lobbies.remove(&event.session);
                let members = u32::try_from(roster.len()).unwrap_or(u32::MAX);
                let dice = ctx.config.base_dice.saturating_mul(members);
                let pool = roll_pool(dice, &mut *ctx.rng);
                let id = self.open_group(action, roster, pool);
                info!(lobby = %event.session, session = %id, "lobby launched");
                if let Some(group) = self.groups.get(&id) {
                    effects.insert(effects.len().saturating_sub(1), Effect::Render(group.view()));
                }
                Outcome::Launched(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use outpost_core::{Roster, find_action};
    use rand::SeedableRng;

    fn roster() -> Roster {
        let mut roster = Roster::new();
        roster.create(ActorId(1), "Mara", "Medic").unwrap();
        roster.create(ActorId(2), "Jun", "Medic").unwrap();
        roster
    }

    fn step(reg: &mut SessionRegistry, store: &Roster, event: InputEvent) -> (Outcome, Vec<Effect>) {
        let mut rng = StdRng::seed_from_u64(3);
        let config = EngineConfig::default();
        let mut ctx = StepContext {
            rng: &mut rng,
            store,
            config: &config,
        };
        reg.apply(&event, &mut ctx)
    }

    #[test]
    fn ids_are_unique_across_kinds() {
        let mut reg = SessionRegistry::new();
        let heal = find_action("heal").unwrap();
        let a = reg.open_lobby(ActorId(1), heal);
        let b = reg.open_solo(ActorId(2), heal, SkillBudget::new(3), DicePool::from_values([1, 2, 3]));
        let c = reg.open_group(heal, vec![(ActorId(3), SkillBudget::new(1))], DicePool::new());
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(reg.kind_of(a), Some(SessionKind::Lobby));
        assert_eq!(reg.kind_of(b), Some(SessionKind::Solo));
        assert_eq!(reg.kind_of(c), Some(SessionKind::Group));
        assert_eq!(reg.ids(), vec![a, b, c]);
    }

    #[test]
    fn unknown_id_yields_no_effects() {
        let store = roster();
        let mut reg = SessionRegistry::new();
        let (outcome, effects) = step(&mut reg, &store, InputEvent::new(SessionId(42), ActorId(1), EventKind::Submit));
        assert_eq!(outcome, Outcome::Unknown);
        assert!(effects.is_empty());
    }

    #[test]
    fn resolved_solo_is_retired() {
        let store = roster();
        let mut reg = SessionRegistry::new();
        let id = reg.open_solo(
            ActorId(1),
            find_action("heal").unwrap(),
            SkillBudget::new(5),
            DicePool::from_values([4, 4, 4]),
        );
        let (outcome, _) = step(&mut reg, &store, InputEvent::new(id, ActorId(1), EventKind::Submit));
        assert_eq!(outcome, Outcome::Resolved);
        assert!(reg.is_empty());
        let (outcome, _) = step(&mut reg, &store, InputEvent::new(id, ActorId(1), EventKind::Submit));
        assert_eq!(outcome, Outcome::Unknown);
    }

    #[test]
    fn launch_replaces_lobby_with_group() {
        let store = roster();
        let mut reg = SessionRegistry::new();
        let lobby = reg.open_lobby(ActorId(1), find_action("heal").unwrap());
        step(&mut reg, &store, InputEvent::new(lobby, ActorId(2), EventKind::Join));

        let (outcome, effects) = step(&mut reg, &store, InputEvent::new(lobby, ActorId(1), EventKind::Launch));
        let Outcome::Launched(group) = outcome else {
            panic!("expected launch, got {outcome:?}");
        };
        assert_ne!(group, lobby);
        assert_eq!(reg.kind_of(lobby), None);
        assert_eq!(reg.len(), 1);

        let session = reg.group(group).unwrap();
        assert_eq!(session.pool().len(), 6);
        assert_eq!(session.budget(ActorId(1)), Some(SkillBudget::new(5)));
        assert_eq!(session.budget(ActorId(2)), Some(SkillBudget::new(5)));

        assert_eq!(effects.len(), 2);
        assert!(matches!(&effects[0], Effect::Render(SessionView::Group(v)) if v.session == group));
        assert!(matches!(effects[1], Effect::Acknowledge(_)));
    }

    #[test]
    fn group_resolves_once_and_is_removed() {
        let store = roster();
        let mut reg = SessionRegistry::new();
        let heal = find_action("heal").unwrap();
        let id = reg.open_group(
            heal,
            vec![(ActorId(1), SkillBudget::new(5)), (ActorId(2), SkillBudget::new(5))],
            DicePool::from_values([4, 5, 6, 1, 2, 3]),
        );
        let (first, _) = step(&mut reg, &store, InputEvent::new(id, ActorId(1), EventKind::Submit));
        assert_eq!(first, Outcome::Accepted);
        let (second, effects) = step(&mut reg, &store, InputEvent::new(id, ActorId(2), EventKind::Submit));
        assert_eq!(second, Outcome::Resolved);
        let resolves = effects.iter().filter(|e| matches!(e, Effect::Resolve(_))).count();
        assert_eq!(resolves, 1);
        assert_eq!(reg.kind_of(id), None);
    }

    #[test]
    fn view_serializes_with_kind_tag() {
        let mut reg = SessionRegistry::new();
        let id = reg.open_lobby(ActorId(1), find_action("heal").unwrap());
        let json = serde_json::to_value(reg.view(id).unwrap()).unwrap();
        assert_eq!(json["kind"], "lobby");
        assert_eq!(json["members"].as_array().map(Vec::len), Some(1));
    }
}
