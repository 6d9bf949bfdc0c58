//! Recording collaborators for engine tests.

use outpost_core::{ActorId, Roster};

use crate::config::EngineConfig;
use crate::effect::Resolution;
use crate::engine::Engine;
use crate::event::InputEvent;
use crate::ports::{Acknowledger, ActionResolver, CollabError, SessionDisplay};
use crate::view::{ResolutionReport, SessionView};

#[derive(Debug, Default)]
pub(crate) struct RecordingResolver {
    pub resolved: Vec<Resolution>,
}

impl ActionResolver for RecordingResolver {
    fn resolve(&mut self, resolution: &Resolution) -> String {
        self.resolved.push(resolution.clone());
        format!("{} complete", resolution.action.name)
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingDisplay {
    pub views: Vec<SessionView>,
    pub reports: Vec<ResolutionReport>,
    pub fail: bool,
}

impl SessionDisplay for RecordingDisplay {
    fn render(&mut self, view: &SessionView) -> Result<(), CollabError> {
        if self.fail {
            return Err(CollabError::Display("screen unplugged".into()));
        }
        self.views.push(view.clone());
        Ok(())
    }

    fn report(&mut self, report: &ResolutionReport) -> Result<(), CollabError> {
        if self.fail {
            return Err(CollabError::Display("screen unplugged".into()));
        }
        self.reports.push(report.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingAcks {
    pub consumed: Vec<InputEvent>,
    pub fail: bool,
}

impl Acknowledger for RecordingAcks {
    fn consume(&mut self, event: &InputEvent) -> Result<(), CollabError> {
        if self.fail {
            return Err(CollabError::Acknowledge("input already gone".into()));
        }
        self.consumed.push(*event);
        Ok(())
    }
}

pub(crate) type TestEngine = Engine<Roster, RecordingResolver, RecordingDisplay, RecordingAcks>;

/// Two Medics (@1, @2), a Soldier (@3) and a Scavenger (@4).
pub(crate) fn camp() -> Roster {
    let mut roster = Roster::new();
    for (id, name, background) in [
        (1, "Mara", "Medic"),
        (2, "Jun", "Medic"),
        (3, "Ash", "Soldier"),
        (4, "Pike", "Scavenger"),
    ] {
        roster
            .create(ActorId(id), name, background)
            .expect("valid background");
    }
    roster
}

pub(crate) fn engine_with(config: EngineConfig) -> TestEngine {
    Engine::new(
        config,
        camp(),
        RecordingResolver::default(),
        RecordingDisplay::default(),
        RecordingAcks::default(),
    )
}

pub(crate) fn engine() -> TestEngine {
    engine_with(EngineConfig::default().with_seed(42))
}
