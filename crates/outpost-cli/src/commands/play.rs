use std::io::{self, BufRead, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use outpost_core::{ActorId, Skill, find_action};
use outpost_rolls::{Engine, EngineConfig, EventKind, InputEvent, Outcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use super::{parse_actor, parse_session};
use crate::camp::{self, CampResolver, CampStore, SharedCamp};
use crate::render::{ConsoleAcks, TerminalDisplay};

const HELP: &str = "\
  survivor <actor> <name> <background>   create a survivor
  allocate <actor> <skill>=<n> ...       spend starting skill points (once)
  equip|unequip <actor> <item>           change gear
  give <from> <to> <item> [amount]       hand items to another survivor
  store|take <actor> <item> [amount]     move items to or from the stash
  do <actor> <action>                    start a solo roll
  group <actor> <action>                 open a group lobby
  join|launch <lobby> <actor>            lobby inputs
  add|reroll|submit <session> <actor>    roll inputs
  actions | backgrounds                  list catalogs
  sheet <actor> | stash                  show survivor or camp stash
  help | quit";

pub struct PlayOptions {
    pub seed: Option<u64>,
    pub base_dice: u32,
    pub strict_acks: bool,
    pub json: bool,
}

/// What the console should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this (may be empty) and keep reading.
    Text(String),
    /// Print this and close the console.
    Quit(String),
}

impl Reply {
    fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

type CampEngine = Engine<CampStore, CampResolver, TerminalDisplay, ConsoleAcks>;

/// Interactive camp: the roll engine plus commands that edit survivors.
pub struct Console {
    camp: SharedCamp,
    engine: CampEngine,
}

impl Console {
    pub fn new(options: &PlayOptions) -> Self {
        let mut config = EngineConfig::default()
            .with_base_dice(options.base_dice)
            .with_rejected_acks(!options.strict_acks);
        if let Some(seed) = options.seed {
            config = config.with_seed(seed);
        }
        let loot_rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_os_rng(),
        };

        let camp = SharedCamp::default();
        let engine = Engine::new(
            config,
            CampStore(camp.clone()),
            CampResolver::new(camp.clone(), loot_rng),
            TerminalDisplay::new(options.json),
            ConsoleAcks::default(),
        );
        Self { camp, engine }
    }

    /// Run one console line.
    pub fn process(&mut self, input: &str) -> Result<Reply, String> {
        let words: Vec<&str> = input.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            return Ok(Reply::text(""));
        };

        let text = match command.to_lowercase().as_str() {
            "quit" | "q" => {
                info!(inputs = self.engine.acks().consumed(), "camp closed");
                return Ok(Reply::Quit("  Camp closed.".to_string()));
            }
            "help" | "?" => HELP.to_string(),
            "actions" => super::actions::table().to_string(),
            "backgrounds" => super::backgrounds::table().to_string(),
            "survivor" => self.create_survivor(args)?,
            "allocate" => self.allocate(args)?,
            "equip" => self.equip(args, true)?,
            "unequip" => self.equip(args, false)?,
            "give" => self.give(args)?,
            "store" => self.store(args)?,
            "take" => self.take(args)?,
            "sheet" => self.sheet(args)?,
            "stash" => self.stash(),
            "do" => {
                let (actor, action) = actor_and_action(args, "do")?;
                let id = self
                    .engine
                    .start_solo(actor, action)
                    .map_err(|e| e.to_string())?;
                format!("  Roll {id} open. add/reroll/submit {id} {actor}")
            }
            "group" => {
                let (actor, action) = actor_and_action(args, "group")?;
                let id = self
                    .engine
                    .open_lobby(actor, action)
                    .map_err(|e| e.to_string())?;
                format!("  Lobby {id} open. join {id} <actor>, then launch {id} {actor}")
            }
            other => match EventKind::parse(other) {
                Some(kind) => self.send(kind, args)?,
                None => return Err(format!("unknown command '{other}'. Type 'help'.")),
            },
        };
        Ok(Reply::Text(text))
    }

    fn send(&mut self, kind: EventKind, args: &[&str]) -> Result<String, String> {
        let [session, actor] = args else {
            return Err(format!("usage: {kind} <session> <actor>"));
        };
        let session = parse_session(session)?;
        let actor = parse_actor(actor)?;
        let outcome = self.engine.dispatch(InputEvent::new(session, actor, kind));
        Ok(match outcome {
            Outcome::Unknown => format!("  No live session {session}."),
            Outcome::Ignored => format!("  {actor} cannot act on {session}."),
            Outcome::Unchanged => "  Nothing changed.".to_string(),
            Outcome::Launched(id) => format!("  Group roll {id} started."),
            Outcome::Accepted | Outcome::Resolved => String::new(),
        })
    }

    fn create_survivor(&mut self, args: &[&str]) -> Result<String, String> {
        let [actor, name, background] = args else {
            return Err("usage: survivor <actor> <name> <background>".into());
        };
        let actor = parse_actor(actor)?;
        let mut camp = camp::lock(&self.camp);
        let survivor = camp
            .roster
            .create(actor, name, background)
            .map_err(|e| e.to_string())?;
        Ok(format!(
            "  {} the {} joins the camp as {actor}.",
            survivor.name.bold(),
            survivor.background
        ))
    }

    fn allocate(&mut self, args: &[&str]) -> Result<String, String> {
        let Some((actor, specs)) = args.split_first() else {
            return Err("usage: allocate <actor> <skill>=<n> ...".into());
        };
        let actor = parse_actor(actor)?;
        let points = specs
            .iter()
            .map(|spec| parse_points(spec))
            .collect::<Result<Vec<_>, _>>()?;
        let mut camp = camp::lock(&self.camp);
        camp.roster
            .allocate(actor, &points)
            .map_err(|e| e.to_string())?;
        let left = camp
            .roster
            .get(actor)
            .map(|s| s.unallocated_points)
            .unwrap_or(0);
        Ok(format!("  Skills allocated for {actor}. {left} points left unspent."))
    }

    fn equip(&mut self, args: &[&str], equip: bool) -> Result<String, String> {
        let usage = if equip {
            "usage: equip <actor> <item>"
        } else {
            "usage: unequip <actor> <item>"
        };
        let Some((actor, item)) = args.split_first() else {
            return Err(usage.into());
        };
        if item.is_empty() {
            return Err(usage.into());
        }
        let actor = parse_actor(actor)?;
        let item = item.join(" ");
        let mut camp = camp::lock(&self.camp);
        let survivor = camp.roster.get_mut(actor).map_err(|e| e.to_string())?;
        if equip {
            survivor.equip(&item).map_err(|e| e.to_string())?;
            Ok(format!("  {} equips {item}.", survivor.name))
        } else {
            survivor.unequip(&item).map_err(|e| e.to_string())?;
            Ok(format!("  {} puts away {item}.", survivor.name))
        }
    }

    fn give(&mut self, args: &[&str]) -> Result<String, String> {
        let [from, to, rest @ ..] = args else {
            return Err("usage: give <from> <to> <item> [amount]".into());
        };
        let (from, to) = (parse_actor(from)?, parse_actor(to)?);
        let (item, amount) = item_and_amount(rest, "give <from> <to>")?;
        let name = camp::lock(&self.camp)
            .roster
            .give(from, to, &item, amount)
            .map_err(|e| e.to_string())?;
        Ok(format!("  {from} gave {to} {amount}x {name}."))
    }

    fn store(&mut self, args: &[&str]) -> Result<String, String> {
        let Some((actor, rest)) = args.split_first() else {
            return Err("usage: store <actor> <item> [amount]".into());
        };
        let actor = parse_actor(actor)?;
        let (item, amount) = item_and_amount(rest, "store <actor>")?;
        let mut camp = camp::lock(&self.camp);
        let camp = &mut *camp;
        let name = camp
            .roster
            .store(actor, &mut camp.stash, &item, amount)
            .map_err(|e| e.to_string())?;
        Ok(format!(
            "  Stored {amount}x {name}. The stash holds {}.",
            camp.stash.count(&name)
        ))
    }

    fn take(&mut self, args: &[&str]) -> Result<String, String> {
        let Some((actor, rest)) = args.split_first() else {
            return Err("usage: take <actor> <item> [amount]".into());
        };
        let actor = parse_actor(actor)?;
        let (item, amount) = item_and_amount(rest, "take <actor>")?;
        let mut camp = camp::lock(&self.camp);
        let camp = &mut *camp;
        let name = camp
            .roster
            .take(actor, &mut camp.stash, &item, amount)
            .map_err(|e| e.to_string())?;
        Ok(format!(
            "  {actor} took {amount}x {name}. {} left in the stash.",
            camp.stash.count(&name)
        ))
    }

    fn sheet(&self, args: &[&str]) -> Result<String, String> {
        let [actor] = args else {
            return Err("usage: sheet <actor>".into());
        };
        let actor = parse_actor(actor)?;
        let camp = camp::lock(&self.camp);
        let survivor = camp
            .roster
            .get(actor)
            .ok_or_else(|| format!("{actor} has no survivor"))?;

        let mut skills = Table::new();
        skills.set_content_arrangement(ContentArrangement::Dynamic);
        skills.set_header(vec!["Skill", "Trained", "Gear", "Budget"]);
        for skill in Skill::ALL {
            skills.add_row(vec![
                skill.to_string(),
                survivor.skill(skill).to_string(),
                survivor.equipment_bonus(skill).to_string(),
                survivor.skill_total(skill).to_string(),
            ]);
        }

        let inventory = survivor
            .inventory_counts()
            .into_iter()
            .map(|(name, equipped, count)| {
                let tag = if equipped { " (E)" } else { "" };
                if count > 1 {
                    format!("{count}x {name}{tag}")
                } else {
                    format!("{name}{tag}")
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        let acted = if camp.roster.daily().has_acted(actor) {
            "done"
        } else {
            "available"
        };

        Ok(format!(
            "  {} ({}), {actor}\n{skills}\n  Unspent points: {}\n  Inventory: {inventory}\n  Daily action: {acted}",
            survivor.name.bold(),
            survivor.background,
            survivor.unallocated_points,
        ))
    }

    fn stash(&self) -> String {
        let camp = camp::lock(&self.camp);
        if camp.stash.is_empty() {
            return "  The stash is empty.".to_string();
        }
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Item", "Count"]);
        for (name, count) in camp.stash.iter() {
            table.add_row(vec![name.to_string(), count.to_string()]);
        }
        table.to_string()
    }
}

/// Parse `medical=2`.
fn parse_points(spec: &str) -> Result<(Skill, u32), String> {
    let (skill, n) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected <skill>=<n>, got '{spec}'"))?;
    let skill = Skill::parse(skill).ok_or_else(|| format!("unknown skill: {skill}"))?;
    let n = n
        .parse::<u32>()
        .map_err(|_| format!("not a point count: '{n}'"))?;
    Ok((skill, n))
}

/// Split `<item words> [amount]`. A trailing number is the amount.
fn item_and_amount(words: &[&str], usage: &str) -> Result<(String, u32), String> {
    let (amount, item) = match words.split_last() {
        Some((last, rest)) if !rest.is_empty() => match last.parse::<u32>() {
            Ok(n) => (n, rest),
            Err(_) => (1, words),
        },
        Some(_) => (1, words),
        None => return Err(format!("usage: {usage} <item> [amount]")),
    };
    Ok((item.join(" "), amount))
}

fn actor_and_action<'a>(args: &[&'a str], command: &str) -> Result<(ActorId, &'a str), String> {
    let [actor, action] = args else {
        return Err(format!("usage: {command} <actor> <action>"));
    };
    if find_action(action).is_none() {
        return Err(format!("unknown action: {action}. Type 'actions'."));
    }
    Ok((parse_actor(actor)?, *action))
}

pub fn run(options: PlayOptions) -> Result<(), String> {
    let mut console = Console::new(&options);

    println!("  {} Outpost camp console", "Starting".bold());
    if let Some(seed) = options.seed {
        println!("  Seed: {seed}");
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match console.process(input) {
            Ok(Reply::Text(output)) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Ok(Reply::Quit(output)) => {
                println!("{output}\n");
                break;
            }
            Err(e) => println!("  {}\n", e.yellow()),
        }
    }

    Ok(())
}
