//! Terminal display and acknowledgment for the console.

use std::io::{self, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use outpost_mechanics::DicePool;
use outpost_rolls::{
    Acknowledger, CollabError, InputEvent, Participants, ResolutionReport, SessionDisplay,
    SessionView,
};
use tracing::debug;

/// Prints session views and reports to stdout.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    json: bool,
}

impl TerminalDisplay {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

fn dice(pool: &DicePool) -> String {
    pool.values()
        .iter()
        .map(|&d| match d {
            6 => d.to_string().green().bold().to_string(),
            4 | 5 => d.to_string().green().to_string(),
            1 => d.to_string().red().to_string(),
            _ => d.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn view_text(view: &SessionView) -> String {
    match view {
        SessionView::Solo(v) => format!(
            "  {} {} {} for {}\n  Dice: [{}]  Successes: {}  {}: {} points",
            v.session.to_string().bold(),
            v.action.name.bold(),
            "roll".dimmed(),
            v.owner,
            dice(&v.pool),
            v.successes,
            v.skill,
            v.budget,
        ),
        SessionView::Lobby(v) => format!(
            "  {} {} lobby led by {}\n  Members: {}",
            v.session.to_string().bold(),
            v.action.name.bold(),
            v.leader,
            v.members
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        SessionView::Group(v) => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Member", "Budget", "Status"]);
            for m in &v.members {
                let status = if m.submitted { "ready" } else { "waiting" };
                table.add_row(vec![m.actor.to_string(), m.budget.to_string(), status.to_string()]);
            }
            format!(
                "  {} group {}\n  Dice: [{}]  Successes: {}\n{table}",
                v.session.to_string().bold(),
                v.action.name.bold(),
                dice(&v.pool),
                v.successes,
            )
        }
    }
}

fn report_text(report: &ResolutionReport) -> String {
    let who = match &report.participants {
        Participants::Solo(actor) => actor.to_string(),
        Participants::Group(actors) => actors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    };
    let verdict = if report.successes > 0 {
        format!("{} successes", report.successes).green()
    } else {
        format!("{} successes", report.successes).red()
    };
    format!(
        "  {} {} by {who}: {verdict}\n  Dice: [{}]\n  {}",
        report.session.to_string().bold(),
        report.action.name.bold(),
        dice(&report.pool),
        report.effect,
    )
}

impl SessionDisplay for TerminalDisplay {
    fn render(&mut self, view: &SessionView) -> Result<(), CollabError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}\n", view_text(view))?;
        Ok(())
    }

    fn report(&mut self, report: &ResolutionReport) -> Result<(), CollabError> {
        let text = if self.json {
            serde_json::to_string_pretty(report).map_err(|e| CollabError::Display(e.to_string()))?
        } else {
            report_text(report)
        };
        let mut out = io::stdout().lock();
        writeln!(out, "{text}\n")?;
        Ok(())
    }
}

/// Console inputs are consumed once read; this only records them.
#[derive(Debug, Default)]
pub struct ConsoleAcks {
    consumed: usize,
}

impl ConsoleAcks {
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl Acknowledger for ConsoleAcks {
    fn consume(&mut self, event: &InputEvent) -> Result<(), CollabError> {
        self.consumed += 1;
        debug!(%event, total = self.consumed, "input consumed");
        Ok(())
    }
}
