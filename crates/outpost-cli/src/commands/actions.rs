use comfy_table::{ContentArrangement, Table};
use outpost_core::ACTIONS;

pub fn table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Action", "Skill", "Description"]);
    for action in &ACTIONS {
        table.add_row(vec![
            action.key,
            action.name,
            action.skill.name(),
            action.description,
        ]);
    }
    table
}

pub fn run() -> Result<(), String> {
    println!("{}", table());
    println!();
    println!("  {} actions", ACTIONS.len());
    Ok(())
}
