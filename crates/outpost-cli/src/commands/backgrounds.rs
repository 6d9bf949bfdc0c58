use comfy_table::{ContentArrangement, Table};
use outpost_core::BACKGROUNDS;

pub fn table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Background", "Skills", "Equipment", "Description"]);
    for background in &BACKGROUNDS {
        let skills = background
            .skills
            .iter()
            .map(|(skill, bonus)| format!("{skill} +{bonus}"))
            .collect::<Vec<_>>()
            .join(", ");
        let equipment = background
            .starting_inventory()
            .iter()
            .map(|item| {
                if item.is_equipped() {
                    format!("{} (E)", item.name())
                } else {
                    item.name().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            background.name.to_string(),
            skills,
            equipment,
            background.description.to_string(),
        ]);
    }
    table
}

pub fn run() -> Result<(), String> {
    println!("{}", table());
    Ok(())
}
