use comfy_table::{ContentArrangement, Table};

use sd_mechanics::{effective_attack, effective_defense};
use sd_town::SessionConfig;

pub fn run(config: SessionConfig) -> Result<(), String> {
    let session = super::open_session(config)?;
    println!("{}", session.render_status());
    Ok(())
}

pub fn inventory(config: SessionConfig) -> Result<(), String> {
    let session = super::open_session(config)?;
    let character = session.character();
    let items = character.inventory.items();

    if items.is_empty() {
        println!("  Inventory is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Item", "Kind", "Stats", "Equipped"]);
    for (i, item) in items.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            item.name.clone(),
            item.kind.to_string(),
            item.stat_label(),
            (if item.equipped { "yes" } else { "" }).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  Effective attack {} | defense {}",
        effective_attack(character),
        effective_defense(character)
    );
    Ok(())
}
