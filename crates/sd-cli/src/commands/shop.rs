use comfy_table::{ContentArrangement, Table};

use sd_town::SessionConfig;

pub fn list(config: SessionConfig) -> Result<(), String> {
    let session = super::open_session(config)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Item", "Stats", "Price", "Description"]);
    for (i, item) in session.shop().stock().iter().enumerate() {
        let price = if item.purchased {
            "Purchased".to_string()
        } else {
            format!("{} G", item.price)
        };
        table.add_row(vec![
            (i + 1).to_string(),
            item.name.clone(),
            item.stat_label(),
            price,
            item.description.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  Gold: {}", session.character().gold);
    Ok(())
}

pub fn buy(config: SessionConfig, number: usize) -> Result<(), String> {
    super::run_command(config, &format!("buy {number}"))
}

pub fn sell(config: SessionConfig, number: usize) -> Result<(), String> {
    super::run_command(config, &format!("sell {number}"))
}
