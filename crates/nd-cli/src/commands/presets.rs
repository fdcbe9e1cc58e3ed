use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use nd_engine::Side;

pub fn run(presets: Option<&Path>) -> Result<(), String> {
    let config = super::table_config(None, presets, None)?;
    let book = &config.presets;

    if book.is_empty() {
        println!("  No presets defined.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Dice", "Light", "Dark"]);
    for (i, preset) in book.presets.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            preset.name.clone(),
            preset.counts.total().to_string(),
            preset.counts.side_total(Side::Light).to_string(),
            preset.counts.side_total(Side::Dark).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} presets", book.len());

    Ok(())
}
