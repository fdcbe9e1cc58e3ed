use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use nd_engine::{DiceCounts, PoolAccumulator};
use nd_table::session::describe_symbols;

pub fn run(
    counts: DiceCounts,
    preset: Option<&str>,
    presets: Option<&Path>,
    seed: Option<u64>,
) -> Result<(), String> {
    let config = super::table_config(seed, presets, None)?;
    let mut rng = config.rng();
    let mut pool = PoolAccumulator::new();

    pool.add_counts(&counts, &mut rng).map_err(|e| e.to_string())?;
    if let Some(key) = preset {
        let preset = config
            .presets
            .find(key)
            .ok_or_else(|| format!("no preset named '{key}'"))?;
        pool.apply_preset(preset, &mut rng)
            .map_err(|e| e.to_string())?;
    }

    if pool.is_empty() {
        println!("  No dice to roll. Try: nd roll --ability 2 --difficulty 1");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Dice", "Count", "Symbols"]);
    for (die, result) in pool.state().iter().filter(|(_, r)| !r.is_empty()) {
        table.add_row(vec![
            die.to_string(),
            result.count.to_string(),
            describe_symbols(die.side(), result),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} {}",
        "Result:".bold(),
        super::colored_verdict(&pool.compute_net())
    );

    Ok(())
}
