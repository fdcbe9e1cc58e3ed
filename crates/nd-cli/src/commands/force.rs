use colored::Colorize;

use nd_engine::{ForcePips, roll_force};

pub fn run(count: u32, seed: Option<u64>) -> Result<(), String> {
    let config = super::table_config(seed, None, None)?;
    let mut rng = config.rng();
    let result = roll_force(i64::from(count), &mut rng).map_err(|e| e.to_string())?;

    let faces: Vec<String> = result
        .faces
        .iter()
        .map(|face| match face {
            ForcePips::Light(_) => face.to_string().bright_white().to_string(),
            ForcePips::Dark(_) => face.to_string().purple().to_string(),
        })
        .collect();

    println!(
        "  {} x{}: [{}]",
        "Force".bold(),
        result.count(),
        faces.join(", ")
    );
    println!(
        "  {} Light, {} Dark",
        result.light_pips.to_string().bright_white().bold(),
        result.dark_pips.to_string().purple().bold()
    );

    Ok(())
}
