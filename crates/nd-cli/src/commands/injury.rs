use colored::Colorize;

use nd_engine::{resolve_injury, roll_injury};

pub fn run(previous: u32, modifier: i64, value: Option<i64>, seed: Option<u64>) -> Result<(), String> {
    let injury = match value {
        Some(total) => {
            println!("  {} {total}", "Value:".bold());
            resolve_injury(total)
        }
        None => {
            let config = super::table_config(seed, None, None)?;
            let mut rng = config.rng();
            let (roll, injury) =
                roll_injury(previous, modifier, &mut rng).map_err(|e| e.to_string())?;
            println!(
                "  {} d100 {} + {} previous {:+} = {}",
                "Roll:".bold(),
                roll.d100,
                i64::from(previous) * 10,
                modifier,
                roll.total()
            );
            injury
        }
    };

    println!(
        "  {} {} ({})",
        "Injury:".bold(),
        injury.name.bold(),
        super::colored_severity(injury.severity)
    );
    println!("  {}", injury.description);

    Ok(())
}
