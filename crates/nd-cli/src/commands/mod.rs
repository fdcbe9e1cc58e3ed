pub mod force;
pub mod injury;
pub mod presets;
pub mod roll;
pub mod table;

use std::path::Path;

use colored::{ColoredString, Colorize};
use nd_engine::{Edge, NetPoolResult, Outcome, Severity};
use nd_table::TableConfig;
use tracing::debug;

/// Build a table config from the flags shared by several commands.
fn table_config(
    seed: Option<u64>,
    presets: Option<&Path>,
    history_limit: Option<usize>,
) -> Result<TableConfig, String> {
    debug!(?seed, ?presets, ?history_limit, "building table config");
    let mut config = TableConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(limit) = history_limit {
        config = config.with_history_limit(limit);
    }
    if let Some(path) = presets {
        config = config
            .with_presets_file(path)
            .map_err(|e| format!("failed to load presets from {}: {e}", path.display()))?;
    }
    Ok(config)
}

/// Render a netted pool with the verdict, edge, and specials colored.
fn colored_verdict(net: &NetPoolResult) -> String {
    let outcome = net.outcome();
    let mut parts: Vec<ColoredString> = vec![match outcome {
        Outcome::Success { .. } => outcome.to_string().green().bold(),
        Outcome::Failure { .. } => outcome.to_string().red().bold(),
    }];
    match net.edge() {
        Edge::Advantage(_) => parts.push(net.edge().to_string().cyan()),
        Edge::Threat(_) => parts.push(net.edge().to_string().magenta()),
        Edge::Even => {}
    }
    if net.triumph > 0 {
        parts.push(format!("{} Triumph", net.triumph).yellow().bold());
    }
    if net.despair > 0 {
        parts.push(format!("{} Despair", net.despair).red());
    }
    parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn colored_severity(severity: Severity) -> ColoredString {
    match severity {
        Severity::Easy => severity.label().green(),
        Severity::Average => severity.label().yellow(),
        Severity::Hard => severity.label().bright_red(),
        Severity::Daunting => severity.label().red().bold(),
        Severity::Fatal => "Fatal".red().bold().reversed(),
    }
}
