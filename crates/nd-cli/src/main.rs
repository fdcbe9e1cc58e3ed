//! CLI frontend for the narrative dice engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nd",
    about = "Narrative dice: roll pools, Force dice, and critical injuries",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a single dice pool
    Roll {
        /// Ability dice (green d8)
        #[arg(short, long, default_value = "0")]
        ability: u32,

        /// Proficiency dice (yellow d12)
        #[arg(short, long, default_value = "0")]
        proficiency: u32,

        /// Boost dice (blue d6)
        #[arg(short, long, default_value = "0")]
        boost: u32,

        /// Difficulty dice (purple d8)
        #[arg(short, long, default_value = "0")]
        difficulty: u32,

        /// Challenge dice (red d12)
        #[arg(short, long, default_value = "0")]
        challenge: u32,

        /// Setback dice (black d6)
        #[arg(short = 'k', long, default_value = "0")]
        setback: u32,

        /// Also add a preset, by name or number
        #[arg(long)]
        preset: Option<String>,

        /// Preset book (JSON) to look the preset up in
        #[arg(long)]
        presets: Option<PathBuf>,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Roll Force dice
    Force {
        /// Number of Force dice
        #[arg(default_value = "1")]
        count: u32,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Roll or look up a critical injury
    Injury {
        /// Critical injuries the target already has (+10 each)
        #[arg(long, default_value = "0")]
        previous: u32,

        /// Flat modifier, e.g. from Vicious
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        modifier: i64,

        /// Resolve this composite value instead of rolling
        #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["previous", "modifier"])]
        value: Option<i64>,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List pool presets
    Presets {
        /// Preset book (JSON) to list instead of the built-in one
        #[arg(long)]
        presets: Option<PathBuf>,
    },

    /// Start an interactive dice table
    Table {
        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Preset book (JSON) to use instead of the built-in one
        #[arg(long)]
        presets: Option<PathBuf>,

        /// Keep at most this many journal entries
        #[arg(long)]
        history_limit: Option<usize>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            ability,
            proficiency,
            boost,
            difficulty,
            challenge,
            setback,
            preset,
            presets,
            seed,
        } => {
            let counts = nd_engine::DiceCounts {
                ability,
                proficiency,
                boost,
                difficulty,
                challenge,
                setback,
            };
            commands::roll::run(counts, preset.as_deref(), presets.as_deref(), seed)
        }
        Commands::Force { count, seed } => commands::force::run(count, seed),
        Commands::Injury {
            previous,
            modifier,
            value,
            seed,
        } => commands::injury::run(previous, modifier, value, seed),
        Commands::Presets { presets } => commands::presets::run(presets.as_deref()),
        Commands::Table {
            seed,
            presets,
            history_limit,
        } => commands::table::run(seed, presets.as_deref(), history_limit),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
