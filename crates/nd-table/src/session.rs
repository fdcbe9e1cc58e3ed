//! Interactive table session.
//!
//! `TableSession` owns the running pool, the journal it saves into, the
//! preset book, and the session RNG. Each method mirrors one table action,
//! and [`TableSession::process`] maps a line of text onto them.

use chrono::Utc;
use rand::rngs::StdRng;
use tracing::{info, warn};

use nd_engine::{
    CriticalInjury, DieType, DieTypeResult, ForceRollResult, InjuryRoll, PoolAccumulator,
    PoolPreset, PresetBook, RollRecord, Side, roll_force, roll_injury,
};

use crate::config::TableConfig;
use crate::error::{TableError, TableResult};
use crate::journal::{Journal, JournalEntry};

/// An interactive dice table.
pub struct TableSession {
    pool: PoolAccumulator,
    journal: Journal,
    presets: PresetBook,
    rng: StdRng,
}

impl TableSession {
    /// Create a session from a configuration.
    pub fn new(config: TableConfig) -> Self {
        let rng = config.rng();
        Self {
            pool: PoolAccumulator::new(),
            journal: Journal::with_limit(config.history_limit),
            presets: config.presets,
            rng,
        }
    }

    /// Get the pool accumulator.
    pub fn pool(&self) -> &PoolAccumulator {
        &self.pool
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Get the preset book.
    pub fn presets(&self) -> &PresetBook {
        &self.presets
    }

    /// Roll more dice of one type into the pool.
    pub fn add_dice(&mut self, die: DieType, count: i64) -> TableResult<DieTypeResult> {
        Ok(self.pool.add_dice(die, count, &mut self.rng)?)
    }

    /// Clear one die type, or the whole pool when `die` is `None`.
    ///
    /// Clearing the whole pool saves it to the journal if it had any dice.
    pub fn reset(&mut self, die: Option<DieType>) -> Option<RollRecord> {
        match die {
            Some(die) => {
                self.pool.reset_type(die);
                None
            }
            None => self.pool.reset_all(&mut self.journal),
        }
    }

    /// Save the current pool and roll a fresh one of the same size.
    pub fn reroll(&mut self) -> TableResult<()> {
        Ok(self.pool.reroll_same(&mut self.rng, &mut self.journal)?)
    }

    /// Add a preset, looked up by name or 1-based number, onto the pool.
    pub fn apply_preset(&mut self, key: &str) -> TableResult<PoolPreset> {
        let preset = self
            .presets
            .find(key)
            .cloned()
            .ok_or_else(|| TableError::UnknownPreset(key.to_string()))?;
        self.pool.apply_preset(&preset, &mut self.rng)?;
        Ok(preset)
    }

    /// Save the current pool and roll the `n`th most recent saved pool again.
    pub fn replay(&mut self, n: usize) -> TableResult<RollRecord> {
        let record = self
            .journal
            .recent_pool_roll(n)
            .ok_or(TableError::NoHistory(n))?;
        self.pool
            .set_pool(&record.counts, &mut self.rng, &mut self.journal)?;
        Ok(record)
    }

    /// Roll Force dice and journal the result.
    pub fn roll_force(&mut self, count: i64) -> TableResult<ForceRollResult> {
        let result = roll_force(count, &mut self.rng)?;
        // Fits in u32: roll_force already rejected anything larger.
        let dice = u32::try_from(result.count()).unwrap_or(u32::MAX);
        self.journal.append(JournalEntry::ForceRoll {
            dice,
            light_pips: result.light_pips,
            dark_pips: result.dark_pips,
            timestamp: Utc::now(),
        });
        Ok(result)
    }

    /// Roll a critical injury and journal the result.
    pub fn roll_injury(
        &mut self,
        previous_injuries: u32,
        modifier: i64,
    ) -> TableResult<(InjuryRoll, CriticalInjury)> {
        let (roll, injury) = roll_injury(previous_injuries, modifier, &mut self.rng)?;
        info!(total = roll.total(), injury = injury.name, "critical injury");
        self.journal.append(JournalEntry::CriticalInjury {
            previous_injuries,
            modifier,
            d100: roll.d100,
            total: roll.total(),
            severity: injury.severity,
            name: injury.name.to_string(),
            timestamp: Utc::now(),
        });
        Ok((roll, injury))
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> TableResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        let result = match cmd.as_str() {
            "add" => self.do_add(rest),
            "reset" | "clear" => self.do_reset(rest),
            "reroll" | "again" => self.do_reroll(),
            "pool" | "show" => Ok(self.describe_pool()),
            "preset" => self.do_preset(rest),
            "presets" => Ok(self.do_preset_list()),
            "replay" => self.do_replay(rest),
            "force" => self.do_force(rest),
            "injury" | "crit" => self.do_injury(rest),
            "history" => Ok(self.do_history()),
            "note" => self.do_note(rest),
            "export" => self.do_export(rest),
            "help" => Ok(help_text().to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(TableError::UnknownCommand(cmd.clone())),
        };

        if let Err(e) = &result {
            warn!(command = %cmd, error = %e, "command rejected");
        }
        result
    }

    fn do_add(&mut self, rest: &str) -> TableResult<String> {
        let mut args = rest.split_whitespace();
        let (Some(count), Some(die), None) = (args.next(), args.next(), args.next()) else {
            return Err(TableError::InvalidChoice(
                "usage: add <count> <die>".to_string(),
            ));
        };
        let count: i64 = count
            .parse()
            .map_err(|_| TableError::InvalidChoice(format!("'{count}' is not a number")))?;
        let die: DieType = die.parse()?;
        let total = self.add_dice(die, count)?;
        Ok(format!(
            "{} {die}: {}\n{}",
            total.count,
            describe_symbols(die.side(), &total),
            self.verdict()
        ))
    }

    fn do_reset(&mut self, rest: &str) -> TableResult<String> {
        if rest.is_empty() {
            return Ok(match self.reset(None) {
                Some(record) => format!("Saved: {} => {}", record.counts, record.net),
                None => "Pool cleared.".to_string(),
            });
        }
        let die: DieType = rest.parse()?;
        self.reset(Some(die));
        Ok(format!("Cleared {die} dice.\n{}", self.verdict()))
    }

    fn do_reroll(&mut self) -> TableResult<String> {
        if self.pool.is_empty() {
            return Err(TableError::InvalidChoice(
                "nothing to reroll, the pool is empty".to_string(),
            ));
        }
        self.reroll()?;
        Ok(self.describe_pool())
    }

    fn do_preset(&mut self, key: &str) -> TableResult<String> {
        if key.is_empty() {
            return Err(TableError::InvalidChoice(
                "usage: preset <name or number>".to_string(),
            ));
        }
        let preset = self.apply_preset(key)?;
        Ok(format!("Added {}.\n{}", preset.name, self.describe_pool()))
    }

    fn do_preset_list(&self) -> String {
        let mut out = String::from("Presets:\n");
        for (i, preset) in self.presets.presets.iter().enumerate() {
            out.push_str(&format!("  {:>2}. {}\n", i + 1, preset.name));
        }
        out
    }

    fn do_replay(&mut self, rest: &str) -> TableResult<String> {
        let n = if rest.is_empty() {
            1
        } else {
            rest.parse::<usize>()
                .map_err(|_| TableError::InvalidChoice(format!("'{rest}' is not a roll number")))?
        };
        let record = self.replay(n)?;
        Ok(format!(
            "Replaying {}.\n{}",
            record.counts,
            self.describe_pool()
        ))
    }

    fn do_force(&mut self, rest: &str) -> TableResult<String> {
        let count = if rest.is_empty() {
            1
        } else {
            rest.parse::<i64>()
                .map_err(|_| TableError::InvalidChoice(format!("'{rest}' is not a number")))?
        };
        let result = self.roll_force(count)?;
        let faces: Vec<String> = result.faces.iter().map(|f| f.to_string()).collect();
        Ok(format!("Force: [{}] = {result}", faces.join(", ")))
    }

    fn do_injury(&mut self, rest: &str) -> TableResult<String> {
        let mut args = rest.split_whitespace();
        let previous = match args.next() {
            Some(p) => p
                .parse::<u32>()
                .map_err(|_| TableError::InvalidChoice(format!("'{p}' is not an injury count")))?,
            None => 0,
        };
        let modifier = match args.next() {
            Some(m) => m
                .parse::<i64>()
                .map_err(|_| TableError::InvalidChoice(format!("'{m}' is not a modifier")))?,
            None => 0,
        };
        let (roll, injury) = self.roll_injury(previous, modifier)?;
        Ok(format!(
            "d100 {} + {} previous {:+} = {}\n{}\n{}",
            roll.d100,
            i64::from(previous) * 10,
            modifier,
            roll.total(),
            injury,
            injury.description
        ))
    }

    fn do_history(&self) -> String {
        let rolls = self.journal.pool_rolls();
        if rolls.is_empty() {
            return "No saved rolls.".to_string();
        }
        let mut out = String::from("History (newest first):\n");
        for (i, record) in rolls.iter().enumerate() {
            out.push_str(&format!(
                "  {:>2}. {} {} => {}\n",
                i + 1,
                record.timestamp.format("%H:%M"),
                record.counts,
                record.net
            ));
        }
        out
    }

    fn do_note(&mut self, text: &str) -> TableResult<String> {
        if text.is_empty() {
            return Err(TableError::InvalidChoice("usage: note <text>".to_string()));
        }
        self.journal.append(JournalEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        Ok("Noted.".to_string())
    }

    fn do_export(&self, format: &str) -> TableResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal.export_markdown()),
            "text" | "txt" => Ok(self.journal.export_text()),
            other => Err(TableError::InvalidChoice(format!(
                "unknown export format '{other}'. Use: markdown, text"
            ))),
        }
    }

    /// Per-type results of the current pool, followed by its verdict.
    pub fn describe_pool(&self) -> String {
        let state = self.pool.state();
        let mut out = String::new();
        for (die, result) in state.iter().filter(|(_, r)| !r.is_empty()) {
            out.push_str(&format!(
                "{} {die}: {}\n",
                result.count,
                describe_symbols(die.side(), result)
            ));
        }
        out.push_str(&self.verdict());
        out
    }

    fn verdict(&self) -> String {
        if self.pool.is_empty() {
            "Pool is empty.".to_string()
        } else {
            format!("Result: {}", self.pool.compute_net())
        }
    }
}

/// Symbols on one die type, named for its side, e.g. "2 success, 1 advantage".
///
/// Triumph and despair are only listed when at least one was rolled.
pub fn describe_symbols(side: Side, result: &DieTypeResult) -> String {
    let [primary, secondary, special] = side.symbol_names();
    let mut parts = vec![
        format!("{} {primary}", result.primary),
        format!("{} {secondary}", result.secondary),
    ];
    if result.special > 0 {
        parts.push(format!("{} {special}", result.special));
    }
    parts.join(", ")
}

fn help_text() -> &'static str {
    "\
Pool:
  add <count> <die>     Roll dice into the pool (ability, proficiency, boost,
                        difficulty, challenge, setback, or a/p/b/d/c/s)
  reset [<die>]         Clear one die type, or save and clear the whole pool
  reroll                Save the pool and roll the same dice again
  pool                  Show the current pool
  preset <name|number>  Add a preset pool
  presets               List presets
  replay [<n>]          Roll the n-th most recent saved pool again

Side rolls:
  force [<count>]                   Roll Force dice
  injury [<previous> [<modifier>]]  Roll a critical injury

Journal:
  history               List saved pools, newest first
  note <text>           Add a note
  export [markdown|text]

  help, quit"
}
