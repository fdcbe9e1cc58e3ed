//! Journal storage and export.

use nd_engine::{HistorySink, RollRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entry::JournalEntry;

/// A chronological log of table events, oldest first.
///
/// With a limit set, the oldest entries are dropped to make room. The
/// limit is saved alongside the entries, so a reloaded journal stays
/// bounded. Documents without one load as unbounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl Journal {
    /// Create an empty, unbounded journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty journal that keeps at most `limit` entries.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.map(|l| l.max(1)),
        }
    }

    /// The entry cap, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append an entry, evicting the oldest if the journal is full.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
        if let Some(limit) = self.limit {
            let overflow = self.entries.len().saturating_sub(limit.max(1));
            if overflow > 0 {
                self.entries.drain(..overflow);
                debug!(dropped = overflow, "journal full, dropped oldest entries");
            }
        }
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Saved pools, newest first.
    pub fn pool_rolls(&self) -> Vec<RollRecord> {
        self.entries
            .iter()
            .rev()
            .filter_map(JournalEntry::as_roll_record)
            .collect()
    }

    /// The `n`th most recent saved pool, counting from 1.
    pub fn recent_pool_roll(&self, n: usize) -> Option<RollRecord> {
        if n == 0 {
            return None;
        }
        self.entries
            .iter()
            .rev()
            .filter_map(JournalEntry::as_roll_record)
            .nth(n - 1)
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Table Journal\n\n");
        for entry in &self.entries {
            let time = entry.timestamp().format("%H:%M");
            match entry {
                JournalEntry::PoolRoll { counts, net, .. } => {
                    out.push_str(&format!("**{time}** Pool ({counts}): **{net}**\n\n"));
                }
                JournalEntry::ForceRoll {
                    dice,
                    light_pips,
                    dark_pips,
                    ..
                } => {
                    out.push_str(&format!(
                        "**{time}** Force x{dice}: {light_pips} Light, {dark_pips} Dark\n\n"
                    ));
                }
                JournalEntry::CriticalInjury {
                    previous_injuries,
                    modifier,
                    d100,
                    total,
                    severity,
                    name,
                    ..
                } => {
                    out.push_str(&format!(
                        "**{time}** Critical Injury: d100 {d100} + {} previous {modifier:+} = {total}\n",
                        previous_injuries * 10
                    ));
                    out.push_str(&format!("  **{name}** ({severity})\n\n"));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Table Journal\n=============\n\n");
        for entry in &self.entries {
            let time = entry.timestamp().format("%H:%M");
            match entry {
                JournalEntry::PoolRoll { counts, net, .. } => {
                    out.push_str(&format!("[{time}] Pool ({counts}): {net}\n"));
                }
                JournalEntry::ForceRoll {
                    dice,
                    light_pips,
                    dark_pips,
                    ..
                } => {
                    out.push_str(&format!(
                        "[{time}] Force x{dice}: {light_pips} Light, {dark_pips} Dark\n"
                    ));
                }
                JournalEntry::CriticalInjury {
                    total,
                    severity,
                    name,
                    ..
                } => {
                    out.push_str(&format!(
                        "[{time}] Critical Injury ({total}): {name} ({severity})\n"
                    ));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("[{time}] Note: {text}\n"));
                }
            }
        }
        out
    }
}

impl HistorySink for Journal {
    fn record_roll(&mut self, record: RollRecord) {
        self.append(record.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use nd_engine::{DiceCounts, DieType, NetPoolResult, Severity};

    fn record(ability: u32, net_success: i64) -> RollRecord {
        RollRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 4, 14, 2, 0).unwrap(),
            counts: DiceCounts::new().with(DieType::Ability, ability),
            net: NetPoolResult {
                net_success,
                ..NetPoolResult::default()
            },
        }
    }

    fn note(text: &str) -> JournalEntry {
        JournalEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_journal() {
        let j = Journal::new();
        assert!(j.is_empty());
        assert_eq!(j.len(), 0);
        assert!(j.pool_rolls().is_empty());
    }

    #[test]
    fn records_rolls_as_history_sink() {
        let mut j = Journal::new();
        j.record_roll(record(1, 1));
        j.record_roll(record(2, 0));
        assert_eq!(j.len(), 2);
        let rolls = j.pool_rolls();
        assert_eq!(rolls[0].counts.ability, 2);
        assert_eq!(rolls[1].counts.ability, 1);
    }

    #[test]
    fn recent_pool_roll_skips_other_entries() {
        let mut j = Journal::new();
        j.record_roll(record(1, 1));
        j.append(note("between rolls"));
        j.record_roll(record(3, -1));
        assert_eq!(j.recent_pool_roll(1).map(|r| r.counts.ability), Some(3));
        assert_eq!(j.recent_pool_roll(2).map(|r| r.counts.ability), Some(1));
        assert_eq!(j.recent_pool_roll(3), None);
        assert_eq!(j.recent_pool_roll(0), None);
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut j = Journal::with_limit(Some(2));
        j.record_roll(record(1, 0));
        j.record_roll(record(2, 0));
        j.record_roll(record(3, 0));
        assert_eq!(j.len(), 2);
        let kept: Vec<u32> = j.pool_rolls().iter().map(|r| r.counts.ability).collect();
        assert_eq!(kept, vec![3, 2]);
    }

    #[test]
    fn zero_limit_keeps_one() {
        let mut j = Journal::with_limit(Some(0));
        j.append(note("a"));
        j.append(note("b"));
        assert_eq!(j.len(), 1);
    }

    #[test]
    fn export_markdown_pool() {
        let mut j = Journal::new();
        j.record_roll(record(2, 1));
        let md = j.export_markdown();
        assert!(md.starts_with("# Table Journal"));
        assert!(md.contains("**14:02** Pool (2 Ability): **1 Success**"));
    }

    #[test]
    fn export_text_pool_and_note() {
        let mut j = Journal::new();
        j.record_roll(record(1, 0));
        j.append(note("Remember the key"));
        let txt = j.export_text();
        assert!(txt.contains("[14:02] Pool (1 Ability): Failure"));
        assert!(txt.contains("Note: Remember the key"));
    }

    #[test]
    fn export_injury_and_force() {
        let mut j = Journal::new();
        j.append(JournalEntry::ForceRoll {
            dice: 2,
            light_pips: 3,
            dark_pips: 0,
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::CriticalInjury {
            previous_injuries: 1,
            modifier: 10,
            d100: 50,
            total: 70,
            severity: Severity::Average,
            name: "Stunned".to_string(),
            timestamp: Utc::now(),
        });
        let md = j.export_markdown();
        assert!(md.contains("Force x2: 3 Light, 0 Dark"));
        assert!(md.contains("d100 50 + 10 previous +10 = 70"));
        let txt = j.export_text();
        assert!(txt.contains("Critical Injury (70): Stunned (Average)"));
    }

    #[test]
    fn journal_serde_roundtrip() {
        let mut j = Journal::new();
        j.record_roll(record(1, 1));
        j.append(note("test"));
        let json = serde_json::to_string(&j).unwrap();
        let j2: Journal = serde_json::from_str(&json).unwrap();
        assert_eq!(j2.len(), 2);
        assert_eq!(j2.entries(), j.entries());
    }

    #[test]
    fn limit_survives_serde_roundtrip() {
        let mut j = Journal::with_limit(Some(2));
        j.append(note("a"));
        let json = serde_json::to_string(&j).unwrap();
        let mut j2: Journal = serde_json::from_str(&json).unwrap();
        assert_eq!(j2.limit(), Some(2));
        j2.append(note("b"));
        j2.append(note("c"));
        assert_eq!(j2.len(), 2);
    }

    #[test]
    fn document_without_limit_loads_unbounded() {
        let j: Journal = serde_json::from_str(r#"{"entries":[]}"#).unwrap();
        assert_eq!(j.limit(), None);
        assert!(!serde_json::to_string(&j).unwrap().contains("limit"));
    }
}
