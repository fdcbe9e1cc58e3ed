//! Journal entry types.

use chrono::{DateTime, Utc};
use nd_engine::{DiceCounts, NetPoolResult, RollRecord, Severity};
use serde::{Deserialize, Serialize};

/// A single entry in the table journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A pool that was cleared after being rolled.
    PoolRoll {
        /// Dice in the pool.
        counts: DiceCounts,
        /// Netted totals.
        net: NetPoolResult,
        /// When the pool was saved.
        timestamp: DateTime<Utc>,
    },
    /// One or more Force dice.
    ForceRoll {
        /// Number of dice rolled.
        dice: u32,
        /// Light-side pips.
        light_pips: u32,
        /// Dark-side pips.
        dark_pips: u32,
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
    /// A critical injury roll.
    CriticalInjury {
        /// Injuries the target already had.
        previous_injuries: u32,
        /// Flat modifier applied.
        modifier: i64,
        /// The d100 result.
        d100: u32,
        /// Composite value looked up.
        total: i64,
        /// Severity tier.
        severity: Severity,
        /// Injury name.
        name: String,
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
    /// A player note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// When this entry was made.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::PoolRoll { timestamp, .. }
            | Self::ForceRoll { timestamp, .. }
            | Self::CriticalInjury { timestamp, .. }
            | Self::Note { timestamp, .. } => *timestamp,
        }
    }

    /// The pool record, if this entry is a pool roll.
    pub fn as_roll_record(&self) -> Option<RollRecord> {
        match self {
            Self::PoolRoll {
                counts,
                net,
                timestamp,
            } => Some(RollRecord {
                timestamp: *timestamp,
                counts: *counts,
                net: *net,
            }),
            _ => None,
        }
    }
}

impl From<RollRecord> for JournalEntry {
    fn from(record: RollRecord) -> Self {
        Self::PoolRoll {
            counts: record.counts,
            net: record.net,
            timestamp: record.timestamp,
        }
    }
}
