//! Roll history records and the sink they are written to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pool::{DiceCounts, NetPoolResult};

/// A finished pool, as it was when it was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// When the pool was saved.
    pub timestamp: DateTime<Utc>,
    /// How many dice of each type were in the pool.
    pub counts: DiceCounts,
    /// The pool's netted totals.
    pub net: NetPoolResult,
}

/// Receives finished pools.
///
/// The accumulator only calls this for pools that had at least one die.
pub trait HistorySink {
    /// Record one finished pool.
    fn record_roll(&mut self, record: RollRecord);
}

impl HistorySink for Vec<RollRecord> {
    fn record_roll(&mut self, record: RollRecord) {
        self.push(record);
    }
}

impl<H: HistorySink + ?Sized> HistorySink for &mut H {
    fn record_roll(&mut self, record: RollRecord) {
        (**self).record_roll(record);
    }
}
