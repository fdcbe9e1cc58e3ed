//! Pool state, netting, and accumulation.
//!
//! A [`PoolState`] holds one [`DieTypeResult`] per die type. The
//! [`PoolAccumulator`] owns a pool state and grows, resets, and re-rolls it;
//! [`PoolState::net`] applies the light-minus-dark cancellation rule.

pub mod accumulator;
pub mod counts;
pub mod net;

pub use accumulator::PoolAccumulator;
pub use counts::DiceCounts;
pub use net::{Edge, NetPoolResult, Outcome};

use serde::{Deserialize, Serialize};

use crate::dice::{DieType, DieTypeResult, Side};

/// Running per-type totals for the current pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    results: [DieTypeResult; 6],
}

impl PoolState {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated result for one die type.
    pub fn get(&self, die: DieType) -> &DieTypeResult {
        &self.results[die.index()]
    }

    pub(crate) fn get_mut(&mut self, die: DieType) -> &mut DieTypeResult {
        &mut self.results[die.index()]
    }

    /// Iterate `(type, result)` pairs in pool order.
    pub fn iter(&self) -> impl Iterator<Item = (DieType, &DieTypeResult)> {
        DieType::ALL.into_iter().zip(self.results.iter())
    }

    /// Number of dice of each type in the pool.
    pub fn counts(&self) -> DiceCounts {
        let mut counts = DiceCounts::new();
        for (die, result) in self.iter() {
            counts.set(die, result.count);
        }
        counts
    }

    /// Total dice rolled into this pool.
    pub fn total_dice(&self) -> u32 {
        self.results.iter().map(|r| r.count).sum()
    }

    /// Returns true if no dice of any type have been rolled.
    ///
    /// A pool whose dice all came up blank is *not* empty.
    pub fn is_empty(&self) -> bool {
        self.results.iter().all(DieTypeResult::is_empty)
    }

    /// Net the pool: light symbols add, dark symbols subtract.
    ///
    /// Specials are summed per side, so triumph can only come from light
    /// dice and despair only from dark dice. The face tables only give
    /// specials to Proficiency and Challenge.
    pub fn net(&self) -> NetPoolResult {
        let mut net = NetPoolResult::default();
        for (die, result) in self.iter() {
            let primary = i64::from(result.primary);
            let secondary = i64::from(result.secondary);
            match die.side() {
                Side::Light => {
                    net.net_success += primary;
                    net.net_advantage += secondary;
                    net.triumph += result.special;
                }
                Side::Dark => {
                    net.net_success -= primary;
                    net.net_advantage -= secondary;
                    net.despair += result.special;
                }
            }
        }
        net
    }

    /// The pass/fail reading, or `None` if nothing has been rolled.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_empty() {
            None
        } else {
            Some(self.net().outcome())
        }
    }
}
