//! The pool accumulator: one running pool per table.
//!
//! Rolls are folded in by addition, so adding two Boost dice to a pool
//! that already has one leaves three Boost dice and all of their symbols.
//! Clearing a pool that had any dice in it always hands it to the history
//! sink first.

use chrono::Utc;
use tracing::{debug, info};

use super::{DiceCounts, NetPoolResult, Outcome, PoolState};
use crate::dice::{DieType, DieTypeResult, roll_dice};
use crate::error::{EngineError, EngineResult};
use crate::history::{HistorySink, RollRecord};
use crate::preset::PoolPreset;
use crate::random::RandomSource;

/// Holds and mutates the current pool.
///
/// The random source and history sink are passed into the operations that
/// need them rather than stored, so one accumulator can be driven by any
/// seeded or scripted source.
#[derive(Debug, Clone, Default)]
pub struct PoolAccumulator {
    state: PoolState,
}

impl PoolAccumulator {
    /// Create an accumulator with an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current pool.
    pub fn state(&self) -> &PoolState {
        &self.state
    }

    /// An owned copy of the current pool.
    pub fn snapshot(&self) -> PoolState {
        self.state.clone()
    }

    /// Returns true if no dice have been rolled since the last reset.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Roll `count` more dice of type `die` and add them to the pool.
    ///
    /// Returns the updated per-type total. On error the pool is unchanged,
    /// including when the new total would not fit in a `u32`.
    pub fn add_dice<R: RandomSource + ?Sized>(
        &mut self,
        die: DieType,
        count: i64,
        rng: &mut R,
    ) -> EngineResult<DieTypeResult> {
        let rolled = roll_dice(die, count, rng)?;
        let current = *self.state.get(die);
        let total = fold(current, rolled)?;
        *self.state.get_mut(die) = total;
        debug!(die = %die, added = rolled.count, total = total.count, "added dice to pool");
        Ok(total)
    }

    /// Roll every count in `counts` and add them all to the pool.
    ///
    /// Types are rolled in pool order. If any roll fails, nothing is added.
    pub fn add_counts<R: RandomSource + ?Sized>(
        &mut self,
        counts: &DiceCounts,
        rng: &mut R,
    ) -> EngineResult<()> {
        let rolled = roll_counts(counts, rng)?;
        let mut merged = self.state.clone();
        for die in DieType::ALL {
            *merged.get_mut(die) = fold(*self.state.get(die), *rolled.get(die))?;
        }
        self.state = merged;
        debug!(%counts, "added dice counts to pool");
        Ok(())
    }

    /// Add a preset's dice onto the current pool.
    pub fn apply_preset<R: RandomSource + ?Sized>(
        &mut self,
        preset: &PoolPreset,
        rng: &mut R,
    ) -> EngineResult<()> {
        debug!(preset = %preset.name, "applying preset");
        self.add_counts(&preset.counts, rng)
    }

    /// Clear one die type, leaving the others alone.
    pub fn reset_type(&mut self, die: DieType) {
        *self.state.get_mut(die) = DieTypeResult::default();
        debug!(die = %die, "reset die type");
    }

    /// Clear the whole pool.
    ///
    /// If the pool had any dice, it is recorded to `sink` exactly once
    /// before being cleared, and the record is returned. An empty pool is
    /// never recorded.
    pub fn reset_all<H: HistorySink + ?Sized>(&mut self, sink: &mut H) -> Option<RollRecord> {
        if self.state.is_empty() {
            debug!("reset empty pool, nothing saved");
            return None;
        }

        let record = RollRecord {
            timestamp: Utc::now(),
            counts: self.state.counts(),
            net: self.state.net(),
        };
        info!(counts = %record.counts, net = %record.net, "saving pool to history");
        sink.record_roll(record.clone());
        self.state = PoolState::new();
        Some(record)
    }

    /// Save the current pool, then roll a fresh pool of the same size.
    ///
    /// Same all-or-nothing rule as [`set_pool`](Self::set_pool).
    pub fn reroll_same<R, H>(&mut self, rng: &mut R, sink: &mut H) -> EngineResult<()>
    where
        R: RandomSource + ?Sized,
        H: HistorySink + ?Sized,
    {
        let counts = self.state.counts();
        self.set_pool(&counts, rng, sink)
    }

    /// Save the current pool, then roll exactly `counts`.
    ///
    /// The new dice are rolled before anything is saved. If that roll fails,
    /// the sink is not called and the current pool is left as it was. This
    /// is how a pool is picked back up from history.
    pub fn set_pool<R, H>(
        &mut self,
        counts: &DiceCounts,
        rng: &mut R,
        sink: &mut H,
    ) -> EngineResult<()>
    where
        R: RandomSource + ?Sized,
        H: HistorySink + ?Sized,
    {
        let rolled = roll_counts(counts, rng)?;
        self.reset_all(sink);
        self.state = rolled;
        debug!(%counts, "replaced pool");
        Ok(())
    }

    /// Net totals of the current pool.
    pub fn compute_net(&self) -> NetPoolResult {
        self.state.net()
    }

    /// Pass/fail reading of the current pool, `None` if it is empty.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }
}

/// Roll `counts` into a fresh pool, in pool order.
fn roll_counts<R: RandomSource + ?Sized>(
    counts: &DiceCounts,
    rng: &mut R,
) -> EngineResult<PoolState> {
    let mut rolled = PoolState::new();
    for (die, count) in counts.iter() {
        *rolled.get_mut(die) = roll_dice(die, i64::from(count), rng)?;
    }
    Ok(rolled)
}

/// Add a fresh roll onto a running per-type total.
fn fold(current: DieTypeResult, rolled: DieTypeResult) -> EngineResult<DieTypeResult> {
    current
        .checked_add(rolled)
        .ok_or_else(|| {
            EngineError::InvalidCount(i64::from(current.count) + i64::from(rolled.count))
        })
}


#[cfg(test)]
mod properties {
    use super::*;
    use crate::random::ScriptedSource;
    use proptest::prelude::*;

    fn die_type() -> impl Strategy<Value = DieType> {
        prop::sample::select(DieType::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn adding_in_two_steps_matches_one_roll(
            die in die_type(),
            a in 0u32..20,
            b in 0u32..20,
            seed in prop::collection::vec(1u32..=12, 40),
        ) {
            let faces: Vec<u32> = seed
                .iter()
                .map(|f| (f - 1) % die.sides() + 1)
                .collect();

            let mut split = PoolAccumulator::new();
            let mut src = ScriptedSource::new(faces.clone());
            split.add_dice(die, i64::from(a), &mut src).unwrap();
            split.add_dice(die, i64::from(b), &mut src).unwrap();

            let mut whole = PoolAccumulator::new();
            let mut src = ScriptedSource::new(faces);
            whole.add_dice(die, i64::from(a + b), &mut src).unwrap();

            prop_assert_eq!(split.state().get(die), whole.state().get(die));
        }

        #[test]
        fn net_is_light_minus_dark(
            faces in prop::collection::vec(1u32..=12, 6),
            counts in prop::collection::vec(0u32..4, 6),
        ) {
            let mut acc = PoolAccumulator::new();
            let mut expected_success = 0i64;
            for (i, die) in DieType::ALL.into_iter().enumerate() {
                let face = (faces[i] - 1) % die.sides() + 1;
                let script = vec![face; counts[i] as usize];
                let mut src = ScriptedSource::new(script);
                let r = acc.add_dice(die, i64::from(counts[i]), &mut src).unwrap();
                let sign = if die.index() < 3 { 1 } else { -1 };
                expected_success += sign * i64::from(r.primary);
            }
            prop_assert_eq!(acc.compute_net().net_success, expected_success);
        }
    }
}
