//! Rolling several dice of one type and totalling their symbols.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DieType;
use super::face::resolve;
use crate::error::{EngineResult, checked_count};
use crate::random::RandomSource;

/// Aggregate symbols from rolling some number of dice of one type.
///
/// All fields are unsigned. Whether `primary` and `secondary` help or hurt
/// is decided by the die's [`Side`](super::Side) when the pool is netted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieTypeResult {
    /// How many dice were rolled.
    pub count: u32,
    /// Success or failure symbols.
    pub primary: u32,
    /// Advantage or threat symbols.
    pub secondary: u32,
    /// Triumph or despair symbols (always 0 for dice without them).
    pub special: u32,
}

impl DieTypeResult {
    /// Returns true if no dice of this type were rolled.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Field-wise sum of two results, or `None` if any field would overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            count: self.count.checked_add(rhs.count)?,
            primary: self.primary.checked_add(rhs.primary)?,
            secondary: self.secondary.checked_add(rhs.secondary)?,
            special: self.special.checked_add(rhs.special)?,
        })
    }
}

/// Roll `count` dice of type `die` and total their symbols.
///
/// Draws exactly `count` faces from `rng`, in one uninterrupted sequence.
/// A count of zero draws nothing and yields an all-zero result. A negative
/// count, a count above [`MAX_DICE_PER_ROLL`](crate::MAX_DICE_PER_ROLL), or
/// a face the source should never have produced aborts the roll.
pub fn roll_dice<R: RandomSource + ?Sized>(
    die: DieType,
    count: i64,
    rng: &mut R,
) -> EngineResult<DieTypeResult> {
    let count = checked_count(count)?;
    let mut result = DieTypeResult {
        count,
        ..DieTypeResult::default()
    };

    for _ in 0..count {
        let face = rng.next_int(die.sides());
        let outcome = resolve(die, face)?;
        result.primary += outcome.primary;
        result.secondary += outcome.secondary;
        result.special += outcome.special;
    }

    debug!(die = %die, count, ?result, "rolled dice");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EngineError, MAX_DICE_PER_ROLL};
    use crate::random::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_dice_is_all_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for die in DieType::ALL {
            let r = roll_dice(die, 0, &mut rng).unwrap();
            assert_eq!(r, DieTypeResult::default());
            assert!(r.is_empty());
        }
    }

    #[test]
    fn zero_dice_draws_nothing() {
        let mut src = ScriptedSource::new([4, 4]);
        roll_dice(DieType::Ability, 0, &mut src).unwrap();
        assert_eq!(src.drawn(), 0);
    }

    #[test]
    fn sums_scripted_faces() {
        // Ability: 4 = 2 success, 7 = success + advantage, 8 = 2 advantage
        let mut src = ScriptedSource::new([4, 7, 8]);
        let r = roll_dice(DieType::Ability, 3, &mut src).unwrap();
        assert_eq!(
            r,
            DieTypeResult {
                count: 3,
                primary: 3,
                secondary: 3,
                special: 0,
            }
        );
        assert_eq!(src.drawn(), 3);
    }

    #[test]
    fn proficiency_counts_triumph() {
        let mut src = ScriptedSource::new([12, 12, 1]);
        let r = roll_dice(DieType::Proficiency, 3, &mut src).unwrap();
        assert_eq!(r.primary, 2);
        assert_eq!(r.special, 2);
    }

    #[test]
    fn negative_count_rejected() {
        let mut src = ScriptedSource::new([1]);
        assert_eq!(
            roll_dice(DieType::Boost, -2, &mut src),
            Err(EngineError::InvalidCount(-2))
        );
        assert_eq!(src.drawn(), 0);
    }

    #[test]
    fn out_of_range_face_aborts() {
        let mut src = ScriptedSource::new([3, 9]);
        assert!(matches!(
            roll_dice(DieType::Setback, 2, &mut src),
            Err(EngineError::InvalidFace { face: 9, .. })
        ));
    }

    #[test]
    fn seeded_rolls_stay_within_face_maxima() {
        let mut rng = StdRng::seed_from_u64(42);
        let r = roll_dice(DieType::Challenge, 50, &mut rng).unwrap();
        assert_eq!(r.count, 50);
        // No challenge face carries more than two symbols of a kind.
        assert!(r.primary <= 100);
        assert!(r.secondary <= 100);
        assert!(r.special <= 50);
    }

    #[test]
    fn checked_add_is_field_wise() {
        let a = DieTypeResult {
            count: 2,
            primary: 1,
            secondary: 0,
            special: 0,
        };
        let b = DieTypeResult {
            count: 1,
            primary: 0,
            secondary: 2,
            special: 1,
        };
        assert_eq!(
            a.checked_add(b),
            Some(DieTypeResult {
                count: 3,
                primary: 1,
                secondary: 2,
                special: 1,
            })
        );
    }

    #[test]
    fn checked_add_detects_overflow() {
        let full = DieTypeResult {
            count: u32::MAX,
            ..DieTypeResult::default()
        };
        let one = DieTypeResult {
            count: 1,
            ..DieTypeResult::default()
        };
        assert_eq!(full.checked_add(one), None);
    }

    #[test]
    fn roll_at_dice_limit() {
        let mut rng = StdRng::seed_from_u64(9);
        let r = roll_dice(DieType::Boost, i64::from(MAX_DICE_PER_ROLL), &mut rng).unwrap();
        assert_eq!(r.count, MAX_DICE_PER_ROLL);
    }

    #[test]
    fn roll_past_dice_limit_draws_nothing() {
        let mut src = ScriptedSource::default();
        let past = i64::from(MAX_DICE_PER_ROLL) + 1;
        assert_eq!(
            roll_dice(DieType::Boost, past, &mut src),
            Err(EngineError::InvalidCount(past))
        );
        assert_eq!(src.drawn(), 0);
    }
}
