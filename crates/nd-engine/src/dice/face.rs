//! Face tables: what each face of each die shows.
//!
//! A face result is stored side-neutrally as primary/secondary/special
//! counts. For light dice these are success/advantage/triumph, for dark
//! dice failure/threat/despair. The sign is applied later, when a pool is
//! netted.

use serde::{Deserialize, Serialize};

use super::DieType;
use crate::error::{EngineError, EngineResult};

/// The symbols printed on a single face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceOutcome {
    /// Success (light) or failure (dark) symbols.
    pub primary: u32,
    /// Advantage (light) or threat (dark) symbols.
    pub secondary: u32,
    /// Triumph (Proficiency) or despair (Challenge) symbols.
    pub special: u32,
}

impl FaceOutcome {
    /// A blank face.
    pub const BLANK: Self = Self::new(0, 0, 0);

    /// Build a face outcome from its three counts.
    pub const fn new(primary: u32, secondary: u32, special: u32) -> Self {
        Self {
            primary,
            secondary,
            special,
        }
    }

    /// Returns true if the face shows no symbols at all.
    pub fn is_blank(&self) -> bool {
        *self == Self::BLANK
    }
}

/// Look up the symbols on `face` of a `die`.
///
/// Faces are numbered from 1. Anything outside `1..=die.sides()` is an
/// [`EngineError::InvalidFace`].
pub fn resolve(die: DieType, face: u32) -> EngineResult<FaceOutcome> {
    let outcome = match (die, face) {
        (DieType::Boost, 1 | 2) => FaceOutcome::BLANK,
        (DieType::Boost, 3) => FaceOutcome::new(1, 0, 0),
        (DieType::Boost, 4) => FaceOutcome::new(1, 1, 0),
        (DieType::Boost, 5) => FaceOutcome::new(0, 2, 0),
        (DieType::Boost, 6) => FaceOutcome::new(0, 1, 0),

        (DieType::Setback, 1 | 2) => FaceOutcome::BLANK,
        (DieType::Setback, 3 | 4) => FaceOutcome::new(1, 0, 0),
        (DieType::Setback, 5 | 6) => FaceOutcome::new(0, 1, 0),

        (DieType::Ability, 1) => FaceOutcome::BLANK,
        (DieType::Ability, 2 | 3) => FaceOutcome::new(1, 0, 0),
        (DieType::Ability, 4) => FaceOutcome::new(2, 0, 0),
        (DieType::Ability, 5 | 6) => FaceOutcome::new(0, 1, 0),
        (DieType::Ability, 7) => FaceOutcome::new(1, 1, 0),
        (DieType::Ability, 8) => FaceOutcome::new(0, 2, 0),

        (DieType::Difficulty, 1) => FaceOutcome::BLANK,
        (DieType::Difficulty, 2) => FaceOutcome::new(1, 0, 0),
        (DieType::Difficulty, 3) => FaceOutcome::new(2, 0, 0),
        (DieType::Difficulty, 4..=6) => FaceOutcome::new(0, 1, 0),
        (DieType::Difficulty, 7) => FaceOutcome::new(0, 2, 0),
        (DieType::Difficulty, 8) => FaceOutcome::new(1, 1, 0),

        (DieType::Proficiency, 1) => FaceOutcome::BLANK,
        (DieType::Proficiency, 2 | 3) => FaceOutcome::new(1, 0, 0),
        (DieType::Proficiency, 4 | 5) => FaceOutcome::new(2, 0, 0),
        (DieType::Proficiency, 6) => FaceOutcome::new(0, 1, 0),
        (DieType::Proficiency, 7..=9) => FaceOutcome::new(1, 1, 0),
        (DieType::Proficiency, 10 | 11) => FaceOutcome::new(0, 2, 0),
        (DieType::Proficiency, 12) => FaceOutcome::new(1, 0, 1),

        (DieType::Challenge, 1) => FaceOutcome::BLANK,
        (DieType::Challenge, 2 | 3) => FaceOutcome::new(1, 0, 0),
        (DieType::Challenge, 4 | 5) => FaceOutcome::new(2, 0, 0),
        (DieType::Challenge, 6 | 7) => FaceOutcome::new(0, 1, 0),
        (DieType::Challenge, 8 | 9) => FaceOutcome::new(1, 1, 0),
        (DieType::Challenge, 10 | 11) => FaceOutcome::new(0, 2, 0),
        (DieType::Challenge, 12) => FaceOutcome::new(1, 0, 1),

        _ => {
            return Err(EngineError::InvalidFace {
                die: die.tag().to_string(),
                face,
                sides: die.sides(),
            });
        }
    };
    Ok(outcome)
}
