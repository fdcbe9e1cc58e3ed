//! The Force die: a d12 showing light or dark pips.
//!
//! Unlike pool dice, light and dark pips never cancel. Both tallies are
//! reported as rolled.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult, checked_count};
use crate::random::RandomSource;

/// Number of faces on the Force die.
pub const FORCE_DIE_SIDES: u32 = 12;

/// What a single Force die face shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForcePips {
    /// One or two light-side pips.
    Light(u32),
    /// One or two dark-side pips.
    Dark(u32),
}

impl ForcePips {
    /// Number of pips on the face, regardless of side.
    pub fn pips(self) -> u32 {
        match self {
            Self::Light(n) | Self::Dark(n) => n,
        }
    }
}

impl std::fmt::Display for ForcePips {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light(n) => write!(f, "{n} light"),
            Self::Dark(n) => write!(f, "{n} dark"),
        }
    }
}

/// Look up the pips on a Force die face (1-12).
pub fn resolve_force(face: u32) -> EngineResult<ForcePips> {
    match face {
        1..=6 => Ok(ForcePips::Dark(1)),
        7 => Ok(ForcePips::Dark(2)),
        8 | 9 => Ok(ForcePips::Light(1)),
        10..=12 => Ok(ForcePips::Light(2)),
        _ => Err(EngineError::InvalidFace {
            die: "force".to_string(),
            face,
            sides: FORCE_DIE_SIDES,
        }),
    }
}

/// Tallies from rolling one or more Force dice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceRollResult {
    /// Total light-side pips.
    pub light_pips: u32,
    /// Total dark-side pips.
    pub dark_pips: u32,
    /// Each die's face, in the order rolled.
    pub faces: Vec<ForcePips>,
}

impl ForceRollResult {
    /// Number of dice rolled.
    pub fn count(&self) -> usize {
        self.faces.len()
    }
}

impl std::fmt::Display for ForceRollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Light, {} Dark", self.light_pips, self.dark_pips)
    }
}

/// Roll `count` Force dice.
///
/// `count` must be in `0..=MAX_DICE_PER_ROLL`; anything else is rejected
/// before a single die is drawn.
pub fn roll_force<R: RandomSource + ?Sized>(
    count: i64,
    rng: &mut R,
) -> EngineResult<ForceRollResult> {
    let count = checked_count(count)?;
    let mut result = ForceRollResult::default();
    for _ in 0..count {
        let pips = resolve_force(rng.next_int(FORCE_DIE_SIDES))?;
        match pips {
            ForcePips::Light(n) => result.light_pips += n,
            ForcePips::Dark(n) => result.dark_pips += n,
        }
        result.faces.push(pips);
    }
    debug!(count, light = result.light_pips, dark = result.dark_pips, "rolled force dice");
    Ok(result)
}
