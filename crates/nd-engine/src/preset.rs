//! Named pool presets.
//!
//! A preset is plain data: a name and a [`DiceCounts`]. The built-in book
//! holds the common half-pools players reach for most, each available as a
//! light-side ("good") and a dark-side ("bad") version. Tables can replace
//! it with their own book loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::dice::DieType;
use crate::error::{EngineError, EngineResult};
use crate::pool::DiceCounts;

/// Common half-pools as `(green, yellow, blue)` counts.
///
/// On the light side these are Ability, Proficiency, Boost; on the dark
/// side Difficulty, Challenge, Setback.
const COMMON_HALF_POOLS: [(u32, u32, u32); 17] = [
    (4, 0, 0),
    (5, 0, 0),
    (6, 0, 0),
    (1, 1, 0),
    (2, 1, 0),
    (3, 1, 0),
    (4, 1, 0),
    (5, 1, 0),
    (1, 2, 0),
    (2, 2, 0),
    (3, 2, 0),
    (4, 2, 0),
    (1, 3, 0),
    (2, 3, 0),
    (0, 4, 0),
    (1, 4, 0),
    (0, 5, 0),
];

/// Which half of the pool a common half-pool fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HalfPool {
    /// Ability, Proficiency, Boost.
    Good,
    /// Difficulty, Challenge, Setback.
    Bad,
}

impl HalfPool {
    /// Expand `(base, upgraded, bonus)` counts onto this half of a pool.
    pub fn counts(self, base: u32, upgraded: u32, bonus: u32) -> DiceCounts {
        let (base_die, upgraded_die, bonus_die) = match self {
            Self::Good => (DieType::Ability, DieType::Proficiency, DieType::Boost),
            Self::Bad => (DieType::Difficulty, DieType::Challenge, DieType::Setback),
        };
        DiceCounts::new()
            .with(base_die, base)
            .with(upgraded_die, upgraded)
            .with(bonus_die, bonus)
    }
}

/// A named pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolPreset {
    /// Display name, unique within a book.
    pub name: String,
    /// Dice this preset adds.
    pub counts: DiceCounts,
}

impl PoolPreset {
    /// Create a preset.
    pub fn new(name: impl Into<String>, counts: DiceCounts) -> Self {
        Self {
            name: name.into(),
            counts,
        }
    }
}

impl std::fmt::Display for PoolPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.counts)
    }
}

/// An ordered collection of presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetBook {
    /// Presets in display order.
    pub presets: Vec<PoolPreset>,
}

impl Default for PresetBook {
    fn default() -> Self {
        Self::common()
    }
}

impl PresetBook {
    /// The built-in book: every common half-pool, good side first.
    pub fn common() -> Self {
        let presets = [HalfPool::Good, HalfPool::Bad]
            .into_iter()
            .flat_map(|half| {
                COMMON_HALF_POOLS.iter().map(move |&(base, upgraded, bonus)| {
                    let counts = half.counts(base, upgraded, bonus);
                    PoolPreset::new(counts.to_string(), counts)
                })
            })
            .collect();
        Self { presets }
    }

    /// Parse a book from a JSON document.
    ///
    /// Names must be non-empty and unique (case-insensitively).
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let book: Self =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidPresets(e.to_string()))?;
        let mut seen = std::collections::HashSet::new();
        for preset in &book.presets {
            let key = preset.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(EngineError::InvalidPresets(
                    "preset name must not be empty".to_string(),
                ));
            }
            if !seen.insert(key) {
                return Err(EngineError::InvalidPresets(format!(
                    "duplicate preset name: {}",
                    preset.name
                )));
            }
        }
        Ok(book)
    }

    /// Serialize the book as pretty-printed JSON.
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::InvalidPresets(e.to_string()))
    }

    /// Find a preset by 1-based position or case-insensitive name.
    pub fn find(&self, key: &str) -> Option<&PoolPreset> {
        let key = key.trim();
        if let Ok(n) = key.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| self.presets.get(i));
        }
        self.presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(key))
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the book has no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
