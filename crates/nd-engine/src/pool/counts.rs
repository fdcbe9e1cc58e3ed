//! Per-type dice counts.

use serde::{Deserialize, Serialize};

use crate::dice::{DieType, Side};

/// How many dice of each type make up a pool.
///
/// Used for history records, presets, and re-rolling a pool of the same
/// size. Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceCounts {
    /// Ability dice.
    pub ability: u32,
    /// Proficiency dice.
    pub proficiency: u32,
    /// Boost dice.
    pub boost: u32,
    /// Difficulty dice.
    pub difficulty: u32,
    /// Challenge dice.
    pub challenge: u32,
    /// Setback dice.
    pub setback: u32,
}

impl DiceCounts {
    /// Counts with every type at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for one type.
    pub fn with(mut self, die: DieType, count: u32) -> Self {
        self.set(die, count);
        self
    }

    /// Number of dice of the given type.
    pub fn get(&self, die: DieType) -> u32 {
        match die {
            DieType::Ability => self.ability,
            DieType::Proficiency => self.proficiency,
            DieType::Boost => self.boost,
            DieType::Difficulty => self.difficulty,
            DieType::Challenge => self.challenge,
            DieType::Setback => self.setback,
        }
    }

    /// Set the number of dice of the given type.
    pub fn set(&mut self, die: DieType, count: u32) {
        let slot = match die {
            DieType::Ability => &mut self.ability,
            DieType::Proficiency => &mut self.proficiency,
            DieType::Boost => &mut self.boost,
            DieType::Difficulty => &mut self.difficulty,
            DieType::Challenge => &mut self.challenge,
            DieType::Setback => &mut self.setback,
        };
        *slot = count;
    }

    /// Iterate `(type, count)` pairs in pool order, including zeros.
    pub fn iter(&self) -> impl Iterator<Item = (DieType, u32)> + '_ {
        DieType::ALL
            .into_iter()
            .map(move |die| (die, self.get(die)))
    }

    /// Total number of dice across all types.
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, n)| n).sum()
    }

    /// Total number of dice on one side of the pool.
    pub fn side_total(&self, side: Side) -> u32 {
        self.iter()
            .filter(|(die, _)| die.side() == side)
            .map(|(_, n)| n)
            .sum()
    }

    /// Returns true if there are no dice at all.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl std::fmt::Display for DiceCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(die, n)| format!("{n} {die}"))
            .collect();
        if parts.is_empty() {
            write!(f, "no dice")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}
