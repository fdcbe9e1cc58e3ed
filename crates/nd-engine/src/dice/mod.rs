//! Narrative dice types, face tables, and rolling.
//!
//! Six die types make up a pool. Ability, Proficiency, and Boost are
//! light-side dice whose symbols count in the player's favour; Difficulty,
//! Challenge, and Setback are dark-side dice whose symbols count against.

pub mod face;
pub mod roll;

pub use face::{FaceOutcome, resolve};
pub use roll::{DieTypeResult, roll_dice};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Which side of the pool a die contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Success, advantage, and triumph.
    Light,
    /// Failure, threat, and despair.
    Dark,
}

impl Side {
    /// Names of the primary, secondary, and special symbols on this side.
    pub fn symbol_names(self) -> [&'static str; 3] {
        match self {
            Self::Light => ["success", "advantage", "triumph"],
            Self::Dark => ["failure", "threat", "despair"],
        }
    }
}

/// One of the six pool die types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieType {
    /// Green d8.
    Ability,
    /// Yellow d12, the only source of triumph.
    Proficiency,
    /// Blue d6.
    Boost,
    /// Purple d8.
    Difficulty,
    /// Red d12, the only source of despair.
    Challenge,
    /// Black d6.
    Setback,
}

impl DieType {
    /// Every die type, in pool order.
    pub const ALL: [Self; 6] = [
        Self::Ability,
        Self::Proficiency,
        Self::Boost,
        Self::Difficulty,
        Self::Challenge,
        Self::Setback,
    ];

    /// Returns the number of faces on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::Boost | Self::Setback => 6,
            Self::Ability | Self::Difficulty => 8,
            Self::Proficiency | Self::Challenge => 12,
        }
    }

    /// Returns the side of the pool this die counts toward.
    pub fn side(self) -> Side {
        match self {
            Self::Ability | Self::Proficiency | Self::Boost => Side::Light,
            Self::Difficulty | Self::Challenge | Self::Setback => Side::Dark,
        }
    }

    /// Position of this type within [`DieType::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Ability => 0,
            Self::Proficiency => 1,
            Self::Boost => 2,
            Self::Difficulty => 3,
            Self::Challenge => 4,
            Self::Setback => 5,
        }
    }

    /// Lowercase tag used in configuration and commands.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ability => "ability",
            Self::Proficiency => "proficiency",
            Self::Boost => "boost",
            Self::Difficulty => "difficulty",
            Self::Challenge => "challenge",
            Self::Setback => "setback",
        }
    }

    /// Parse a die type from a tag like "ability" or a shorthand like "a".
    ///
    /// Plural forms ("abilities", "boosts") are accepted as well, since
    /// commands read naturally that way.
    pub fn from_str_tag(s: &str) -> Result<Self, EngineError> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "a" | "ability" | "abilities" => Ok(Self::Ability),
            "p" | "proficiency" | "proficiencies" => Ok(Self::Proficiency),
            "b" | "boost" | "boosts" => Ok(Self::Boost),
            "d" | "difficulty" | "difficulties" => Ok(Self::Difficulty),
            "c" | "challenge" | "challenges" => Ok(Self::Challenge),
            "s" | "setback" | "setbacks" => Ok(Self::Setback),
            _ => Err(EngineError::UnknownDieType(s.trim().to_string())),
        }
    }
}

impl FromStr for DieType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_tag(s)
    }
}

impl std::fmt::Display for DieType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ability => write!(f, "Ability"),
            Self::Proficiency => write!(f, "Proficiency"),
            Self::Boost => write!(f, "Boost"),
            Self::Difficulty => write!(f, "Difficulty"),
            Self::Challenge => write!(f, "Challenge"),
            Self::Setback => write!(f, "Setback"),
        }
    }
}
