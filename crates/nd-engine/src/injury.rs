//! Critical injury lookup.
//!
//! A critical injury roll is `previous_injuries * 10 + modifier + d100`.
//! The total is looked up in a fixed ascending table; anything below the
//! first threshold is a Minor Nick and anything from 151 up is Dead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::random::RandomSource;

/// How hard an injury is to heal, from 1 (Easy) to 5 (fatal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Tier 1, below 41.
    Easy,
    /// Tier 2, 41 to 90.
    Average,
    /// Tier 3, 91 to 125.
    Hard,
    /// Tier 4, 126 to 150.
    Daunting,
    /// Tier 5, 151 and up.
    Fatal,
}

impl Severity {
    /// Severity tier of a composite injury roll.
    pub fn from_roll(roll: i64) -> Self {
        match roll {
            151.. => Self::Fatal,
            126.. => Self::Daunting,
            91.. => Self::Hard,
            41.. => Self::Average,
            _ => Self::Easy,
        }
    }

    /// Numeric tier, 1 through 5.
    pub fn tier(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Average => 2,
            Self::Hard => 3,
            Self::Daunting => 4,
            Self::Fatal => 5,
        }
    }

    /// Difficulty label used at the table. Fatal injuries have none.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Average => "Average",
            Self::Hard => "Hard",
            Self::Daunting => "Daunting",
            Self::Fatal => "-",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the injury table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjuryEntry {
    /// Lowest composite roll that lands on this row.
    pub min_roll: i64,
    /// Injury name.
    pub name: &'static str,
    /// What the injury does.
    pub description: &'static str,
}

const fn entry(min_roll: i64, name: &'static str, description: &'static str) -> InjuryEntry {
    InjuryEntry {
        min_roll,
        name,
        description,
    }
}

/// The injury table, in ascending order of `min_roll`.
pub const INJURY_TABLE: [InjuryEntry; 29] = [
    entry(i64::MIN, "Minor Nick", "The target suffers 1 strain."),
    entry(
        6,
        "Slowed Down",
        "The target can only act during the last allied initiative slot on their next turn.",
    ),
    entry(11, "Sudden Jolt", "The target drops whatever is in hand."),
    entry(
        16,
        "Distracted",
        "The target cannot perform a free maneuver during their next turn.",
    ),
    entry(21, "Off-Balance", "Add 1 Setback die to the target's next skill check."),
    entry(
        26,
        "Discouraging Wound",
        "Flip one light side Destiny point to the dark side (reverse if NPC).",
    ),
    entry(
        31,
        "Stunned",
        "The target is staggered until the end of their next turn.",
    ),
    entry(36, "Stinger", "Increase the difficulty of the next check by 1."),
    entry(
        41,
        "Bowled Over",
        "The target is knocked prone and suffers 1 strain.",
    ),
    entry(
        46,
        "Head Ringer",
        "The target increases the difficulty of all Intellect and Cunning checks by 1 until the end of the encounter.",
    ),
    entry(
        51,
        "Fearsome Wound",
        "The target increases the difficulty of all Presence and Willpower checks by 1 until the end of the encounter.",
    ),
    entry(
        56,
        "Agonizing Wound",
        "The target increases the difficulty of all Brawn and Agility checks by 1 until the end of the encounter.",
    ),
    entry(
        61,
        "Slightly Dazed",
        "The target is disoriented until the end of the encounter.",
    ),
    entry(
        66,
        "Scattered Senses",
        "The target removes all Boost dice from skill checks until the end of the encounter.",
    ),
    entry(
        71,
        "Hamstrung",
        "The target loses their free maneuver until the end of the encounter.",
    ),
    entry(
        76,
        "Overpowered",
        "The target leaves themselves open, and the attacker may immediately attempt another free attack against them, using the exact same pool as the original attack.",
    ),
    entry(
        81,
        "Winded",
        "Until the end of the encounter, the target cannot voluntarily suffer strain to activate any abilities or gain additional maneuvers.",
    ),
    entry(
        86,
        "Compromised",
        "Increase the difficulty of all skill checks by 1 until the end of the encounter.",
    ),
    entry(
        91,
        "At the Brink",
        "The target suffers 1 strain each time they perform an action.",
    ),
    entry(
        95,
        "Crippled",
        "One of the target's limbs (selected by the GM) is crippled until healed or replaced. Increase the difficulty of all checks that require use of that limb by 1.",
    ),
    entry(
        101,
        "Maimed",
        "One of the target's limbs (selected by the GM) is permanently lost. Unless the target has a cybernetic replacement, they cannot perform actions that would require the use of that limb. All other actions gain 1 Setback die.",
    ),
    entry(
        106,
        "Horrific Injury",
        "Roll 1d10 to pick a characteristic: 1-3 Brawn, 4-6 Agility, 7 Intellect, 8 Cunning, 9 Presence, 10 Willpower. Until this Critical Injury is healed, treat that characteristic as 1 point lower.",
    ),
    entry(
        111,
        "Temporarily Lame",
        "Until this Critical Injury is healed, the target cannot perform more than one maneuver during their turn.",
    ),
    entry(
        116,
        "Blinded",
        "The target can no longer see. Upgrade the difficulty of all checks twice. Upgrade the difficulty of all Perception and Vigilance checks three times.",
    ),
    entry(
        121,
        "Knocked Senseless",
        "The target is staggered for the remainder of the encounter.",
    ),
    entry(
        126,
        "Gruesome Injury",
        "Roll 1d10 to pick a characteristic: 1-3 Brawn, 4-6 Agility, 7 Intellect, 8 Cunning, 9 Presence, 10 Willpower. That characteristic is permanently reduced by 1, to a minimum of 1.",
    ),
    entry(
        131,
        "Bleeding Out",
        "Every round, the target suffers 1 wound and 1 strain at the beginning of their turn. For every five wounds they suffer beyond their wound threshold, they suffer one additional Critical Injury (cannot suffer this one again).",
    ),
    entry(
        141,
        "The End is Nigh",
        "The target will die after the last Initiative slot during the next round.",
    ),
    entry(151, "Dead", "Complete, obliterated death."),
];

/// A resolved critical injury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriticalInjury {
    /// Severity tier.
    pub severity: Severity,
    /// Injury name.
    pub name: &'static str,
    /// What the injury does.
    pub description: &'static str,
}

impl std::fmt::Display for CriticalInjury {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.severity)
    }
}

/// Look up the injury for a composite roll. Every integer resolves.
pub fn resolve_injury(roll: i64) -> CriticalInjury {
    let row = INJURY_TABLE
        .iter()
        .rev()
        .find(|e| roll >= e.min_roll)
        .unwrap_or(&INJURY_TABLE[0]);
    CriticalInjury {
        severity: Severity::from_roll(roll),
        name: row.name,
        description: row.description,
    }
}

/// The inputs to a critical injury roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryRoll {
    /// Critical injuries the target already has.
    pub previous_injuries: u32,
    /// Flat modifier, e.g. from a weapon's Vicious quality.
    pub modifier: i64,
    /// The d100 result.
    pub d100: u32,
}

impl InjuryRoll {
    /// The composite value looked up in the table.
    pub fn total(&self) -> i64 {
        i64::from(self.previous_injuries) * 10 + self.modifier + i64::from(self.d100)
    }

    /// Resolve this roll.
    pub fn resolve(&self) -> CriticalInjury {
        resolve_injury(self.total())
    }
}

/// Draw a d100 and resolve a critical injury.
pub fn roll_injury<R: RandomSource + ?Sized>(
    previous_injuries: u32,
    modifier: i64,
    rng: &mut R,
) -> EngineResult<(InjuryRoll, CriticalInjury)> {
    let d100 = rng.next_int(100);
    if !(1..=100).contains(&d100) {
        return Err(EngineError::InvalidFace {
            die: "d100".to_string(),
            face: d100,
            sides: 100,
        });
    }
    let roll = InjuryRoll {
        previous_injuries,
        modifier,
        d100,
    };
    let injury = roll.resolve();
    debug!(total = roll.total(), injury = injury.name, "rolled critical injury");
    Ok((roll, injury))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    #[test]
    fn table_is_ascending() {
        for pair in INJURY_TABLE.windows(2) {
            assert!(pair[0].min_roll < pair[1].min_roll, "{}", pair[1].name);
        }
    }

    #[test]
    fn lowest_and_highest() {
        let nick = resolve_injury(0);
        assert_eq!(nick.severity.tier(), 1);
        assert_eq!(nick.name, "Minor Nick");
        assert_eq!(resolve_injury(-500).name, "Minor Nick");

        let dead = resolve_injury(151);
        assert_eq!(dead.severity.tier(), 5);
        assert_eq!(dead.name, "Dead");
        assert_eq!(resolve_injury(10_000).name, "Dead");
    }

    #[test]
    fn gruesome_at_126() {
        let r = resolve_injury(126);
        assert_eq!(r.severity.tier(), 4);
        assert_eq!(r.name, "Gruesome Injury");
        assert_eq!(resolve_injury(125).name, "Knocked Senseless");
    }

    #[test]
    fn boundaries() {
        let cases = [
            (5, "Minor Nick"),
            (6, "Slowed Down"),
            (40, "Stinger"),
            (41, "Bowled Over"),
            (90, "Compromised"),
            (91, "At the Brink"),
            (94, "At the Brink"),
            (95, "Crippled"),
            (100, "Crippled"),
            (101, "Maimed"),
            (140, "Bleeding Out"),
            (141, "The End is Nigh"),
            (150, "The End is Nigh"),
        ];
        for (roll, name) in cases {
            assert_eq!(resolve_injury(roll).name, name, "roll {roll}");
        }
    }

    #[test]
    fn severity_buckets() {
        assert_eq!(Severity::from_roll(40), Severity::Easy);
        assert_eq!(Severity::from_roll(41), Severity::Average);
        assert_eq!(Severity::from_roll(90), Severity::Average);
        assert_eq!(Severity::from_roll(91), Severity::Hard);
        assert_eq!(Severity::from_roll(125), Severity::Hard);
        assert_eq!(Severity::from_roll(126), Severity::Daunting);
        assert_eq!(Severity::from_roll(150), Severity::Daunting);
        assert_eq!(Severity::from_roll(151), Severity::Fatal);
    }

    #[test]
    fn severity_labels() {
        assert_eq!(Severity::Easy.to_string(), "Easy");
        assert_eq!(Severity::Daunting.label(), "Daunting");
        assert_eq!(Severity::Fatal.label(), "-");
    }

    #[test]
    fn composite_total() {
        let roll = InjuryRoll {
            previous_injuries: 2,
            modifier: 10,
            d100: 55,
        };
        assert_eq!(roll.total(), 85);
        assert_eq!(roll.resolve().name, "Winded");
    }

    #[test]
    fn roll_draws_one_d100() {
        let mut src = ScriptedSource::new([100]);
        let (roll, injury) = roll_injury(3, 25, &mut src).unwrap();
        assert_eq!(roll.total(), 155);
        assert_eq!(injury.name, "Dead");
        assert_eq!(src.drawn(), 1);
    }

    #[test]
    fn roll_rejects_bad_d100() {
        let mut src = ScriptedSource::new([0]);
        assert!(roll_injury(0, 0, &mut src).is_err());
    }
}
