//! Dice pool resolution engine for narrative tabletop play.
//!
//! Maps die faces to symbols, rolls and accumulates pools of the six
//! narrative die types, nets light against dark, and resolves the two
//! side mechanics: the Force die and critical injuries. Randomness and
//! roll history are injected through [`RandomSource`] and [`HistorySink`].

pub mod dice;
pub mod error;
pub mod force;
pub mod history;
pub mod injury;
pub mod pool;
pub mod preset;
pub mod random;

pub use dice::{DieType, DieTypeResult, FaceOutcome, Side, resolve, roll_dice};
pub use error::{EngineError, EngineResult, MAX_DICE_PER_ROLL};
pub use force::{ForcePips, ForceRollResult, resolve_force, roll_force};
pub use history::{HistorySink, RollRecord};
pub use injury::{CriticalInjury, InjuryRoll, Severity, resolve_injury, roll_injury};
pub use pool::{DiceCounts, Edge, NetPoolResult, Outcome, PoolAccumulator, PoolState};
pub use preset::{HalfPool, PoolPreset, PresetBook};
pub use random::{RandomSource, ScriptedSource};
