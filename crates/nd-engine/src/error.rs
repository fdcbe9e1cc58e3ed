//! Error types for the dice engine.

/// Errors that can occur while resolving or accumulating dice.
///
/// None of these are transient: each one means a caller or a random source
/// broke its contract, so the operation is aborted and nothing is mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A face value outside `1..=sides` reached a resolver.
    #[error("face {face} is out of range for a {die} die (1-{sides})")]
    InvalidFace {
        /// Name of the die that was being resolved.
        die: String,
        /// The offending face value.
        face: u32,
        /// Number of sides on that die.
        sides: u32,
    },

    /// A die-type tag that does not name any known die.
    #[error("unknown die type: {0}")]
    UnknownDieType(String),

    /// A dice count that is negative, above [`MAX_DICE_PER_ROLL`], or that
    /// would push a pool total past `u32::MAX`.
    #[error("invalid dice count: {0}")]
    InvalidCount(i64),

    /// A preset configuration document could not be read.
    #[error("invalid presets: {0}")]
    InvalidPresets(String),
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Most dice a single roll call may draw.
///
/// Applies per call to [`roll_dice`](crate::roll_dice) and
/// [`roll_force`](crate::roll_force), and so per die type to every pool
/// operation built on them. Larger requests fail with
/// [`EngineError::InvalidCount`] before anything is drawn.
pub const MAX_DICE_PER_ROLL: u32 = 100;

/// Convert a signed dice count into an unsigned one, rejecting negatives
/// and anything above [`MAX_DICE_PER_ROLL`].
pub(crate) fn checked_count(count: i64) -> EngineResult<u32> {
    u32::try_from(count)
        .ok()
        .filter(|&n| n <= MAX_DICE_PER_ROLL)
        .ok_or(EngineError::InvalidCount(count))
}
