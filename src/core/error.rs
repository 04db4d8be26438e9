//! Recoverable errors.
//!
//! Contract violations (an out-of-range card index, a Concentration game
//! with no pairs) panic instead; they are caller bugs, not runtime
//! conditions.

/// Invalid `GameConfig`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("opening deal must be at least one card")]
    EmptyOpeningDeal,

    #[error("deal count must be at least one card")]
    EmptyDeal,

    #[error("opening deal of {requested} cards exceeds the {deck_size}-card deck")]
    OpeningDealTooLarge { requested: usize, deck_size: usize },

    #[error("{field} must not be negative (got {value})")]
    NegativeScore { field: &'static str, value: i64 },
}

/// Failure to encode, decode or restore a `GameSnapshot`.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot config is invalid: {0}")]
    Config(#[from] ConfigError),

    #[error("selected card {0} is not in play")]
    SelectionNotInPlay(crate::core::CardIdentity),

    #[error("snapshot selects {0} cards, at most 3 allowed")]
    SelectionTooLarge(usize),

    #[error("selected card {0} appears more than once")]
    DuplicateSelection(crate::core::CardIdentity),

    #[error("selected card {0} is marked unselected")]
    SelectionUnselected(crate::core::CardIdentity),

    #[error("identity allocator at {allocated} is behind card {highest}")]
    IdentitiesBehind {
        allocated: u32,
        highest: crate::core::CardIdentity,
    },
}
