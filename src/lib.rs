//! # set-game
//!
//! Rules engine for the Set card game, plus a Concentration engine.
//!
//! ## Design Principles
//!
//! 1. **Pull-Based**: The UI calls an operation, then re-reads state.
//!    The engine emits no events or callbacks.
//!
//! 2. **Deterministic**: All randomness flows through a seedable
//!    `GameRng`; the same seed replays the same game.
//!
//! 3. **Explicit Identity**: Card identities come from an allocator owned
//!    by the session, never from global state.
//!
//! ## Modules
//!
//! - `core`: Card identities, RNG, configuration, errors
//! - `cards`: Set card attributes, cards and the deck factory
//! - `rules`: Set detection
//! - `games`: The Set session engine and Concentration
//!
//! ## Example
//!
//! ```
//! use set_game::{GameConfig, SetGame};
//!
//! let mut game = SetGame::new(GameConfig::default().with_seed(7)).unwrap();
//! game.deal_opening_hand();
//!
//! if let Some([a, b, c]) = game.available_sets().first().copied() {
//!     game.change_selection(a);
//!     game.change_selection(b);
//!     let outcome = game.change_selection(c);
//!     assert!(outcome.set_found());
//!
//!     game.replace_matched();
//!     assert_eq!(game.score(), 5);
//! }
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CardIdentity, IdentityAllocator,
    GameRng, GameRngState,
    DealPolicy, GameConfig,
    ConfigError, SnapshotError,
};

pub use crate::cards::{
    Attributes, Color, Count, MatchState, Shading, Symbol,
    SetCard, build_full_deck, DECK_SIZE,
};

pub use crate::rules::{check_triple, find_sets, is_valid_set, SetCheck};

pub use crate::games::set::{GameSnapshot, SelectionOutcome, SetGame};
pub use crate::games::concentration::{ChooseOutcome, ConcentrationCard, ConcentrationGame};
