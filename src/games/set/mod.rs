//! The Set card game.
//!
//! Twelve cards are dealt from an 81-card deck. The player selects three;
//! a valid set scores and is replaced from the deck, an invalid triple
//! costs points. "Deal more" adds three cards when no set is visible.
//!
//! Randomness comes from a seedable `GameRng`, so a session is fully
//! reproducible from its seed.

mod game;
mod snapshot;

pub use game::{SelectionOutcome, SetGame};
pub use snapshot::GameSnapshot;
