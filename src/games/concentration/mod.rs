//! Concentration (memory) game.
//!
//! Pairs of cards are shuffled face-down. Flip two: equal pairs stay
//! matched, unequal ones stay face-up until the next flip turns them back.

mod game;

pub use game::{ChooseOutcome, ConcentrationCard, ConcentrationGame};
