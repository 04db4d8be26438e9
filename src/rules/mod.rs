//! Matching rules.
//!
//! Pure functions over cards; no game state. The Set engine calls
//! `check_triple` whenever a selection reaches three cards.

pub mod detector;

pub use detector::{check_triple, find_sets, is_valid_set, SetCheck};
