//! Card attributes for the Set deck.
//!
//! Each card has four attributes with three values apiece:
//!
//! - `Count`: one, two or three symbols
//! - `Symbol`: oval, squiggle, diamond
//! - `Shading`: open, striped, closed
//! - `Color`: red, green, purple
//!
//! All four derive `EnumIter`, and declaration order is the deck
//! enumeration order.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Number of symbols printed on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    /// Numeric value (1, 2 or 3).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Count::One => 1,
            Count::Two => 2,
            Count::Three => 3,
        }
    }

    /// Parse a numeric count. Returns `None` outside `1..=3`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Count::One),
            2 => Some(Count::Two),
            3 => Some(Count::Three),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize, Deserialize)]
pub enum Symbol {
    Oval,
    Squiggle,
    Diamond,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize, Deserialize)]
pub enum Shading {
    Open,
    Striped,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

/// The full attribute tuple of a card.
///
/// Unlike `SetCard`, two `Attributes` compare equal whenever all four
/// values match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Attributes {
    pub count: Count,
    pub symbol: Symbol,
    pub shading: Shading,
    pub color: Color,
}

impl Attributes {
    #[must_use]
    pub const fn new(count: Count, symbol: Symbol, shading: Shading, color: Color) -> Self {
        Self {
            count,
            symbol,
            shading,
            color,
        }
    }
}

impl std::fmt::Display for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:?} {:?} {:?}",
            self.count.value(),
            self.shading,
            self.color,
            self.symbol
        )
    }
}

/// Per-card state used by the selection state machine and read by the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    #[default]
    Unselected,
    /// Selected, triple not yet complete.
    SelectedUnmatched,
    /// Part of a confirmed set, waiting to be discarded.
    GoodMatch,
    /// Part of a triple that was not a set.
    BadMatch,
}
