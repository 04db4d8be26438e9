//! Card system: attributes, cards, and the deck factory.
//!
//! ## Key Types
//!
//! - `Attributes`: Count, symbol, shading and color of a card
//! - `MatchState`: Selection/match tag the UI renders
//! - `SetCard`: One physical card with a unique `CardIdentity`
//! - `build_full_deck`: The 81-card cross product

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attributes, Color, Count, MatchState, Shading, Symbol};
pub use card::SetCard;
pub use deck::{build_full_deck, DECK_SIZE};
