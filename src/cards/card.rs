//! Set cards.
//!
//! A `SetCard` is one physical card: an immutable attribute tuple, a
//! mutable `MatchState`, and the `CardIdentity` that makes it distinct from
//! every other card. Equality and hashing look at the identity only, so a
//! UI can select "this card" even if the attribute tuple ever repeated.

use serde::{Deserialize, Serialize};

use super::attributes::{Attributes, Color, Count, MatchState, Shading, Symbol};
use crate::core::identity::CardIdentity;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetCard {
    identity: CardIdentity,
    attributes: Attributes,
    match_state: MatchState,
}

impl PartialEq for SetCard {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for SetCard {}

impl std::hash::Hash for SetCard {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.identity.hash(hasher);
    }
}

impl SetCard {
    /// Create an unselected card.
    #[must_use]
    pub fn new(identity: CardIdentity, count: Count, symbol: Symbol, shading: Shading, color: Color) -> Self {
        Self::from_attributes(identity, Attributes::new(count, symbol, shading, color))
    }

    /// Create an unselected card from an attribute tuple.
    #[must_use]
    pub fn from_attributes(identity: CardIdentity, attributes: Attributes) -> Self {
        Self {
            identity,
            attributes,
            match_state: MatchState::Unselected,
        }
    }

    #[must_use]
    pub fn identity(&self) -> CardIdentity {
        self.identity
    }

    #[must_use]
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    #[must_use]
    pub fn count(&self) -> Count {
        self.attributes.count
    }

    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.attributes.symbol
    }

    #[must_use]
    pub fn shading(&self) -> Shading {
        self.attributes.shading
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.attributes.color
    }

    #[must_use]
    pub fn match_state(&self) -> MatchState {
        self.match_state
    }

    pub fn set_match_state(&mut self, state: MatchState) {
        self.match_state = state;
    }
}

impl std::fmt::Display for SetCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.identity, self.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32) -> SetCard {
        SetCard::new(CardIdentity(id), Count::One, Symbol::Oval, Shading::Open, Color::Red)
    }

    #[test]
    fn test_new_card_is_unselected() {
        let card = card(1);
        assert_eq!(card.match_state(), MatchState::Unselected);
        assert_eq!(card.count(), Count::One);
        assert_eq!(card.symbol(), Symbol::Oval);
        assert_eq!(card.shading(), Shading::Open);
        assert_eq!(card.color(), Color::Red);
    }

    #[test]
    fn test_equality_is_by_identity() {
        // Same attributes, different identity
        assert_ne!(card(1), card(2));

        // Same identity, different state
        let mut selected = card(1);
        selected.set_match_state(MatchState::SelectedUnmatched);
        assert_eq!(card(1), selected);
    }

    #[test]
    fn test_hash_is_by_identity() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let plain = card(7);
        let mut matched = card(7);
        matched.set_match_state(MatchState::GoodMatch);

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        plain.hash(&mut h1);
        matched.hash(&mut h2);

        assert_eq!(h1.finish(), h2.finish());
    }

    #[test]
    fn test_set_match_state() {
        let mut card = card(1);
        card.set_match_state(MatchState::BadMatch);
        assert_eq!(card.match_state(), MatchState::BadMatch);
        // Attributes untouched
        assert_eq!(card.attributes(), Attributes::new(Count::One, Symbol::Oval, Shading::Open, Color::Red));
    }

    #[test]
    fn test_card_serialization() {
        let mut card = card(3);
        card.set_match_state(MatchState::GoodMatch);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: SetCard = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
        assert_eq!(deserialized.match_state(), MatchState::GoodMatch);
        assert_eq!(deserialized.attributes(), card.attributes());
    }
}
