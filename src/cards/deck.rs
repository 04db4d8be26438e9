//! Deck factory.

use strum::IntoEnumIterator;

use super::attributes::{Color, Count, Shading, Symbol};
use super::card::SetCard;
use crate::core::identity::IdentityAllocator;

/// Cards in a full deck: 3 values for each of 4 attributes.
pub const DECK_SIZE: usize = 81;

/// Build the full 81-card deck, one card per attribute combination.
///
/// Enumerates count, then symbol, then shading, then color, each in
/// declaration order. Identities are drawn from `ids` in that same order.
///
/// ```
/// use set_game::cards::{build_full_deck, DECK_SIZE};
/// use set_game::core::IdentityAllocator;
///
/// let mut ids = IdentityAllocator::new();
/// let deck = build_full_deck(&mut ids);
///
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0].identity().raw(), 1);
/// ```
#[must_use]
pub fn build_full_deck(ids: &mut IdentityAllocator) -> Vec<SetCard> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for count in Count::iter() {
        for symbol in Symbol::iter() {
            for shading in Shading::iter() {
                for color in Color::iter() {
                    deck.push(SetCard::new(ids.allocate(), count, symbol, shading, color));
                }
            }
        }
    }

    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Attributes;
    use rustc_hash::{FxHashMap, FxHashSet};

    #[test]
    fn test_deck_size() {
        let deck = build_full_deck(&mut IdentityAllocator::new());
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn test_attribute_tuples_distinct() {
        let deck = build_full_deck(&mut IdentityAllocator::new());
        let tuples: FxHashSet<Attributes> = deck.iter().map(SetCard::attributes).collect();
        assert_eq!(tuples.len(), DECK_SIZE);
    }

    #[test]
    fn test_each_value_appears_27_times() {
        let deck = build_full_deck(&mut IdentityAllocator::new());

        let mut counts: FxHashMap<Count, usize> = FxHashMap::default();
        let mut symbols: FxHashMap<Symbol, usize> = FxHashMap::default();
        let mut shadings: FxHashMap<Shading, usize> = FxHashMap::default();
        let mut colors: FxHashMap<Color, usize> = FxHashMap::default();

        for card in &deck {
            *counts.entry(card.count()).or_default() += 1;
            *symbols.entry(card.symbol()).or_default() += 1;
            *shadings.entry(card.shading()).or_default() += 1;
            *colors.entry(card.color()).or_default() += 1;
        }

        assert!(counts.values().all(|&n| n == 27));
        assert!(symbols.values().all(|&n| n == 27));
        assert!(shadings.values().all(|&n| n == 27));
        assert!(colors.values().all(|&n| n == 27));
        assert_eq!(counts.len() + symbols.len() + shadings.len() + colors.len(), 12);
    }

    #[test]
    fn test_enumeration_order_is_deterministic() {
        let first = build_full_deck(&mut IdentityAllocator::new());
        let second = build_full_deck(&mut IdentityAllocator::new());

        let a: Vec<_> = first.iter().map(SetCard::attributes).collect();
        let b: Vec<_> = second.iter().map(SetCard::attributes).collect();
        assert_eq!(a, b);

        assert_eq!(a[0], Attributes::new(Count::One, Symbol::Oval, Shading::Open, Color::Red));
        assert_eq!(a[1], Attributes::new(Count::One, Symbol::Oval, Shading::Open, Color::Green));
        assert_eq!(a[80], Attributes::new(Count::Three, Symbol::Diamond, Shading::Closed, Color::Purple));
    }

    #[test]
    fn test_identities_follow_allocator() {
        let mut ids = IdentityAllocator::new();
        let first = build_full_deck(&mut ids);
        let second = build_full_deck(&mut ids);

        assert_eq!(first[0].identity().raw(), 1);
        assert_eq!(first[80].identity().raw(), 81);
        assert_eq!(second[0].identity().raw(), 82);
        assert_eq!(ids.allocated(), 162);
    }

    #[test]
    fn test_all_cards_unselected() {
        let deck = build_full_deck(&mut IdentityAllocator::new());
        assert!(deck
            .iter()
            .all(|c| c.match_state() == crate::cards::MatchState::Unselected));
    }
}
