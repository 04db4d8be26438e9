//! Set detection.
//!
//! Three cards form a set when, for each of the four attributes, the three
//! values are all the same or all different. Put the other way: no
//! attribute may show exactly two distinct values.

use std::hash::Hash;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::SetCard;

/// Result of checking the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetCheck {
    /// Fewer than three cards to judge.
    Pending,
    ValidSet,
    InvalidSet,
}

impl SetCheck {
    #[must_use]
    pub fn is_valid_set(self) -> bool {
        self == SetCheck::ValidSet
    }

    #[must_use]
    pub fn is_resolved(self) -> bool {
        self != SetCheck::Pending
    }
}

fn distinct<T: Eq + Hash>(values: [T; 3]) -> usize {
    values.into_iter().collect::<FxHashSet<_>>().len()
}

/// Decide whether three cards form a set.
#[must_use]
pub fn is_valid_set(a: &SetCard, b: &SetCard, c: &SetCard) -> bool {
    if distinct([a.count(), b.count(), c.count()]) == 2 {
        return false;
    }
    if distinct([a.symbol(), b.symbol(), c.symbol()]) == 2 {
        return false;
    }
    if distinct([a.shading(), b.shading(), c.shading()]) == 2 {
        return false;
    }
    distinct([a.color(), b.color(), c.color()]) != 2
}

/// Check a selection of any size.
///
/// Only an exact triple is judged; anything else is `Pending`.
#[must_use]
pub fn check_triple(cards: &[SetCard]) -> SetCheck {
    match cards {
        [a, b, c] if is_valid_set(a, b, c) => SetCheck::ValidSet,
        [_, _, _] => SetCheck::InvalidSet,
        _ => SetCheck::Pending,
    }
}

/// Find every set among `cards`.
///
/// Returns index triples `[i, j, k]` with `i < j < k`, in lexicographic
/// order.
#[must_use]
pub fn find_sets(cards: &[SetCard]) -> Vec<[usize; 3]> {
    let mut sets = Vec::new();
    let n = cards.len();

    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_valid_set(&cards[i], &cards[j], &cards[k]) {
                    sets.push([i, j, k]);
                }
            }
        }
    }

    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{build_full_deck, Color, Count, Shading, Symbol};
    use crate::core::{CardIdentity, IdentityAllocator};

    fn card(id: u32, count: Count, symbol: Symbol, shading: Shading, color: Color) -> SetCard {
        SetCard::new(CardIdentity(id), count, symbol, shading, color)
    }

    #[test]
    fn test_count_varies_others_constant() {
        let a = card(1, Count::One, Symbol::Oval, Shading::Open, Color::Red);
        let b = card(2, Count::Two, Symbol::Oval, Shading::Open, Color::Red);
        let c = card(3, Count::Three, Symbol::Oval, Shading::Open, Color::Red);

        assert!(is_valid_set(&a, &b, &c));
    }

    #[test]
    fn test_two_of_three_symbols_is_invalid() {
        let a = card(1, Count::One, Symbol::Oval, Shading::Open, Color::Red);
        let b = card(2, Count::Two, Symbol::Squiggle, Shading::Open, Color::Red);
        let c = card(3, Count::Three, Symbol::Oval, Shading::Open, Color::Red);

        assert!(!is_valid_set(&a, &b, &c));
    }

    #[test]
    fn test_all_attributes_different() {
        let a = card(1, Count::One, Symbol::Oval, Shading::Open, Color::Red);
        let b = card(2, Count::Two, Symbol::Squiggle, Shading::Striped, Color::Green);
        let c = card(3, Count::Three, Symbol::Diamond, Shading::Closed, Color::Purple);

        assert!(is_valid_set(&a, &b, &c));
    }

    #[test]
    fn test_only_color_breaks() {
        let a = card(1, Count::One, Symbol::Oval, Shading::Open, Color::Red);
        let b = card(2, Count::Two, Symbol::Squiggle, Shading::Striped, Color::Red);
        let c = card(3, Count::Three, Symbol::Diamond, Shading::Closed, Color::Purple);

        assert!(!is_valid_set(&a, &b, &c));
    }

    #[test]
    fn test_check_triple_sizes() {
        let deck = build_full_deck(&mut IdentityAllocator::new());

        assert_eq!(check_triple(&[]), SetCheck::Pending);
        assert_eq!(check_triple(&deck[..1]), SetCheck::Pending);
        assert_eq!(check_triple(&deck[..2]), SetCheck::Pending);
        assert_eq!(check_triple(&deck[..4]), SetCheck::Pending);

        // Deck order varies color fastest: red, green, purple
        assert_eq!(check_triple(&deck[..3]), SetCheck::ValidSet);
        assert_eq!(check_triple(&deck[1..4]), SetCheck::InvalidSet);
    }

    #[test]
    fn test_set_check_helpers() {
        assert!(SetCheck::ValidSet.is_valid_set());
        assert!(!SetCheck::InvalidSet.is_valid_set());
        assert!(!SetCheck::Pending.is_resolved());
        assert!(SetCheck::InvalidSet.is_resolved());
    }

    #[test]
    fn test_find_sets_full_deck() {
        // Any two cards complete exactly one set: 81 * 80 / 6 = 1080
        let deck = build_full_deck(&mut IdentityAllocator::new());
        assert_eq!(find_sets(&deck).len(), 1080);
    }

    #[test]
    fn test_find_sets_small() {
        let deck = build_full_deck(&mut IdentityAllocator::new());
        assert_eq!(find_sets(&deck[..3]), vec![[0, 1, 2]]);
        assert!(find_sets(&deck[1..4]).is_empty());
        assert!(find_sets(&deck[..2]).is_empty());
    }
}
