//! Concentration game state.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{CardIdentity, GameRng, IdentityAllocator};

/// One Concentration card. The two cards of a pair share `pair`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcentrationCard {
    pub identity: CardIdentity,
    pub pair: u32,
    pub is_face_up: bool,
    pub is_matched: bool,
}

impl ConcentrationCard {
    fn new(identity: CardIdentity, pair: u32) -> Self {
        Self {
            identity,
            pair,
            is_face_up: false,
            is_matched: false,
        }
    }
}

/// What `choose_card` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// Card already matched.
    Ignored,
    /// Flipped face-up as the first card of a new attempt.
    Flipped,
    /// Completed a pair.
    Matched,
    /// Second card did not match; both stay face-up until the next choice.
    Mismatched,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConcentrationGame {
    cards: Vec<ConcentrationCard>,
    flip_count: u32,
}

impl ConcentrationGame {
    /// Deal `pairs` pairs, shuffled with `rng`.
    ///
    /// # Panics
    ///
    /// Panics if `pairs` is zero.
    #[must_use]
    pub fn new(pairs: u32, rng: &mut GameRng) -> Self {
        assert!(pairs > 0, "ConcentrationGame::new({}): need at least one pair of cards", pairs);

        let mut ids = IdentityAllocator::new();
        let mut cards = Vec::with_capacity(pairs as usize * 2);
        for pair in 0..pairs {
            cards.push(ConcentrationCard::new(ids.allocate(), pair));
            cards.push(ConcentrationCard::new(ids.allocate(), pair));
        }
        rng.shuffle(&mut cards);

        debug!(pairs, "new concentration game");
        Self { cards, flip_count: 0 }
    }

    /// The only face-up card that is not yet matched, if there is exactly one.
    fn one_and_only_face_up(&self) -> Option<usize> {
        let mut face_up = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_face_up && !c.is_matched)
            .map(|(i, _)| i);

        match (face_up.next(), face_up.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }

    /// Flip the card at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn choose_card(&mut self, index: usize) -> ChooseOutcome {
        assert!(
            index < self.cards.len(),
            "choose_card({}): index not in the {} cards",
            index,
            self.cards.len()
        );
        self.flip_count += 1;

        if self.cards[index].is_matched {
            return ChooseOutcome::Ignored;
        }

        let outcome = match self.one_and_only_face_up() {
            Some(other) if other != index => {
                self.cards[index].is_face_up = true;
                if self.cards[other].pair == self.cards[index].pair {
                    self.cards[other].is_matched = true;
                    self.cards[index].is_matched = true;
                    ChooseOutcome::Matched
                } else {
                    ChooseOutcome::Mismatched
                }
            }
            _ => {
                for (i, card) in self.cards.iter_mut().enumerate() {
                    if !card.is_matched {
                        card.is_face_up = i == index;
                    }
                }
                ChooseOutcome::Flipped
            }
        };

        trace!(index, ?outcome, flips = self.flip_count, "card chosen");
        outcome
    }

    #[must_use]
    pub fn cards(&self) -> &[ConcentrationCard] {
        &self.cards
    }

    /// Every `choose_card` call, including ignored ones.
    #[must_use]
    pub fn flip_count(&self) -> u32 {
        self.flip_count
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched)
    }
}
