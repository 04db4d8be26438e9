//! Set game session.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::cards::{build_full_deck, MatchState, SetCard};
use crate::core::{CardIdentity, ConfigError, DealPolicy, GameConfig, GameRng, IdentityAllocator};
use crate::rules::{check_triple, find_sets, SetCheck};

/// What a touch did, so the caller knows whether to discard and deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// Classification made by this touch. `Pending` unless this touch
    /// completed a triple.
    pub check: SetCheck,

    /// A confirmed set is still in play, waiting for `remove_matched_cards`.
    pub discard_matched: bool,
}

impl SelectionOutcome {
    /// Did this touch confirm a set?
    #[must_use]
    pub fn set_found(&self) -> bool {
        self.check.is_valid_set()
    }
}

/// One Set play session.
///
/// Owns the deck, the cards in play, the current selection and the score.
/// The UI drives it through `deal`, `change_selection`,
/// `remove_matched_cards` and `shuffle_cards_in_play`, then re-reads state.
///
/// ## Selection lag
///
/// A completed triple stays selected (tagged `GoodMatch` or `BadMatch`)
/// until the next touch, so the UI can show the result before it clears.
///
/// ```
/// use set_game::core::GameConfig;
/// use set_game::games::set::SetGame;
///
/// let mut game = SetGame::new(GameConfig::default().with_seed(42)).unwrap();
/// game.deal_opening_hand();
///
/// assert_eq!(game.cards_in_play().len(), 12);
/// assert_eq!(game.cards_remaining(), 69);
/// assert_eq!(game.score(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct SetGame {
    config: GameConfig,
    rng: GameRng,
    identities: IdentityAllocator,
    /// Undealt cards. Order has no meaning; draws pick a random index.
    deck: Vector<SetCard>,
    cards_in_play: Vector<SetCard>,
    /// Insertion-ordered, at most three.
    selected: SmallVec<[CardIdentity; 3]>,
    score: i64,
}

impl SetGame {
    /// Create a session with an RNG seeded from `config.seed`.
    ///
    /// With no seed configured a fresh random seed is drawn.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_random_seed(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a session that draws all randomness from `rng`.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut game = Self {
            config,
            rng,
            identities: IdentityAllocator::new(),
            deck: Vector::new(),
            cards_in_play: Vector::new(),
            selected: SmallVec::new(),
            score: 0,
        };
        game.new_game();
        Ok(game)
    }

    pub(super) fn from_parts(
        config: GameConfig,
        rng: GameRng,
        identities: IdentityAllocator,
        deck: Vector<SetCard>,
        cards_in_play: Vector<SetCard>,
        selected: SmallVec<[CardIdentity; 3]>,
        score: i64,
    ) -> Self {
        Self {
            config,
            rng,
            identities,
            deck,
            cards_in_play,
            selected,
            score,
        }
    }

    /// Start over: full deck, nothing in play, nothing selected, score 0.
    ///
    /// Card identities keep increasing across games of one session.
    pub fn new_game(&mut self) {
        self.deck = build_full_deck(&mut self.identities).into_iter().collect();
        self.cards_in_play = Vector::new();
        self.selected.clear();
        self.score = 0;

        info!(seed = self.rng.seed(), deck = self.deck.len(), "new set game");
    }

    // === Dealing ===

    /// Move cards from the deck into play, drawn uniformly at random.
    ///
    /// Shortfalls follow `config.deal_policy`. Selection and match states
    /// are left alone. Returns how many cards were dealt.
    pub fn deal(&mut self, count: usize) -> usize {
        let remaining = self.deck.len();
        let dealt = match self.config.deal_policy {
            DealPolicy::UpToCount => count.min(remaining),
            DealPolicy::WholeDealOnly if remaining >= count => count,
            DealPolicy::WholeDealOnly => 0,
        };

        for _ in 0..dealt {
            let index = self.rng.gen_range_usize(0..self.deck.len());
            let card = self.deck.remove(index);
            self.cards_in_play.push_back(card);
        }

        debug!(
            requested = count,
            dealt,
            remaining = self.deck.len(),
            in_play = self.cards_in_play.len(),
            "dealt cards"
        );
        dealt
    }

    /// Deal the configured opening hand (12 by default).
    pub fn deal_opening_hand(&mut self) -> usize {
        self.deal(self.config.opening_deal)
    }

    /// Deal the configured "more cards" count (3 by default).
    pub fn deal_more(&mut self) -> usize {
        self.deal(self.config.deal_count)
    }

    /// Discard the confirmed set and deal as many cards as were removed.
    ///
    /// Returns `(removed, dealt)`.
    pub fn replace_matched(&mut self) -> (usize, usize) {
        let removed = self.remove_matched_cards();
        let dealt = if removed > 0 { self.deal(removed) } else { 0 };
        (removed, dealt)
    }

    // === Selection ===

    /// Touch the card at `index` in `cards_in_play`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; callers derive indices from
    /// `cards_in_play`, so a bad index is a caller bug.
    pub fn change_selection(&mut self, index: usize) -> SelectionOutcome {
        assert!(
            index < self.cards_in_play.len(),
            "change_selection({}): index out of range for {} cards in play",
            index,
            self.cards_in_play.len()
        );
        let touched = self.cards_in_play[index].identity();

        if self.selected.len() == 3 {
            self.clear_resolved_triple(touched);
        }

        let mut check = SetCheck::Pending;
        match self.cards_in_play[index].match_state() {
            MatchState::SelectedUnmatched => {
                self.selected.retain(|id| *id != touched);
                self.set_state(touched, MatchState::Unselected);
                trace!(card = %touched, "deselected");
            }
            MatchState::Unselected => {
                self.reset_bad_matches();
                self.set_state(touched, MatchState::SelectedUnmatched);
                self.selected.push(touched);
                trace!(card = %touched, selected = self.selected.len(), "selected");

                if self.selected.len() == 3 {
                    check = self.resolve_triple();
                }
            }
            MatchState::GoodMatch | MatchState::BadMatch => {
                trace!(card = %touched, "touch ignored");
            }
        }

        SelectionOutcome {
            check,
            discard_matched: self.has_matched_cards(),
        }
    }

    /// Drop the pending triple from the selection. A failed triple is reset
    /// to unselected unless the touch landed on one of its own cards.
    fn clear_resolved_triple(&mut self, touched: CardIdentity) {
        let was_set = check_triple(&self.selected_cards()).is_valid_set();

        if !was_set && !self.selected.contains(&touched) {
            let triple = std::mem::take(&mut self.selected);
            for id in triple {
                self.set_state(id, MatchState::Unselected);
            }
        }
        self.selected.clear();
    }

    fn reset_bad_matches(&mut self) {
        for card in self.cards_in_play.iter_mut() {
            if card.match_state() == MatchState::BadMatch {
                card.set_match_state(MatchState::Unselected);
            }
        }
    }

    fn resolve_triple(&mut self) -> SetCheck {
        let check = check_triple(&self.selected_cards());
        let (state, delta) = if check.is_valid_set() {
            (MatchState::GoodMatch, self.config.match_reward)
        } else {
            (MatchState::BadMatch, -self.config.mismatch_penalty)
        };

        for id in self.selected.clone() {
            self.set_state(id, state);
        }
        self.score += delta;

        debug!(?check, delta, score = self.score, "triple resolved");
        check
    }

    fn set_state(&mut self, identity: CardIdentity, state: MatchState) {
        if let Some(card) = self.cards_in_play.iter_mut().find(|c| c.identity() == identity) {
            card.set_match_state(state);
        }
    }

    // === Discard ===

    /// Remove every `GoodMatch` card from play. Returns how many left.
    ///
    /// Removed cards also leave the selection.
    pub fn remove_matched_cards(&mut self) -> usize {
        let before = self.cards_in_play.len();
        self.cards_in_play = self
            .cards_in_play
            .iter()
            .filter(|c| c.match_state() != MatchState::GoodMatch)
            .cloned()
            .collect();

        let in_play = &self.cards_in_play;
        self.selected.retain(|id| in_play.iter().any(|c| c.identity() == *id));

        let removed = before - self.cards_in_play.len();
        debug!(removed, in_play = self.cards_in_play.len(), "matched cards discarded");
        removed
    }

    /// Reorder the cards in play at random. Cosmetic only.
    pub fn shuffle_cards_in_play(&mut self) {
        let mut cards: Vec<SetCard> = self.cards_in_play.iter().cloned().collect();
        self.rng.shuffle(&mut cards);
        self.cards_in_play = cards.into_iter().collect();
    }

    // === Reading state ===

    /// The configuration this session was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the session RNG, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Cards on the table, in deal order unless shuffled.
    #[must_use]
    pub fn cards_in_play(&self) -> &Vector<SetCard> {
        &self.cards_in_play
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn cards_in_play_count(&self) -> usize {
        self.cards_in_play.len()
    }

    /// Card at `index` in `cards_in_play`, if any.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&SetCard> {
        self.cards_in_play.get(index)
    }

    /// Position of a card in `cards_in_play`.
    #[must_use]
    pub fn card_index(&self, identity: CardIdentity) -> Option<usize> {
        self.cards_in_play.iter().position(|c| c.identity() == identity)
    }

    /// Identities of the selected cards, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[CardIdentity] {
        &self.selected
    }

    /// The selected cards, in selection order.
    #[must_use]
    pub fn selected_cards(&self) -> Vec<SetCard> {
        self.selected
            .iter()
            .filter_map(|id| self.cards_in_play.iter().find(|c| c.identity() == *id))
            .cloned()
            .collect()
    }

    /// Current score; may go negative.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Undealt cards, in no particular order.
    #[must_use]
    pub fn deck(&self) -> &Vector<SetCard> {
        &self.deck
    }

    /// Whether a confirmed set is still waiting to be discarded.
    #[must_use]
    pub fn has_matched_cards(&self) -> bool {
        self.cards_in_play
            .iter()
            .any(|c| c.match_state() == MatchState::GoodMatch)
    }

    /// Index triples of every set among the cards in play.
    ///
    /// Cards already confirmed as a set are left out; they are on their way
    /// to the discard pile. Indices refer to `cards_in_play`.
    #[must_use]
    pub fn available_sets(&self) -> Vec<[usize; 3]> {
        let (positions, cards): (Vec<usize>, Vec<SetCard>) = self
            .cards_in_play
            .iter()
            .enumerate()
            .filter(|(_, c)| c.match_state() != MatchState::GoodMatch)
            .map(|(i, c)| (i, c.clone()))
            .unzip();
        find_sets(&cards)
            .into_iter()
            .map(|[a, b, c]| [positions[a], positions[b], positions[c]])
            .collect()
    }

    /// Deck exhausted and no set left on the table.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.deck.is_empty() && self.available_sets().is_empty()
    }

    pub(super) fn rng(&self) -> &GameRng {
        &self.rng
    }

    pub(super) fn identities(&self) -> &IdentityAllocator {
        &self.identities
    }
}
