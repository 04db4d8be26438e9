//! Session snapshots for pausing and resuming a Set game.
//!
//! A snapshot captures everything a `SetGame` owns, including the RNG
//! position, so a restored game deals exactly the cards the original
//! would have dealt next.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::game::SetGame;
use crate::cards::{MatchState, SetCard};
use crate::core::{CardIdentity, GameConfig, GameRng, GameRngState, IdentityAllocator, SnapshotError};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub rng: GameRngState,
    pub identities: IdentityAllocator,
    pub deck: Vector<SetCard>,
    pub cards_in_play: Vector<SetCard>,
    pub selected: Vec<CardIdentity>,
    pub score: i64,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl SetGame {
    /// Capture the full session state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config().clone(),
            rng: self.rng().state(),
            identities: self.identities().clone(),
            deck: self.deck().clone(),
            cards_in_play: self.cards_in_play().clone(),
            selected: self.selected().to_vec(),
            score: self.score(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// Rejects snapshots whose config is invalid, whose selection is not a
    /// set of distinct selected cards in play, or whose identity allocator
    /// would hand out identities already on cards.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        snapshot.config.validate()?;

        if snapshot.selected.len() > 3 {
            return Err(SnapshotError::SelectionTooLarge(snapshot.selected.len()));
        }
        for (i, id) in snapshot.selected.iter().enumerate() {
            if snapshot.selected[..i].contains(id) {
                return Err(SnapshotError::DuplicateSelection(*id));
            }
            let card = snapshot
                .cards_in_play
                .iter()
                .find(|c| c.identity() == *id)
                .ok_or(SnapshotError::SelectionNotInPlay(*id))?;
            if card.match_state() == MatchState::Unselected {
                return Err(SnapshotError::SelectionUnselected(*id));
            }
        }

        let highest = snapshot
            .deck
            .iter()
            .chain(snapshot.cards_in_play.iter())
            .map(SetCard::identity)
            .max();
        if let Some(highest) = highest {
            if snapshot.identities.allocated() < highest.raw() {
                return Err(SnapshotError::IdentitiesBehind {
                    allocated: snapshot.identities.allocated(),
                    highest,
                });
            }
        }

        Ok(SetGame::from_parts(
            snapshot.config,
            GameRng::from_state(&snapshot.rng),
            snapshot.identities,
            snapshot.deck,
            snapshot.cards_in_play,
            SmallVec::from_vec(snapshot.selected),
            snapshot.score,
        ))
    }
}
