//! Game configuration.
//!
//! `GameConfig` carries the tunable numbers of a Set session: how many
//! cards open the game, how many a "deal more" adds, the scoring deltas,
//! the deal shortfall policy and the RNG seed.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::DECK_SIZE;

/// What `deal(count)` does when fewer than `count` cards remain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealPolicy {
    /// Deal `min(count, remaining)` cards.
    #[default]
    UpToCount,
    /// Deal nothing unless at least `count` cards remain.
    WholeDealOnly,
}

/// Configuration for a Set session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt by `deal_opening_hand` (default: 12).
    pub opening_deal: usize,

    /// Cards dealt by `deal_more` (default: 3).
    pub deal_count: usize,

    /// Score added for a valid set (default: 5).
    pub match_reward: i64,

    /// Score subtracted for an invalid triple (default: 5).
    pub mismatch_penalty: i64,

    /// Shortfall handling for deals.
    pub deal_policy: DealPolicy,

    /// RNG seed. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opening_deal: 12,
            deal_count: 3,
            match_reward: 5,
            mismatch_penalty: 5,
            deal_policy: DealPolicy::UpToCount,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with custom opening deal size.
    pub fn with_opening_deal(mut self, count: usize) -> Self {
        self.opening_deal = count;
        self
    }

    /// Create a new config with custom "deal more" size.
    pub fn with_deal_count(mut self, count: usize) -> Self {
        self.deal_count = count;
        self
    }

    /// Create a new config with custom scoring.
    pub fn with_scoring(mut self, reward: i64, penalty: i64) -> Self {
        self.match_reward = reward;
        self.mismatch_penalty = penalty;
        self
    }

    /// Create a new config with custom deal policy.
    pub fn with_deal_policy(mut self, policy: DealPolicy) -> Self {
        self.deal_policy = policy;
        self
    }

    /// Check the config for values no game can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opening_deal == 0 {
            return Err(ConfigError::EmptyOpeningDeal);
        }
        if self.opening_deal > DECK_SIZE {
            return Err(ConfigError::OpeningDealTooLarge {
                requested: self.opening_deal,
                deck_size: DECK_SIZE,
            });
        }
        if self.deal_count == 0 {
            return Err(ConfigError::EmptyDeal);
        }
        if self.match_reward < 0 {
            return Err(ConfigError::NegativeScore {
                field: "match_reward",
                value: self.match_reward,
            });
        }
        if self.mismatch_penalty < 0 {
            return Err(ConfigError::NegativeScore {
                field: "mismatch_penalty",
                value: self.mismatch_penalty,
            });
        }
        Ok(())
    }
}
