//! Core engine types: card identities, RNG, configuration, errors.
//!
//! Nothing in here knows the rules of a particular game. The Set and
//! Concentration engines in `game` build on these pieces.

pub mod identity;
pub mod rng;
pub mod config;
pub mod error;

pub use identity::{CardIdentity, IdentityAllocator};
pub use rng::{GameRng, GameRngState};
pub use config::{DealPolicy, GameConfig};
pub use error::{ConfigError, SnapshotError};
