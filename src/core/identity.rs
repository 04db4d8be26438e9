//! Card identity allocation.
//!
//! Every physical card gets a `CardIdentity` when it is constructed. Two
//! cards are the same card only if their identities match; attributes play
//! no part in it.
//!
//! ## Allocation
//!
//! Identities come from an `IdentityAllocator` owned by whoever builds the
//! cards (a game session, a deck factory call in a test). Each allocator
//! hands out `1, 2, 3, ...` and never repeats a value.
//!
//! ```
//! use set_game::core::{CardIdentity, IdentityAllocator};
//!
//! let mut ids = IdentityAllocator::new();
//!
//! assert_eq!(ids.allocate(), CardIdentity(1));
//! assert_eq!(ids.allocate(), CardIdentity(2));
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within the allocator that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIdentity(pub u32);

impl CardIdentity {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardIdentity {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Hands out strictly increasing card identities starting at 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAllocator {
    next: u32,
}

impl Default for IdentityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityAllocator {
    /// Create an allocator whose first identity is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next identity.
    pub fn allocate(&mut self) -> CardIdentity {
        let id = CardIdentity(self.next);
        self.next += 1;
        id
    }

    /// Number of identities handed out so far.
    #[must_use]
    pub const fn allocated(&self) -> u32 {
        self.next - 1
    }
}
