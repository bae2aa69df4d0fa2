//! Card identity.
//!
//! Every card dealt into a round gets a unique `EntityId` when it is
//! registered with the `GameState`. The id never changes as the card moves
//! between zones, so zone membership and action arguments are compared by
//! identity, never by suit and number.
//!
//! ```
//! use rust_hearts::core::EntityId;
//!
//! let card = EntityId::new(7);
//! assert_eq!(card.raw(), 7);
//! assert_eq!(format!("{}", card), "Entity(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one. Used by the allocator in `GameState`.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
