//! Card system: playing cards, the deck factory, and runtime instances.
//!
//! ## Key Types
//!
//! - `Suit`, `PlayingCard`: Face values
//! - `standard_deck`: The 52-card deck, unshuffled
//! - `CardInstance`: A card in play (identity, owner, visibility)

pub mod deck;
pub mod instance;
pub mod playing_card;

pub use deck::{standard_deck, STANDARD_DECK_SIZE};
pub use instance::CardInstance;
pub use playing_card::{PlayingCard, Suit};
