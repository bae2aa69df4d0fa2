//! Deck factory.

use super::playing_card::{PlayingCard, Suit};

/// Cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// A complete, unshuffled standard deck: suits in `Suit::ALL` order,
/// numbers ascending within each suit.
#[must_use]
pub fn standard_deck() -> Vec<PlayingCard> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (PlayingCard::ACE..=PlayingCard::KING).map(move |n| PlayingCard::new(n, suit)))
        .collect()
}
