//! Standard playing cards.
//!
//! Numbers run 1 (ace) to 13 (king) and compare as plain integers, so an
//! ace is the lowest card of its suit.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Spades,
    Hearts,
}

impl Suit {
    /// All suits, in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A suit and a number.
///
/// ```
/// use rust_hearts::cards::{PlayingCard, Suit};
///
/// let queen = PlayingCard::new(PlayingCard::QUEEN, Suit::Spades);
/// assert!(queen.is_point_card());
/// assert!(!PlayingCard::new(2, Suit::Clubs).is_point_card());
/// assert_eq!(format!("{}", queen), "Q♠");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayingCard {
    pub number: u8,
    pub suit: Suit,
}

impl PlayingCard {
    pub const ACE: u8 = 1;
    pub const JACK: u8 = 11;
    pub const QUEEN: u8 = 12;
    pub const KING: u8 = 13;

    /// The card that opens a round.
    pub const TWO_OF_CLUBS: PlayingCard = PlayingCard::new(2, Suit::Clubs);

    #[must_use]
    pub const fn new(number: u8, suit: Suit) -> Self {
        Self { number, suit }
    }

    /// Hearts and the queen of spades carry points.
    #[must_use]
    pub fn is_point_card(&self) -> bool {
        self.suit == Suit::Hearts || (self.number == Self::QUEEN && self.suit == Suit::Spades)
    }
}

impl std::fmt::Display for PlayingCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number {
            Self::ACE => write!(f, "A{}", self.suit),
            Self::JACK => write!(f, "J{}", self.suit),
            Self::QUEEN => write!(f, "Q{}", self.suit),
            Self::KING => write!(f, "K{}", self.suit),
            n => write!(f, "{}{}", n, self.suit),
        }
    }
}
