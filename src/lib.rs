//! # rust-hearts
//!
//! A rule engine for a single round of Hearts.
//!
//! The engine deals a standard 52-card deck, then accepts player actions
//! (passing cards, playing into a trick, taking a trick) and either applies
//! them or rejects them with a human-readable reason.
//!
//! ## Design Principles
//!
//! 1. **Restrictions are data**: each action carries an ordered chain of
//!    named predicates. The first one that fails rejects the action, and
//!    nothing in the state changes.
//!
//! 2. **N-Player**: tables of 3 to 8 players. Every API takes the player
//!    count from the state rather than assuming four.
//!
//! 3. **Configuration Over Convention**: zones and action templates are
//!    registered at startup; rule variants live in `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, state, actions, RNG, configuration
//! - `zones`: Zone system (deck, play zone, pocket, hands, discards)
//! - `cards`: Playing cards, the standard deck, card instances
//! - `rules`: Restrictions, action specs and the `RulesEngine` trait
//! - `games`: The Hearts rules
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use rust_hearts::{HeartsBuilder, PointCardRule};
//!
//! let mut game = HeartsBuilder::new()
//!     .seed(7)
//!     .point_card_rule(PointCardRule::FirstLead)
//!     .build()
//!     .unwrap();
//!
//! let p0 = game.players()[0];
//! let err = game.take_trick(p0).unwrap_err();
//! assert_eq!(err.to_string(), "The trick isn't finished");
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod zones;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, EntityId, FollowSuit, GameConfig, GameRng, GameState, PlayerId,
    PlayerMap, PointCardRule, RoundState, TemplateConfig, TemplateId, ZoneConfig, ZoneId,
};

pub use crate::zones::ZoneManager;

pub use crate::cards::{standard_deck, CardInstance, PlayingCard, Suit, STANDARD_DECK_SIZE};

pub use crate::rules::{ActionSpec, Restriction, RulesEngine};

pub use crate::error::{ActionError, ActionResult, RestrictionFailure, SetupError};

pub use crate::games::hearts::{ActionArgs, HeartsBuilder, HeartsGame, HeartsRules};
