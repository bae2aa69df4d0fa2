//! A single round of Hearts.
//!
//! A round moves through three stages:
//!
//! 1. **Setup**: the deck is shuffled and dealt evenly; leftovers go to the
//!    pocket.
//! 2. **Passing**: players hand a selection of cards to their left until
//!    someone calls `end_passing` or plays the first card.
//! 3. **Tricks**: players play in turn, the trick winner takes the cards and
//!    leads the next trick.
//!
//! Every action is guarded by an ordered restriction chain (see
//! [`restrictions`]). The first failing restriction rejects the action and
//! its message is returned unchanged.

mod actions;
mod game;
pub mod restrictions;
mod setup;

pub use game::{HeartsBuilder, HeartsGame, HeartsRules, Templates};
pub use restrictions::{trick_winner, ActionArgs};
pub use setup::deal;
