//! Game implementations.

pub mod hearts;

pub use hearts::{HeartsBuilder, HeartsGame, HeartsRules};
