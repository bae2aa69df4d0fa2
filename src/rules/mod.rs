//! Rules: restrictions, guarded actions, and the engine trait.
//!
//! - `Restriction`: a named predicate with a rejection message
//! - `ActionSpec`: parameter schema + restriction chain + mutation
//! - `RulesEngine`: what games implement so drivers can enumerate and apply
//!   actions without knowing the game

pub mod action_spec;
pub mod engine;
pub mod restriction;

pub use action_spec::ActionSpec;
pub use engine::RulesEngine;
pub use restriction::{evaluate_all, Restriction};
