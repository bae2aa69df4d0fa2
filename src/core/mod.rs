//! Core engine types: entities, players, state, actions, RNG, configuration.
//!
//! This module holds the building blocks every game action reads or writes.
//! Game rules live in `games`.

pub mod action;
pub mod config;
pub mod entity;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{
    FollowSuit, GameConfig, PointCardRule, TemplateConfig, TemplateId, ZoneConfig, ZoneId,
};
pub use entity::EntityId;
pub use player::{PlayerId, PlayerMap, PlayerRegistry, PlayerZones};
pub use rng::GameRng;
pub use state::{GameState, RoundState};
