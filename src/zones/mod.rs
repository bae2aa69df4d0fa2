//! Zone system for card locations.
//!
//! Table zones (deck, play zone, pocket) have fixed ids; each seated player
//! gets a hand and a discard zone at registration.
//!
//! ## Key Types
//!
//! - `ZoneId`: Zone identifier (from `core::config`)
//! - `ZoneConfig`: Zone name and owner
//! - `ZoneManager`: Card location tracking and movement

pub mod manager;

pub use manager::ZoneManager;

// Re-export zone types from core for convenience
pub use crate::core::config::{ZoneConfig, ZoneId};
