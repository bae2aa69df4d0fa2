//! Card instances - runtime card state.
//!
//! `CardInstance` is a specific physical card in a round. Its face value
//! (`card`) can be edited by tests and tools, but its `entity_id` never
//! changes, so zones keep tracking the same card.
//!
//! ## Visibility
//!
//! Face-up state is scoped per player: a dealt card is face up for the
//! player holding it and face down for everyone else.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::playing_card::PlayingCard;
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// A card instance in a round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Face value.
    pub card: PlayingCard,

    /// The player who last controlled the card. `None` for undealt cards.
    pub owner: Option<PlayerId>,

    /// Players the card is face up for.
    face_up_for: SmallVec<[PlayerId; 4]>,
}

impl CardInstance {
    /// Create an unowned, face-down card instance.
    #[must_use]
    pub fn new(entity_id: EntityId, card: PlayingCard) -> Self {
        Self {
            entity_id,
            card,
            owner: None,
            face_up_for: SmallVec::new(),
        }
    }

    /// Set the owner.
    pub fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }

    /// Check if the card is face up for `player`.
    #[must_use]
    pub fn is_face_up_for(&self, player: PlayerId) -> bool {
        self.face_up_for.contains(&player)
    }

    /// Turn the card face up or down for a single player.
    pub fn set_face_up(&mut self, player: PlayerId, face_up: bool) {
        let visible = self.is_face_up_for(player);
        if face_up && !visible {
            self.face_up_for.push(player);
        } else if !face_up && visible {
            self.face_up_for.retain(|p| *p != player);
        }
    }

    /// Make the card face up for exactly `player`.
    pub fn show_only_to(&mut self, player: PlayerId) {
        self.face_up_for.clear();
        self.face_up_for.push(player);
    }

    /// Make the card face up for every listed player.
    pub fn reveal_to(&mut self, players: impl IntoIterator<Item = PlayerId>) {
        for player in players {
            self.set_face_up(player, true);
        }
    }

    /// Players the card is currently face up for.
    #[must_use]
    pub fn viewers(&self) -> &[PlayerId] {
        &self.face_up_for
    }
}
