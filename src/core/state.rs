//! Round state.
//!
//! ## RoundState
//!
//! The turn bookkeeping actions thread through a round: phase flag,
//! leading suit, whose turn it is, tricks completed.
//!
//! ## GameState
//!
//! Everything a round owns:
//! - Configuration and round bookkeeping
//! - Seated players and their zones
//! - Card instances and the zone manager tracking them
//! - RNG and action history
//!
//! Callers read `GameState` freely but mutate it only through actions.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::{GameConfig, ZoneConfig, ZoneId};
use super::entity::EntityId;
use super::player::{PlayerId, PlayerRegistry, PlayerZones};
use super::rng::GameRng;
use crate::cards::{CardInstance, PlayingCard, Suit};
use crate::error::SetupError;
use crate::zones::ZoneManager;

/// Turn bookkeeping for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// True until the passing phase ends.
    pub is_passing_phase: bool,

    /// Suit of the first card of the current trick. `None` between tricks.
    pub leading_suit: Option<Suit>,

    /// Whose turn it is. `None` until turn order is established.
    pub current_player: Option<PlayerId>,

    /// Tricks completed this round.
    pub tricks_taken: u32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            is_passing_phase: true,
            leading_suit: None,
            current_player: None,
            tricks_taken: 0,
        }
    }
}

impl RoundState {
    /// Fresh state for a new round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while no card of the current trick has been played.
    #[must_use]
    pub fn is_fresh_trick(&self) -> bool {
        self.leading_suit.is_none()
    }
}

/// Full state of a round.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Round configuration.
    pub config: GameConfig,

    /// Turn bookkeeping.
    pub round: RoundState,

    /// Zone manager for card locations.
    pub zones: ZoneManager,

    /// Deterministic RNG.
    pub rng: GameRng,

    /// Seated players.
    players: PlayerRegistry,

    /// Card instances by entity ID.
    cards: FxHashMap<EntityId, CardInstance>,

    /// Applied actions, oldest first.
    history: Vector<ActionRecord>,

    /// Next entity ID to allocate.
    next_entity_id: EntityId,

    /// Next zone ID to allocate to a player.
    next_zone_id: u16,

    /// Set once the deck has been dealt.
    dealt: bool,
}

impl GameState {
    /// Create an empty table: no players, no cards, table zones registered.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut zones = ZoneManager::new();
        zones.register_zone(ZoneConfig::new(ZoneId::DECK, "Deck"));
        zones.register_zone(ZoneConfig::new(ZoneId::PLAY, "Play zone"));
        zones.register_zone(ZoneConfig::new(ZoneId::POCKET, "Pocket"));

        Self {
            config,
            round: RoundState::new(),
            zones,
            rng,
            players: PlayerRegistry::new(),
            cards: FxHashMap::default(),
            history: Vector::new(),
            next_entity_id: EntityId::new(0),
            next_zone_id: ZoneId::FIRST_PLAYER_ZONE,
            dealt: false,
        }
    }

    // === Players ===

    /// Seat a player, giving it a hand and a discard zone.
    pub fn add_player(&mut self) -> Result<PlayerId, SetupError> {
        if self.dealt {
            return Err(SetupError::AlreadySetUp);
        }
        if self.players.len() >= 255 {
            return Err(SetupError::TooManyPlayers(self.players.len() + 1));
        }

        let player = PlayerId::new(self.players.len() as u8);
        let hand = self.alloc_zone();
        let discard = self.alloc_zone();

        self.zones
            .register_zone(ZoneConfig::new(hand, format!("{} hand", player)).with_owner(player));
        self.zones.register_zone(
            ZoneConfig::new(discard, format!("{} discard", player)).with_owner(player),
        );

        Ok(self.players.register(PlayerZones { hand, discard }))
    }

    fn alloc_zone(&mut self) -> ZoneId {
        let id = ZoneId::new(self.next_zone_id);
        self.next_zone_id += 1;
        id
    }

    /// Get the seated players.
    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get the zones owned by `player`.
    #[must_use]
    pub fn player_zones(&self, player: PlayerId) -> Option<PlayerZones> {
        self.players.zones(player).copied()
    }

    /// The player seated to the left of `player`.
    #[must_use]
    pub fn player_to_left(&self, player: PlayerId) -> Option<PlayerId> {
        self.players.to_left(player)
    }

    // === Cards ===

    /// Allocate a new entity ID.
    pub fn alloc_entity(&mut self) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id = id.next();
        id
    }

    /// Create a card and put it on top of `zone`.
    ///
    /// Returns `None` if the zone isn't registered.
    pub fn add_card(&mut self, card: PlayingCard, zone: ZoneId) -> Option<EntityId> {
        self.zones.config(zone)?;
        Some(self.spawn_card(card, zone))
    }

    /// Create a card on top of the deck, which `new` always registers.
    pub(crate) fn add_to_deck(&mut self, card: PlayingCard) -> EntityId {
        self.spawn_card(card, ZoneId::DECK)
    }

    fn spawn_card(&mut self, card: PlayingCard, zone: ZoneId) -> EntityId {
        let entity_id = self.alloc_entity();
        self.cards.insert(entity_id, CardInstance::new(entity_id, card));
        self.zones.add_to_zone(entity_id, zone);
        entity_id
    }

    /// Get a card instance.
    #[must_use]
    pub fn get_card(&self, entity_id: EntityId) -> Option<&CardInstance> {
        self.cards.get(&entity_id)
    }

    /// Get a mutable card instance.
    pub fn get_card_mut(&mut self, entity_id: EntityId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&entity_id)
    }

    /// Number of card instances in the round.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    // === Zone queries ===

    /// Cards in `player`'s hand. Empty for unknown players.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[EntityId] {
        self.player_zones(player)
            .map_or(&[], |z| self.zones.cards_in_zone(z.hand))
    }

    /// Cards `player` has won. Empty for unknown players.
    #[must_use]
    pub fn discard(&self, player: PlayerId) -> &[EntityId] {
        self.player_zones(player)
            .map_or(&[], |z| self.zones.cards_in_zone(z.discard))
    }

    /// Cards in the current trick, in play order.
    #[must_use]
    pub fn play_zone(&self) -> &[EntityId] {
        self.zones.cards_in_zone(ZoneId::PLAY)
    }

    /// Undealt leftovers.
    #[must_use]
    pub fn pocket(&self) -> &[EntityId] {
        self.zones.cards_in_zone(ZoneId::POCKET)
    }

    /// Check if `card` is in `player`'s hand.
    #[must_use]
    pub fn hand_contains(&self, player: PlayerId, card: EntityId) -> bool {
        self.player_zones(player)
            .is_some_and(|z| self.zones.is_in_zone(card, z.hand))
    }

    /// The player whose hand holds a card with this face value.
    #[must_use]
    pub fn holder_of(&self, face: PlayingCard) -> Option<PlayerId> {
        self.players.ids().find(|&player| {
            self.hand(player)
                .iter()
                .filter_map(|&id| self.get_card(id))
                .any(|c| c.card == face)
        })
    }

    // === Setup ===

    /// Check whether the deck has been dealt.
    #[must_use]
    pub fn is_dealt(&self) -> bool {
        self.dealt
    }

    pub(crate) fn mark_dealt(&mut self) {
        self.dealt = true;
    }

    // === Action History ===

    /// Applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Record an applied action.
    pub fn record_action(&mut self, player: PlayerId, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(
            player,
            action,
            self.round.tricks_taken,
            sequence,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(players: usize) -> (GameState, Vec<PlayerId>) {
        let mut state = GameState::new(GameConfig::new().with_seed(42));
        let ids = (0..players).map(|_| state.add_player().unwrap()).collect();
        (state, ids)
    }

    #[test]
    fn test_round_state_defaults() {
        let round = RoundState::new();
        assert!(round.is_passing_phase);
        assert!(round.is_fresh_trick());
        assert_eq!(round.current_player, None);
        assert_eq!(round.tricks_taken, 0);
    }

    #[test]
    fn test_add_player_allocates_zones() {
        let (state, ids) = table(3);

        assert_eq!(state.player_count(), 3);
        let z0 = state.player_zones(ids[0]).unwrap();
        let z2 = state.player_zones(ids[2]).unwrap();
        assert_ne!(z0.hand, z2.hand);
        assert_ne!(z0.hand, z0.discard);
        assert_eq!(state.zones.config(z2.hand).unwrap().owner, Some(ids[2]));
        assert!(state.player_zones(PlayerId::new(3)).is_none());
    }

    #[test]
    fn test_add_player_after_deal_fails() {
        let (mut state, _) = table(3);
        state.mark_dealt();
        assert_eq!(state.add_player(), Err(SetupError::AlreadySetUp));
    }

    #[test]
    fn test_add_card_and_queries() {
        let (mut state, ids) = table(3);
        let hand = state.player_zones(ids[1]).unwrap().hand;

        let id = state.add_card(PlayingCard::TWO_OF_CLUBS, hand).unwrap();

        assert_eq!(state.hand(ids[1]), &[id]);
        assert!(state.hand_contains(ids[1], id));
        assert!(!state.hand_contains(ids[0], id));
        assert_eq!(state.holder_of(PlayingCard::TWO_OF_CLUBS), Some(ids[1]));
        assert_eq!(state.get_card(id).unwrap().card, PlayingCard::TWO_OF_CLUBS);
        assert!(state.add_card(PlayingCard::TWO_OF_CLUBS, ZoneId::new(500)).is_none());
    }

    #[test]
    fn test_add_to_deck() {
        let (mut state, _) = table(3);

        let first = state.add_to_deck(PlayingCard::TWO_OF_CLUBS);
        let second = state.add_to_deck(PlayingCard::new(PlayingCard::QUEEN, Suit::Spades));

        assert_eq!(state.zones.cards_in_zone(ZoneId::DECK), &[first, second]);
        assert_eq!(state.zones.top_card(ZoneId::DECK), Some(second));
        assert_eq!(state.card_count(), 2);
        assert_eq!(state.get_card(first).unwrap().owner, None);
    }

    #[test]
    fn test_alloc_entity_is_sequential() {
        let (mut state, _) = table(3);
        let e1 = state.alloc_entity();
        let e2 = state.alloc_entity();
        assert_eq!(e2.raw(), e1.raw() + 1);
    }

    #[test]
    fn test_record_action() {
        use crate::core::TemplateId;

        let (mut state, ids) = table(3);
        state.record_action(ids[0], Action::new(TemplateId::new(2)));
        state.round.tricks_taken = 1;
        state.record_action(ids[1], Action::new(TemplateId::new(2)));

        let history = state.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].sequence, 1);
        assert_eq!(history[1].trick, 1);
        assert_eq!(history[1].player, ids[1]);
    }

    #[test]
    fn test_clone_is_independent() {
        let (mut state, ids) = table(3);
        let hand = state.player_zones(ids[0]).unwrap().hand;
        state.add_card(PlayingCard::TWO_OF_CLUBS, hand);

        let mut cloned = state.clone();
        cloned.zones.move_all(hand, ZoneId::POCKET);

        assert_eq!(state.hand(ids[0]).len(), 1);
        assert!(cloned.hand(ids[0]).is_empty());
    }
}
