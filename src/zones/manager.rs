//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks where every card is and moves cards between
//! zones. A card id lives in exactly one zone at a time: adding an id that
//! is already tracked is a bug and panics, and moves relocate the id rather
//! than copying it.
//!
//! Every zone keeps its cards in insertion order, so iteration is
//! deterministic and the last card is the top of the zone. There is no way
//! to drop a card: every operation moves ids between registered zones.

use rustc_hash::FxHashMap;
use crate::core::config::{ZoneConfig, ZoneId};
use crate::core::entity::EntityId;
use crate::core::rng::GameRng;

#[derive(Clone, Debug)]
struct Zone {
    config: ZoneConfig,
    cards: Vec<EntityId>,
}

impl Zone {
    fn take(&mut self, entity: EntityId) {
        self.cards.retain(|&e| e != entity);
    }
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use rust_hearts::core::{EntityId, ZoneConfig, ZoneId};
/// use rust_hearts::zones::ZoneManager;
///
/// let mut manager = ZoneManager::new();
/// manager.register_zone(ZoneConfig::new(ZoneId::DECK, "Deck"));
/// manager.register_zone(ZoneConfig::new(ZoneId::new(3), "Hand"));
///
/// manager.add_to_zone(EntityId(10), ZoneId::DECK);
/// manager.add_to_zone(EntityId(11), ZoneId::DECK);
///
/// let top = manager.top_card(ZoneId::DECK).unwrap();
/// manager.move_to_zone(top, ZoneId::new(3));
///
/// assert!(manager.is_in_zone(EntityId(11), ZoneId::new(3)));
/// assert_eq!(manager.zone_size(ZoneId::DECK), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: entity_id -> zone_id
    locations: FxHashMap<EntityId, ZoneId>,

    /// Registered zones with their cards in order.
    zones: FxHashMap<ZoneId, Zone>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone. Re-registering keeps the zone's cards and replaces
    /// its configuration.
    pub fn register_zone(&mut self, config: ZoneConfig) {
        let id = config.id;
        match self.zones.get_mut(&id) {
            Some(zone) => zone.config = config,
            None => {
                self.zones.insert(
                    id,
                    Zone {
                        config,
                        cards: Vec::new(),
                    },
                );
            }
        }
    }

    /// Get a zone's configuration.
    #[must_use]
    pub fn config(&self, zone: ZoneId) -> Option<&ZoneConfig> {
        self.zones.get(&zone).map(|z| &z.config)
    }

    /// Put a new card on top of a zone.
    ///
    /// Panics if the entity is already tracked or the zone isn't registered.
    pub fn add_to_zone(&mut self, entity: EntityId, zone: ZoneId) {
        if self.locations.contains_key(&entity) {
            panic!("Entity {:?} already exists in zone manager", entity);
        }
        let Some(target) = self.zones.get_mut(&zone) else {
            panic!("Zone {:?} is not registered", zone);
        };

        target.cards.push(entity);
        self.locations.insert(entity, zone);
    }

    /// Move a card from its current zone to the top of another.
    ///
    /// Returns the old zone, or `None` if the card isn't tracked or the
    /// target zone isn't registered. Nothing changes in either case.
    pub fn move_to_zone(&mut self, entity: EntityId, new_zone: ZoneId) -> Option<ZoneId> {
        let old_zone = self.locations.get(&entity).copied()?;
        if !self.zones.contains_key(&new_zone) {
            return None;
        }
        if old_zone == new_zone {
            return Some(old_zone);
        }

        if let Some(zone) = self.zones.get_mut(&old_zone) {
            zone.take(entity);
        }
        if let Some(zone) = self.zones.get_mut(&new_zone) {
            zone.cards.push(entity);
        }
        self.locations.insert(entity, new_zone);

        Some(old_zone)
    }

    /// Move every card of `from` to the top of `to`, keeping their order.
    ///
    /// Returns the moved ids. Nothing moves if either zone is unregistered.
    pub fn move_all(&mut self, from: ZoneId, to: ZoneId) -> Vec<EntityId> {
        if from == to || !self.zones.contains_key(&to) {
            return Vec::new();
        }
        let Some(source) = self.zones.get_mut(&from) else {
            return Vec::new();
        };

        let moved = std::mem::take(&mut source.cards);
        if let Some(target) = self.zones.get_mut(&to) {
            target.cards.extend_from_slice(&moved);
        }
        for &entity in &moved {
            self.locations.insert(entity, to);
        }
        moved
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, entity: EntityId, zone: ZoneId) -> bool {
        self.locations.get(&entity) == Some(&zone)
    }

    /// Get the cards of a zone in insertion order (index 0 is the bottom).
    ///
    /// Returns empty for unregistered zones.
    #[must_use]
    pub fn cards_in_zone(&self, zone: ZoneId) -> &[EntityId] {
        self.zones.get(&zone).map_or(&[], |z| z.cards.as_slice())
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: ZoneId) -> usize {
        self.cards_in_zone(zone).len()
    }

    /// Get the top card of a zone (last in the list).
    #[must_use]
    pub fn top_card(&self, zone: ZoneId) -> Option<EntityId> {
        self.cards_in_zone(zone).last().copied()
    }

    /// Shuffle a zone.
    pub fn shuffle_zone(&mut self, zone: ZoneId, rng: &mut GameRng) {
        if let Some(z) = self.zones.get_mut(&zone) {
            rng.shuffle(&mut z.cards);
        }
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }
}
