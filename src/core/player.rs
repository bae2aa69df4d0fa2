//! Player identification, registration and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are handed out in registration order,
//! and that order is the seating order: the player "to the left" of
//! `PlayerId(i)` is `PlayerId(i + 1)`, wrapping from the last seat to the
//! first.
//!
//! ## PlayerRegistry
//!
//! The ordered list of seated players and the zones each one owns.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::ZoneId;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first registered player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a table of `player_count` players.
    ///
    /// ```
    /// use rust_hearts::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// The zones a single player owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerZones {
    /// Cards currently held.
    pub hand: ZoneId,
    /// Cards won in tricks.
    pub discard: ZoneId,
}

/// Seated players in registration order.
///
/// ```
/// use rust_hearts::core::{PlayerId, PlayerRegistry, PlayerZones, ZoneId};
///
/// let mut registry = PlayerRegistry::new();
/// let zones = |i| PlayerZones { hand: ZoneId::new(i), discard: ZoneId::new(i + 100) };
/// let p0 = registry.register(zones(10));
/// let p1 = registry.register(zones(11));
///
/// assert_eq!(registry.to_left(p0), Some(p1));
/// assert_eq!(registry.to_left(p1), Some(p0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    seats: Vec<PlayerZones>,
}

impl PlayerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a new player owning `zones`, returning its id.
    ///
    /// Panics past 255 players; callers cap the table size well below that.
    pub fn register(&mut self, zones: PlayerZones) -> PlayerId {
        assert!(self.seats.len() < 255, "At most 255 players supported");
        let id = PlayerId(self.seats.len() as u8);
        self.seats.push(zones);
        id
    }

    /// Number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// True when no player has been seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Check whether `player` is seated.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.seats.len()
    }

    /// Get the zones owned by `player`.
    #[must_use]
    pub fn zones(&self, player: PlayerId) -> Option<&PlayerZones> {
        self.seats.get(player.index())
    }

    /// Iterate over seated players in registration order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.seats.len())
    }

    /// The player seated to the left of `player`.
    ///
    /// Returns `None` for a player that isn't seated.
    #[must_use]
    pub fn to_left(&self, player: PlayerId) -> Option<PlayerId> {
        if !self.contains(player) {
            return None;
        }
        Some(PlayerId(((player.index() + 1) % self.seats.len()) as u8))
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_hearts::core::{PlayerId, PlayerMap};
///
/// let mut tricks: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// tricks[PlayerId::new(1)] += 1;
/// assert_eq!(tricks[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones(i: u16) -> PlayerZones {
        PlayerZones {
            hand: ZoneId::new(i * 2),
            discard: ZoneId::new(i * 2 + 1),
        }
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_registry_registration_order() {
        let mut registry = PlayerRegistry::new();
        assert!(registry.is_empty());

        let ids: Vec<_> = (0..4).map(|i| registry.register(zones(i))).collect();

        assert_eq!(registry.len(), 4);
        assert_eq!(ids, registry.ids().collect::<Vec<_>>());
        assert_eq!(registry.zones(PlayerId::new(2)), Some(&zones(2)));
        assert_eq!(registry.zones(PlayerId::new(4)), None);
    }

    #[test]
    fn test_to_left_wraps() {
        let mut registry = PlayerRegistry::new();
        for i in 0..4 {
            registry.register(zones(i));
        }

        assert_eq!(registry.to_left(PlayerId::new(0)), Some(PlayerId::new(1)));
        assert_eq!(registry.to_left(PlayerId::new(2)), Some(PlayerId::new(3)));
        assert_eq!(registry.to_left(PlayerId::new(3)), Some(PlayerId::new(0)));
        assert_eq!(registry.to_left(PlayerId::new(9)), None);
    }

    #[test]
    fn test_to_left_single_seat() {
        let mut registry = PlayerRegistry::new();
        let p0 = registry.register(zones(0));
        assert_eq!(registry.to_left(p0), Some(p0));
    }

    #[test]
    fn test_player_map() {
        let mut map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32 * 10);
        map[PlayerId::new(2)] += 1;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[1], (PlayerId::new(1), &10));
        assert_eq!(pairs[2], (PlayerId::new(2), &21));
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }
}
