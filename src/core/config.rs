//! Game configuration types.
//!
//! - `ZoneConfig`: Defines zones (deck, play zone, pocket, hands, discards)
//! - `TemplateConfig`: Defines action types and their parameter schema
//! - `GameConfig`: Table size, pass size, seed and rule variants

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Zone identifier.
///
/// The three table zones have fixed ids. Player zones are allocated in
/// registration order after them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u16);

impl ZoneId {
    /// The deck, shuffled and dealt during setup.
    pub const DECK: ZoneId = ZoneId(0);
    /// Cards committed to the current trick.
    pub const PLAY: ZoneId = ZoneId(1);
    /// Undealt leftovers.
    pub const POCKET: ZoneId = ZoneId(2);
    /// First id available for player zones.
    pub const FIRST_PLAYER_ZONE: u16 = 3;

    /// Create a new zone ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

/// Configuration for a single zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Unique identifier for this zone.
    pub id: ZoneId,

    /// Human-readable name (for debugging/display).
    pub name: String,

    /// Zone owner. `None` for table zones.
    pub owner: Option<PlayerId>,
}

impl ZoneConfig {
    /// Create an unowned zone configuration.
    pub fn new(id: ZoneId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            owner: None,
        }
    }

    /// Set the zone owner.
    #[must_use]
    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// Action template identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u16);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

/// Parameter schema for an action template.
///
/// Every action receives the acting player. Card arguments travel as
/// entity pointers:
/// - "Take trick": 0 pointers
/// - "Play card": 1 pointer (the card)
/// - "Pass cards": variable (the selection, whose size is a rule check)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Unique identifier for this template.
    pub id: TemplateId,

    /// Human-readable name (for debugging/display).
    pub name: String,

    /// Number of card pointers required.
    pub pointer_count: usize,

    /// Accept any number of pointers. `pointer_count` is ignored when set.
    pub variable_pointers: bool,
}

impl TemplateConfig {
    /// Create a new template configuration.
    pub fn new(id: TemplateId, name: impl Into<String>, pointer_count: usize) -> Self {
        Self {
            id,
            name: name.into(),
            pointer_count,
            variable_pointers: false,
        }
    }

    /// Create a template with no pointers.
    pub fn no_args(id: TemplateId, name: impl Into<String>) -> Self {
        Self::new(id, name, 0)
    }

    /// Allow any number of pointers.
    #[must_use]
    pub fn with_variable_pointers(mut self) -> Self {
        self.variable_pointers = true;
        self
    }

    /// Check whether `count` pointers satisfy this schema.
    #[must_use]
    pub fn accepts(&self, count: usize) -> bool {
        self.variable_pointers || count == self.pointer_count
    }
}

/// When the point-card ban applies to `play_card`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointCardRule {
    /// Point cards can never be played. This is the historical behaviour of
    /// the round engine and stays the default.
    #[default]
    EveryPlay,
    /// Point cards can't lead the first trick of the round; any other play
    /// is unrestricted.
    FirstLead,
}

/// How strictly players must follow the leading suit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowSuit {
    /// Only cards of the leading suit can follow.
    #[default]
    Strict,
    /// Any card can follow when the hand holds none of the leading suit.
    IfAble,
}

/// Complete round configuration.
///
/// ```
/// use rust_hearts::core::{FollowSuit, GameConfig, PointCardRule};
///
/// let config = GameConfig::new()
///     .with_seed(42)
///     .with_point_card_rule(PointCardRule::FirstLead)
///     .with_follow_suit(FollowSuit::IfAble);
///
/// assert_eq!(config.pass_count, 3);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fewest players `set_up` accepts.
    pub min_players: usize,

    /// Most players `set_up` accepts.
    pub max_players: usize,

    /// Cards per pass selection.
    pub pass_count: usize,

    /// Shuffle seed. `None` draws one from the thread RNG.
    pub seed: Option<u64>,

    /// Point-card restriction variant.
    pub point_card_rule: PointCardRule,

    /// Follow-suit restriction variant.
    pub follow_suit: FollowSuit,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 3,
            max_players: 8,
            pass_count: 3,
            seed: None,
            point_card_rule: PointCardRule::default(),
            follow_suit: FollowSuit::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the point-card rule.
    #[must_use]
    pub fn with_point_card_rule(mut self, rule: PointCardRule) -> Self {
        self.point_card_rule = rule;
        self
    }

    /// Set the follow-suit rule.
    #[must_use]
    pub fn with_follow_suit(mut self, rule: FollowSuit) -> Self {
        self.follow_suit = rule;
        self
    }
}
