//! Hearts restrictions.
//!
//! Every predicate reads `GameState` and the action arguments and nothing
//! else. Messages are part of the public contract: callers show them to
//! players verbatim.

use smallvec::SmallVec;

use crate::core::{EntityId, FollowSuit, GameState, PlayerId, PointCardRule};
use crate::rules::Restriction;

/// Arguments every Hearts action receives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionArgs {
    /// The acting player.
    pub player: PlayerId,
    /// Card arguments, in the order given.
    pub cards: SmallVec<[EntityId; 3]>,
}

impl ActionArgs {
    /// Arguments for an action without cards.
    #[must_use]
    pub fn player(player: PlayerId) -> Self {
        Self {
            player,
            cards: SmallVec::new(),
        }
    }

    /// Arguments for an action on the given cards.
    #[must_use]
    pub fn with_cards(player: PlayerId, cards: &[EntityId]) -> Self {
        Self {
            player,
            cards: SmallVec::from_slice(cards),
        }
    }

    /// The single card of a one-card action.
    #[must_use]
    pub fn card(&self) -> Option<EntityId> {
        self.cards.first().copied()
    }
}

type HeartsRestriction = Restriction<GameState, ActionArgs>;

/// The player holding the highest card of the leading suit in the trick.
///
/// `None` when no leading suit is set or no card of it is in the play zone.
#[must_use]
pub fn trick_winner(state: &GameState) -> Option<PlayerId> {
    let lead = state.round.leading_suit?;
    state
        .play_zone()
        .iter()
        .filter_map(|&id| state.get_card(id))
        .filter(|c| c.card.suit == lead)
        .max_by_key(|c| c.card.number)
        .and_then(|c| c.owner)
}

fn passing_phase(state: &GameState, _: &ActionArgs) -> bool {
    state.round.is_passing_phase
}

fn pass_valid(state: &GameState, args: &ActionArgs) -> bool {
    if args.cards.len() != state.config.pass_count {
        return false;
    }
    let mut seen: SmallVec<[EntityId; 3]> = SmallVec::new();
    for &card in &args.cards {
        if seen.contains(&card) || !state.hand_contains(args.player, card) {
            return false;
        }
        seen.push(card);
    }
    true
}

fn is_players_turn(state: &GameState, args: &ActionArgs) -> bool {
    state.round.current_player == Some(args.player)
}

fn is_in_suite(state: &GameState, args: &ActionArgs) -> bool {
    let Some(card) = args.card().and_then(|id| state.get_card(id)) else {
        return false;
    };
    let Some(lead) = state.round.leading_suit else {
        return true;
    };
    if card.card.suit == lead {
        return true;
    }

    match state.config.follow_suit {
        FollowSuit::Strict => false,
        FollowSuit::IfAble => !state
            .hand(args.player)
            .iter()
            .filter_map(|&id| state.get_card(id))
            .any(|c| c.card.suit == lead),
    }
}

fn first_turn_valid(state: &GameState, args: &ActionArgs) -> bool {
    let Some(card) = args.card().and_then(|id| state.get_card(id)) else {
        return false;
    };
    if !card.card.is_point_card() {
        return true;
    }

    match state.config.point_card_rule {
        PointCardRule::EveryPlay => false,
        PointCardRule::FirstLead => !(state.round.is_fresh_trick() && state.round.tricks_taken == 0),
    }
}

fn trick_open(state: &GameState, _: &ActionArgs) -> bool {
    state.play_zone().len() < state.player_count()
}

fn holds_card(state: &GameState, args: &ActionArgs) -> bool {
    args.card()
        .is_some_and(|card| state.hand_contains(args.player, card))
}

fn trick_finished(state: &GameState, _: &ActionArgs) -> bool {
    state.play_zone().len() == state.player_count()
}

fn can_take_trick(state: &GameState, args: &ActionArgs) -> bool {
    trick_winner(state) == Some(args.player)
}

pub const PASSING_PHASE: HeartsRestriction = Restriction::new(
    "passing_phase",
    "You can't pass cards at this time.",
    passing_phase,
);

pub const PASS_VALID: HeartsRestriction = Restriction::new(
    "pass_valid",
    "You have selected an invalid set of cards to pass.",
    pass_valid,
);

pub const IS_PLAYERS_TURN: HeartsRestriction =
    Restriction::new("is_players_turn", "It's not your turn", is_players_turn);

pub const IS_IN_SUITE: HeartsRestriction =
    Restriction::new("is_in_suite", "Your card is not in suite", is_in_suite);

pub const FIRST_TURN_VALID: HeartsRestriction = Restriction::new(
    "first_turn_valid",
    "That's not a valid card for the first turn",
    first_turn_valid,
);

pub const TRICK_OPEN: HeartsRestriction =
    Restriction::new("trick_open", "The trick is already full", trick_open);

pub const HOLDS_CARD: HeartsRestriction =
    Restriction::new("holds_card", "You don't hold that card", holds_card);

pub const TRICK_FINISHED: HeartsRestriction =
    Restriction::new("trick_finished", "The trick isn't finished", trick_finished);

pub const CAN_TAKE_TRICK: HeartsRestriction =
    Restriction::new("can_take_trick", "You didn't win that trick", can_take_trick);

/// `pass_cards` chain.
pub const PASS_CARDS: &[HeartsRestriction] = &[PASSING_PHASE, PASS_VALID];

/// `play_card` chain.
pub const PLAY_CARD: &[HeartsRestriction] = &[
    IS_PLAYERS_TURN,
    IS_IN_SUITE,
    FIRST_TURN_VALID,
    TRICK_OPEN,
    HOLDS_CARD,
];

/// `take_trick` chain.
pub const TAKE_TRICK: &[HeartsRestriction] = &[TRICK_FINISHED, CAN_TAKE_TRICK];

/// `end_passing` chain.
pub const END_PASSING: &[HeartsRestriction] = &[PASSING_PHASE];
