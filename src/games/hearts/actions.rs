//! Hearts action bodies.
//!
//! These run only after the action's restriction chain has passed, so they
//! assume the arguments are legal for the current state.

use crate::cards::PlayingCard;
use crate::core::{GameState, ZoneId};

use super::restrictions::ActionArgs;

/// Move the selection to the hand of the player on the left.
pub(crate) fn pass_cards(state: &mut GameState, args: &ActionArgs) {
    let Some(recipient) = state.player_to_left(args.player) else {
        return;
    };
    let Some(to) = state.player_zones(recipient) else {
        return;
    };

    for &card in &args.cards {
        state.zones.move_to_zone(card, to.hand);
        if let Some(instance) = state.get_card_mut(card) {
            instance.set_owner(Some(recipient));
            instance.set_face_up(recipient, true);
        }
    }
}

/// Commit a card to the trick and hand the turn to the next seat.
pub(crate) fn play_card(state: &mut GameState, args: &ActionArgs) {
    let Some(card) = args.card() else {
        return;
    };

    state.zones.move_to_zone(card, ZoneId::PLAY);
    let viewers: Vec<_> = state.players().ids().collect();
    let suit = state.get_card_mut(card).map(|instance| {
        instance.set_owner(Some(args.player));
        instance.reveal_to(viewers);
        instance.card.suit
    });

    if state.round.leading_suit.is_none() {
        state.round.leading_suit = suit;
    }

    let from = state.round.current_player.unwrap_or(args.player);
    state.round.current_player = state.player_to_left(from);
    state.round.is_passing_phase = false;
}

/// Sweep the trick into the winner's discard; the winner leads next.
pub(crate) fn take_trick(state: &mut GameState, args: &ActionArgs) {
    let Some(zones) = state.player_zones(args.player) else {
        return;
    };

    for card in state.zones.move_all(ZoneId::PLAY, zones.discard) {
        if let Some(instance) = state.get_card_mut(card) {
            instance.show_only_to(args.player);
        }
    }

    state.round.leading_suit = None;
    state.round.current_player = Some(args.player);
    state.round.tricks_taken += 1;
}

/// Close the passing phase. The holder of the two of clubs leads; when it
/// sits in the pocket, the first seat does.
pub(crate) fn end_passing(state: &mut GameState, _: &ActionArgs) {
    state.round.is_passing_phase = false;
    state.round.current_player = state
        .holder_of(PlayingCard::TWO_OF_CLUBS)
        .or_else(|| state.players().ids().next());
}
