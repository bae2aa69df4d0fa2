//! Round setup: build the deck, shuffle, deal.

use log::info;

use crate::cards::standard_deck;
use crate::core::{EntityId, GameState, PlayerId, ZoneId};
use crate::error::SetupError;

/// Deal a fresh deck to the seated players.
///
/// Each player, in seating order, receives their whole share of
/// `52 / player_count` cards from the top of the shuffled deck before the
/// next player is served. Dealt cards belong to, and are face up for, their
/// recipient only. Leftovers go to the pocket.
pub fn deal(state: &mut GameState) -> Result<(), SetupError> {
    if state.is_dealt() {
        return Err(SetupError::AlreadySetUp);
    }

    let player_count = state.player_count();
    if player_count == 0 {
        return Err(SetupError::NoPlayers);
    }
    if player_count < state.config.min_players {
        return Err(SetupError::TooFewPlayers(player_count));
    }
    if player_count > state.config.max_players {
        return Err(SetupError::TooManyPlayers(player_count));
    }

    let deck: Vec<EntityId> = standard_deck()
        .into_iter()
        .map(|face| state.add_to_deck(face))
        .collect();
    state.zones.shuffle_zone(ZoneId::DECK, &mut state.rng);

    let share = deck.len() / player_count;
    let players: Vec<PlayerId> = state.players().ids().collect();
    for player in players {
        let Some(zones) = state.player_zones(player) else {
            continue;
        };
        for _ in 0..share {
            let Some(card) = state.zones.top_card(ZoneId::DECK) else {
                break;
            };
            state.zones.move_to_zone(card, zones.hand);
            if let Some(instance) = state.get_card_mut(card) {
                instance.set_owner(Some(player));
                instance.show_only_to(player);
            }
        }
    }

    let leftover = state.zones.move_all(ZoneId::DECK, ZoneId::POCKET);
    state.mark_dealt();

    info!(
        "dealt {} cards to each of {} players, {} to the pocket (seed {})",
        share,
        player_count,
        leftover.len(),
        state.rng.seed()
    );
    Ok(())
}
