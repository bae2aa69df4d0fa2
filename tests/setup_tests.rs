//! Dealing tests.
//!
//! These tests verify that setup conserves the deck for every supported
//! table size and that the deal is reproducible from its seed.

use std::collections::HashSet;

use proptest::prelude::*;

use rust_hearts::core::{GameConfig, PlayerId};
use rust_hearts::games::hearts::{HeartsBuilder, HeartsGame};
use rust_hearts::{FollowSuit, PlayingCard, PointCardRule, SetupError};

fn faces(game: &HeartsGame, ids: &[rust_hearts::EntityId]) -> Vec<PlayingCard> {
    ids.iter().map(|&id| game.card(id).unwrap().card).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every card lands in exactly one hand or the pocket.
    #[test]
    fn prop_deal_conserves_deck(players in 3usize..=8, seed in any::<u64>()) {
        let game = HeartsBuilder::new().player_count(players).seed(seed).build().unwrap();

        let mut seen = HashSet::new();
        for player in PlayerId::all(players) {
            let hand = game.hand(player);
            prop_assert_eq!(hand.len(), 52 / players);
            for face in faces(&game, hand) {
                prop_assert!(seen.insert(face), "duplicate card {}", face);
            }
        }
        for face in faces(&game, game.pocket()) {
            prop_assert!(seen.insert(face), "duplicate card {}", face);
        }

        prop_assert_eq!(seen.len(), 52);
        prop_assert_eq!(game.pocket().len(), 52 % players);
    }

    /// The same seed always produces the same deal.
    #[test]
    fn prop_same_seed_same_deal(players in 3usize..=8, seed in any::<u64>()) {
        let a = HeartsBuilder::new().player_count(players).seed(seed).build().unwrap();
        let b = HeartsBuilder::new().player_count(players).seed(seed).build().unwrap();

        for player in PlayerId::all(players) {
            prop_assert_eq!(faces(&a, a.hand(player)), faces(&b, b.hand(player)));
        }
        prop_assert_eq!(faces(&a, a.pocket()), faces(&b, b.pocket()));
    }
}

#[test]
fn test_deal_three_and_four_players() {
    for (players, share, pocket) in [(3, 17, 1), (4, 13, 0)] {
        let game = HeartsBuilder::new().player_count(players).seed(11).build().unwrap();
        let dealt: usize = game.players().iter().map(|&p| game.hand(p).len()).sum();

        assert_eq!(dealt + game.pocket().len(), 52);
        assert!(game.players().iter().all(|&p| game.hand(p).len() == share));
        assert_eq!(game.pocket().len(), pocket);
    }
}

#[test]
fn test_different_seeds_differ() {
    let a = HeartsBuilder::new().seed(1).build().unwrap();
    let b = HeartsBuilder::new().seed(2).build().unwrap();
    let p0 = PlayerId::new(0);

    assert_ne!(faces(&a, a.hand(p0)), faces(&b, b.hand(p0)));
}

#[test]
fn test_round_starts_in_passing_phase() {
    let game = HeartsBuilder::new().seed(3).build().unwrap();

    assert!(game.round().is_passing_phase);
    assert_eq!(game.round().leading_suit, None);
    assert_eq!(game.round().current_player, None);
    assert!(game.play_zone().is_empty());
    assert!(!game.is_terminal());
}

#[test]
fn test_setup_errors() {
    assert_eq!(HeartsBuilder::new().player_count(0).build().unwrap_err(), SetupError::NoPlayers);
    assert_eq!(
        HeartsBuilder::new().player_count(2).build().unwrap_err(),
        SetupError::TooFewPlayers(2)
    );
    assert_eq!(
        HeartsBuilder::new().player_count(9).build().unwrap_err(),
        SetupError::TooManyPlayers(9)
    );

    let mut game = HeartsBuilder::new().seed(4).build().unwrap();
    assert_eq!(game.set_up(), Err(SetupError::AlreadySetUp));
}

#[test]
fn test_table_limits_follow_config() {
    let mut config = GameConfig::new().with_seed(5);
    config.min_players = 2;

    let game = HeartsBuilder::new().config(config).player_count(2).build().unwrap();
    assert!(game.players().iter().all(|&p| game.hand(p).len() == 26));
}

#[test]
fn test_config_from_json() {
    let config: GameConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, GameConfig::default());

    let config: GameConfig = serde_json::from_str(
        r#"{"seed": 9, "point_card_rule": "FirstLead", "follow_suit": "IfAble"}"#,
    )
    .unwrap();
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.point_card_rule, PointCardRule::FirstLead);
    assert_eq!(config.follow_suit, FollowSuit::IfAble);
    assert_eq!(config.pass_count, 3);

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
}
