//! Hearts bindings for Python.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyValueError};
use pyo3::prelude::*;

use crate::core::{EntityId, FollowSuit, GameConfig, PointCardRule};
use crate::error::{ActionError, SetupError};
use crate::games::hearts::{HeartsBuilder, HeartsGame};

use super::py_core::{PyAction, PyPlayerId};

create_exception!(rust_hearts, RestrictionFailure, PyException);

/// Rule rejections raise `RestrictionFailure`; argument errors raise `ValueError`.
fn action_err(err: ActionError) -> PyErr {
    match err.restriction() {
        Some(failure) => RestrictionFailure::new_err(failure.message),
        None => PyValueError::new_err(err.to_string()),
    }
}

fn setup_err(err: SetupError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn entities(ids: Vec<u32>) -> Vec<EntityId> {
    ids.into_iter().map(EntityId::new).collect()
}

fn raw(ids: &[EntityId]) -> Vec<u32> {
    ids.iter().map(|id| id.raw()).collect()
}

/// A dealt round of Hearts.
///
/// Rejected actions raise `RestrictionFailure` carrying the rule's message.
#[pyclass(name = "Hearts")]
pub struct PyHearts {
    game: HeartsGame,
}

#[pymethods]
impl PyHearts {
    /// Seat the players and deal.
    ///
    /// # Arguments
    /// - player_count: Number of players (3-8)
    /// - seed: RNG seed for a deterministic deal
    /// - first_lead_only: Only ban point cards on the opening lead
    /// - follow_if_able: Allow any card when the hand can't follow suit
    #[new]
    #[pyo3(signature = (
        player_count = 4,
        seed = None,
        first_lead_only = false,
        follow_if_able = false
    ))]
    fn new(
        player_count: usize,
        seed: Option<u64>,
        first_lead_only: bool,
        follow_if_able: bool,
    ) -> PyResult<Self> {
        let mut config = GameConfig::new();
        config.seed = seed;
        if first_lead_only {
            config = config.with_point_card_rule(PointCardRule::FirstLead);
        }
        if follow_if_able {
            config = config.with_follow_suit(FollowSuit::IfAble);
        }

        let game = HeartsBuilder::new()
            .config(config)
            .player_count(player_count)
            .build()
            .map_err(setup_err)?;
        Ok(Self { game })
    }

    fn pass_cards(&mut self, player: &PyPlayerId, cards: Vec<u32>) -> PyResult<()> {
        self.game
            .pass_cards(player.0, &entities(cards))
            .map_err(action_err)
    }

    fn play_card(&mut self, player: &PyPlayerId, card: u32) -> PyResult<()> {
        self.game
            .play_card(player.0, EntityId::new(card))
            .map_err(action_err)
    }

    fn take_trick(&mut self, player: &PyPlayerId) -> PyResult<()> {
        self.game.take_trick(player.0).map_err(action_err)
    }

    fn end_passing(&mut self, player: &PyPlayerId) -> PyResult<()> {
        self.game.end_passing(player.0).map_err(action_err)
    }

    fn apply_action(&mut self, player: &PyPlayerId, action: &PyAction) -> PyResult<()> {
        self.game.apply(player.0, &action.0).map_err(action_err)
    }

    fn legal_actions(&self, player: &PyPlayerId) -> Vec<PyAction> {
        self.game
            .legal_actions(player.0)
            .into_iter()
            .map(PyAction)
            .collect()
    }

    fn is_terminal(&self) -> bool {
        self.game.is_terminal()
    }

    /// Card ids in a player's hand.
    fn hand(&self, player: &PyPlayerId) -> Vec<u32> {
        raw(self.game.hand(player.0))
    }

    /// Card ids a player has won.
    fn discard(&self, player: &PyPlayerId) -> Vec<u32> {
        raw(self.game.discard(player.0))
    }

    /// Card ids in the current trick.
    fn play_zone(&self) -> Vec<u32> {
        raw(self.game.play_zone())
    }

    fn pocket(&self) -> Vec<u32> {
        raw(self.game.pocket())
    }

    /// Face value of a card as `(number, suit symbol)`.
    fn card(&self, card: u32) -> Option<(u8, char)> {
        self.game
            .card(EntityId::new(card))
            .map(|c| (c.card.number, c.card.suit.symbol()))
    }

    fn trick_winner(&self) -> Option<PyPlayerId> {
        self.game.trick_winner().map(PyPlayerId)
    }

    #[getter]
    fn current_player(&self) -> Option<PyPlayerId> {
        self.game.round().current_player.map(PyPlayerId)
    }

    #[getter]
    fn is_passing_phase(&self) -> bool {
        self.game.round().is_passing_phase
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.game.state().player_count()
    }

    fn __repr__(&self) -> String {
        let current = self
            .game
            .round()
            .current_player
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        format!(
            "Hearts(players={}, current={}, tricks={})",
            self.game.state().player_count(),
            current,
            self.game.round().tricks_taken
        )
    }
}
