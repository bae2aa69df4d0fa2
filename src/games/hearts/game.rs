//! Hearts rules and the round facade.

use im::Vector;
use log::debug;

use crate::cards::{CardInstance, PlayingCard};
use crate::core::{
    Action, ActionRecord, EntityId, FollowSuit, GameConfig, GameState, PlayerId, PlayerMap,
    PointCardRule, RoundState, TemplateConfig, TemplateId,
};
use crate::error::{ActionError, ActionResult, SetupError};
use crate::rules::{ActionSpec, RulesEngine};

use super::actions;
use super::restrictions::{self, ActionArgs};
use super::setup;

/// Action templates for Hearts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Templates {
    /// Pass a selection of cards to the left.
    pub pass_cards: TemplateId,
    /// Play a card into the trick.
    pub play_card: TemplateId,
    /// Take a finished trick.
    pub take_trick: TemplateId,
    /// Close the passing phase and establish turn order.
    pub end_passing: TemplateId,
}

impl Templates {
    fn new() -> Self {
        Self {
            pass_cards: TemplateId::new(0),
            play_card: TemplateId::new(1),
            take_trick: TemplateId::new(2),
            end_passing: TemplateId::new(3),
        }
    }
}

/// The Hearts rule set: one `ActionSpec` per template.
#[derive(Debug)]
pub struct HeartsRules {
    templates: Templates,
    configs: Vec<TemplateConfig>,
    specs: Vec<ActionSpec<GameState, ActionArgs>>,
}

impl Default for HeartsRules {
    fn default() -> Self {
        Self::new()
    }
}

impl HeartsRules {
    pub fn new() -> Self {
        let templates = Templates::new();

        let specs = vec![
            ActionSpec::new(
                TemplateConfig::no_args(templates.pass_cards, "Pass cards").with_variable_pointers(),
                restrictions::PASS_CARDS,
                actions::pass_cards,
            ),
            ActionSpec::new(
                TemplateConfig::new(templates.play_card, "Play card", 1),
                restrictions::PLAY_CARD,
                actions::play_card,
            ),
            ActionSpec::new(
                TemplateConfig::no_args(templates.take_trick, "Take trick"),
                restrictions::TAKE_TRICK,
                actions::take_trick,
            ),
            ActionSpec::new(
                TemplateConfig::no_args(templates.end_passing, "End passing"),
                restrictions::END_PASSING,
                actions::end_passing,
            ),
        ];
        let configs = specs.iter().map(|s| s.template.clone()).collect();

        Self {
            templates,
            configs,
            specs,
        }
    }

    /// Get the template ids.
    pub fn ids(&self) -> &Templates {
        &self.templates
    }

    /// Get the spec registered for a template.
    pub fn spec(&self, template: TemplateId) -> Option<&ActionSpec<GameState, ActionArgs>> {
        self.specs.iter().find(|s| s.template.id == template)
    }

    fn pass_candidates(&self, state: &GameState, player: PlayerId, prior: &[EntityId]) -> Vec<EntityId> {
        let need = state.config.pass_count;
        if !state.round.is_passing_phase || prior.len() >= need {
            return vec![];
        }

        // Combinations in hand order: each pick comes after the previous one
        // and leaves enough cards to complete the selection.
        let hand = state.hand(player);
        let start = prior
            .last()
            .and_then(|last| hand.iter().position(|c| c == last))
            .map_or(0, |i| i + 1);
        let remaining = need - prior.len();

        hand.iter()
            .enumerate()
            .skip(start)
            .take_while(|(i, _)| hand.len() - i >= remaining)
            .map(|(_, &card)| card)
            .collect()
    }

    fn play_candidates(&self, state: &GameState, player: PlayerId, prior: &[EntityId]) -> Vec<EntityId> {
        if !prior.is_empty() {
            return vec![];
        }
        let Some(spec) = self.spec(self.templates.play_card) else {
            return vec![];
        };

        state
            .hand(player)
            .iter()
            .copied()
            .filter(|&card| spec.check(state, &ActionArgs::with_cards(player, &[card])).is_ok())
            .collect()
    }

    fn validate(
        &self,
        state: &GameState,
        player: PlayerId,
        action: &Action,
    ) -> ActionResult<&ActionSpec<GameState, ActionArgs>> {
        if !state.is_dealt() {
            return Err(ActionError::NotSetUp);
        }
        let spec = self
            .spec(action.template)
            .ok_or(ActionError::UnknownTemplate(action.template))?;
        if !state.players().contains(player) {
            return Err(ActionError::UnknownPlayer(player));
        }
        if !spec.template.accepts(action.pointer_count()) {
            return Err(ActionError::WrongArity {
                action: spec.template.name.clone(),
                expected: spec.template.pointer_count,
                actual: action.pointer_count(),
            });
        }
        if !spec.template.variable_pointers {
            if let Some(&unknown) = action.pointers.iter().find(|&&p| state.get_card(p).is_none()) {
                return Err(ActionError::UnknownCard(unknown));
            }
        }
        Ok(spec)
    }
}

impl RulesEngine for HeartsRules {
    fn templates(&self) -> &[TemplateConfig] {
        &self.configs
    }

    fn legal_templates(&self, state: &GameState, player: PlayerId) -> Vec<TemplateId> {
        if !state.is_dealt() || !state.players().contains(player) {
            return vec![];
        }

        self.specs
            .iter()
            .filter(|spec| {
                let template = &spec.template;
                if template.variable_pointers || template.pointer_count > 0 {
                    !self.legal_pointers(state, player, template.id, &[]).is_empty()
                } else {
                    spec.check(state, &ActionArgs::player(player)).is_ok()
                }
            })
            .map(|spec| spec.template.id)
            .collect()
    }

    fn legal_pointers(
        &self,
        state: &GameState,
        player: PlayerId,
        template: TemplateId,
        prior_pointers: &[EntityId],
    ) -> Vec<EntityId> {
        if template == self.templates.pass_cards {
            self.pass_candidates(state, player, prior_pointers)
        } else if template == self.templates.play_card {
            self.play_candidates(state, player, prior_pointers)
        } else {
            vec![]
        }
    }

    fn apply_action(&self, state: &mut GameState, player: PlayerId, action: &Action) -> ActionResult<()> {
        let spec = self.validate(state, player, action)?;
        let args = ActionArgs::with_cards(player, &action.pointers);

        match spec.invoke(state, &args) {
            Ok(()) => {
                debug!("{} applied {} {:?}", player, spec.template.name, action.pointers);
                state.record_action(player, action.clone());
                Ok(())
            }
            Err(failure) => {
                debug!(
                    "{} rejected {}: {} ({})",
                    player, spec.template.name, failure.restriction, failure.message
                );
                Err(failure.into())
            }
        }
    }

    fn is_terminal(&self, state: &GameState) -> bool {
        state.is_dealt()
            && state.play_zone().is_empty()
            && state.players().ids().all(|p| state.hand(p).is_empty())
    }
}

/// A single round of Hearts: the rules plus the state they govern.
///
/// ```
/// use rust_hearts::core::GameConfig;
/// use rust_hearts::games::hearts::HeartsGame;
///
/// let mut game = HeartsGame::new(GameConfig::new().with_seed(42));
/// let players: Vec<_> = (0..4).map(|_| game.add_player().unwrap()).collect();
/// game.set_up().unwrap();
///
/// let selection = game.hand(players[0])[..3].to_vec();
/// game.pass_cards(players[0], &selection).unwrap();
/// assert!(selection.iter().all(|c| game.hand(players[1]).contains(c)));
/// ```
#[derive(Debug)]
pub struct HeartsGame {
    rules: HeartsRules,
    state: GameState,
}

impl HeartsGame {
    /// Create an empty table.
    pub fn new(config: GameConfig) -> Self {
        Self {
            rules: HeartsRules::new(),
            state: GameState::new(config),
        }
    }

    /// Seat a player. Seating order is turn order.
    pub fn add_player(&mut self) -> Result<PlayerId, SetupError> {
        self.state.add_player()
    }

    /// Shuffle and deal. Runs once per round.
    pub fn set_up(&mut self) -> Result<(), SetupError> {
        setup::deal(&mut self.state)
    }

    // === Actions ===

    /// Apply an action built from templates and pointers.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> ActionResult<()> {
        self.rules.apply_action(&mut self.state, player, action)
    }

    /// Pass a selection of cards to the player on the left.
    pub fn pass_cards(&mut self, player: PlayerId, cards: &[EntityId]) -> ActionResult<()> {
        let action = Action::with_pointers(self.rules.templates.pass_cards, cards);
        self.apply(player, &action)
    }

    /// Play a card into the current trick.
    pub fn play_card(&mut self, player: PlayerId, card: EntityId) -> ActionResult<()> {
        let action = Action::with_pointers(self.rules.templates.play_card, &[card]);
        self.apply(player, &action)
    }

    /// Take the finished trick.
    pub fn take_trick(&mut self, player: PlayerId) -> ActionResult<()> {
        let action = Action::new(self.rules.templates.take_trick);
        self.apply(player, &action)
    }

    /// Close the passing phase.
    pub fn end_passing(&mut self, player: PlayerId) -> ActionResult<()> {
        let action = Action::new(self.rules.templates.end_passing);
        self.apply(player, &action)
    }

    // === Queries ===

    /// Get the rules.
    pub fn rules(&self) -> &HeartsRules {
        &self.rules
    }

    /// Get the template ids.
    pub fn templates(&self) -> &Templates {
        self.rules.ids()
    }

    /// Get the round state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the round state mutably, bypassing every restriction.
    ///
    /// For tests and tools that need to stage a position. Nothing done
    /// through this reference is checked or recorded in the history.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Turn bookkeeping.
    pub fn round(&self) -> &RoundState {
        &self.state.round
    }

    /// Seated players in seating order.
    pub fn players(&self) -> Vec<PlayerId> {
        self.state.players().ids().collect()
    }

    /// The player seated to the left of `player`.
    pub fn player_to_left(&self, player: PlayerId) -> Option<PlayerId> {
        self.state.player_to_left(player)
    }

    /// Cards in `player`'s hand.
    pub fn hand(&self, player: PlayerId) -> &[EntityId] {
        self.state.hand(player)
    }

    /// Cards `player` has won.
    pub fn discard(&self, player: PlayerId) -> &[EntityId] {
        self.state.discard(player)
    }

    /// Cards in the current trick, in play order.
    pub fn play_zone(&self) -> &[EntityId] {
        self.state.play_zone()
    }

    /// Undealt leftovers.
    pub fn pocket(&self) -> &[EntityId] {
        self.state.pocket()
    }

    /// Look up a card.
    pub fn card(&self, id: EntityId) -> Option<&CardInstance> {
        self.state.get_card(id)
    }

    /// Find a card in `player`'s hand by face value.
    pub fn find_in_hand(&self, player: PlayerId, face: PlayingCard) -> Option<EntityId> {
        self.hand(player)
            .iter()
            .copied()
            .find(|&id| self.card(id).is_some_and(|c| c.card == face))
    }

    /// Hand size per player. `None` before anyone is seated.
    pub fn hand_sizes(&self) -> Option<PlayerMap<usize>> {
        if self.state.player_count() == 0 {
            return None;
        }
        Some(PlayerMap::new(self.state.player_count(), |p| self.hand(p).len()))
    }

    /// Applied actions, oldest first.
    pub fn history(&self) -> &Vector<ActionRecord> {
        self.state.history()
    }

    /// Who would win the trick as it stands.
    pub fn trick_winner(&self) -> Option<PlayerId> {
        restrictions::trick_winner(&self.state)
    }

    /// Every action `player` could legally take now.
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        self.rules.legal_actions(&self.state, player)
    }

    /// True when every card has been played and taken.
    pub fn is_terminal(&self) -> bool {
        self.rules.is_terminal(&self.state)
    }

    /// Create a card in `player`'s hand, owned by and visible to them.
    ///
    /// For staging positions in tests and tools. Bypasses every restriction
    /// and is not recorded in the history.
    #[doc(hidden)]
    pub fn give_card(&mut self, player: PlayerId, face: PlayingCard) -> Option<EntityId> {
        let hand = self.state.player_zones(player)?.hand;
        let id = self.state.add_card(face, hand)?;
        if let Some(instance) = self.state.get_card_mut(id) {
            instance.set_owner(Some(player));
            instance.show_only_to(player);
        }
        Some(id)
    }
}

/// Builder for a dealt round.
///
/// ```
/// use rust_hearts::games::hearts::HeartsBuilder;
///
/// let game = HeartsBuilder::new().player_count(3).seed(42).build().unwrap();
/// assert_eq!(game.pocket().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct HeartsBuilder {
    config: GameConfig,
    player_count: usize,
}

impl Default for HeartsBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            player_count: 4,
        }
    }
}

impl HeartsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn point_card_rule(mut self, rule: PointCardRule) -> Self {
        self.config.point_card_rule = rule;
        self
    }

    pub fn follow_suit(mut self, rule: FollowSuit) -> Self {
        self.config.follow_suit = rule;
        self
    }

    /// Seat the players and deal.
    pub fn build(self) -> Result<HeartsGame, SetupError> {
        let mut game = HeartsGame::new(self.config);
        for _ in 0..self.player_count {
            game.add_player()?;
        }
        game.set_up()?;
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn dealt(seed: u64) -> (HeartsGame, Vec<PlayerId>) {
        let game = HeartsBuilder::new().seed(seed).build().unwrap();
        let players = game.players();
        (game, players)
    }

    #[test]
    fn test_templates_registered() {
        let rules = HeartsRules::new();
        assert_eq!(rules.templates().len(), 4);

        let pass = rules.template(rules.ids().pass_cards).unwrap();
        assert!(pass.variable_pointers);
        let play = rules.template(rules.ids().play_card).unwrap();
        assert_eq!(play.pointer_count, 1);
        assert!(rules.template(TemplateId::new(9)).is_none());
    }

    #[test]
    fn test_actions_before_setup() {
        let mut game = HeartsGame::new(GameConfig::default());
        let p0 = game.add_player().unwrap();
        assert_eq!(game.take_trick(p0), Err(ActionError::NotSetUp));
        assert!(game.legal_actions(p0).is_empty());
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_argument_errors() {
        let (mut game, players) = dealt(1);
        let card = game.hand(players[0])[0];

        assert_eq!(
            game.apply(players[0], &Action::new(TemplateId::new(42))),
            Err(ActionError::UnknownTemplate(TemplateId::new(42)))
        );
        assert_eq!(
            game.play_card(PlayerId::new(7), card),
            Err(ActionError::UnknownPlayer(PlayerId::new(7)))
        );
        assert_eq!(
            game.play_card(players[0], EntityId::new(999)),
            Err(ActionError::UnknownCard(EntityId::new(999)))
        );

        let two_cards = Action::with_pointers(game.templates().play_card, &[card, card]);
        assert!(matches!(
            game.apply(players[0], &two_cards),
            Err(ActionError::WrongArity { expected: 1, actual: 2, .. })
        ));
        assert!(game.state().history().is_empty());
    }

    #[test]
    fn test_history_records_successes_only() {
        let (mut game, players) = dealt(2);
        let selection = game.hand(players[0])[..3].to_vec();

        assert!(game.pass_cards(players[0], &selection[..2]).is_err());
        game.pass_cards(players[0], &selection).unwrap();

        let history = game.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].player, players[0]);
        assert_eq!(history[0].action.pointers.as_slice(), selection.as_slice());
    }

    #[test]
    fn test_legal_pass_selections_are_combinations() {
        let (game, players) = dealt(3);
        let actions = game.legal_actions(players[0]);

        let passes: Vec<_> = actions
            .iter()
            .filter(|a| a.template == game.templates().pass_cards)
            .collect();
        // C(13, 3)
        assert_eq!(passes.len(), 286);
        assert!(passes.iter().all(|a| a.pointer_count() == 3));

        assert!(actions.iter().any(|a| a.template == game.templates().end_passing));
        assert!(!actions.iter().any(|a| a.template == game.templates().play_card));
    }

    #[test]
    fn test_end_passing_gives_lead_to_two_of_clubs() {
        let (mut game, players) = dealt(4);
        let holder = players
            .iter()
            .copied()
            .find(|&p| game.find_in_hand(p, PlayingCard::TWO_OF_CLUBS).is_some())
            .unwrap();

        game.end_passing(players[0]).unwrap();

        assert!(!game.round().is_passing_phase);
        assert_eq!(game.round().current_player, Some(holder));
        assert_eq!(
            game.end_passing(players[0]).unwrap_err().to_string(),
            "You can't pass cards at this time."
        );
    }

    #[test]
    fn test_end_passing_with_two_of_clubs_in_pocket() {
        let mut game = HeartsBuilder::new().player_count(3).seed(5).build().unwrap();
        let state = game.state_mut();
        let pocket = state.pocket()[0];
        state.get_card_mut(pocket).unwrap().card = PlayingCard::TWO_OF_CLUBS;
        // Rename the real two so only the pocket holds it.
        let real = game
            .players()
            .into_iter()
            .find_map(|p| game.find_in_hand(p, PlayingCard::TWO_OF_CLUBS));
        if let Some(real) = real {
            game.state_mut().get_card_mut(real).unwrap().card = PlayingCard::new(1, Suit::Clubs);
        }

        game.end_passing(PlayerId::new(2)).unwrap();
        assert_eq!(game.round().current_player, Some(PlayerId::new(0)));
    }

    #[test]
    fn test_hand_sizes() {
        let (game, _) = dealt(6);
        let sizes = game.hand_sizes().unwrap();
        assert!(sizes.iter().all(|(_, &n)| n == 13));

        assert!(HeartsGame::new(GameConfig::default()).hand_sizes().is_none());
    }
}
