//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions modify state
//! - When the round is over

use crate::core::action::Action;
use crate::core::config::{TemplateConfig, TemplateId};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::ActionResult;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_templates`: Return empty vec if player can't act
/// - `legal_pointers`: Called iteratively for multi-pointer actions
/// - `apply_action`: Must leave `state` untouched when it returns `Err`
pub trait RulesEngine {
    /// Get the action templates this game defines.
    fn templates(&self) -> &[TemplateConfig];

    /// Get legal action templates for a player.
    fn legal_templates(&self, state: &GameState, player: PlayerId) -> Vec<TemplateId>;

    /// Get legal card pointers for an action being built.
    ///
    /// Called iteratively as pointers are selected:
    /// - First call: `prior_pointers` is empty
    /// - Second call: `prior_pointers` has first pointer
    /// - etc.
    ///
    /// Returns empty when no more pointers are needed.
    fn legal_pointers(
        &self,
        state: &GameState,
        player: PlayerId,
        template: TemplateId,
        prior_pointers: &[EntityId],
    ) -> Vec<EntityId>;

    /// Apply an action to the game state.
    fn apply_action(&self, state: &mut GameState, player: PlayerId, action: &Action) -> ActionResult<()>;

    /// Check if the round is over.
    fn is_terminal(&self, state: &GameState) -> bool;

    // === Convenience Methods ===

    /// Get a template config by ID.
    fn template(&self, id: TemplateId) -> Option<&TemplateConfig> {
        self.templates().iter().find(|t| t.id == id)
    }

    /// Enumerate all legal actions for a player.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        let mut actions = Vec::new();

        for template in self.legal_templates(state, player) {
            self.enumerate_actions_for_template(state, player, template, &[], &mut actions);
        }

        actions
    }

    /// Helper to enumerate actions for a template recursively.
    fn enumerate_actions_for_template(
        &self,
        state: &GameState,
        player: PlayerId,
        template: TemplateId,
        prior_pointers: &[EntityId],
        out: &mut Vec<Action>,
    ) {
        let next_pointers = self.legal_pointers(state, player, template, prior_pointers);

        if next_pointers.is_empty() {
            out.push(Action::with_pointers(template, prior_pointers));
        } else {
            for pointer in next_pointers {
                let mut pointers = prior_pointers.to_vec();
                pointers.push(pointer);
                self.enumerate_actions_for_template(state, player, template, &pointers, out);
            }
        }
    }
}
