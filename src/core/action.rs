//! Action representation: template + card pointers.
//!
//! Actions are compositional: a template (the "verb") plus card pointers
//! (the "nouns"). The acting player travels alongside the action rather
//! than inside it:
//! - "Take trick" = template only, no pointers
//! - "Play card X" = template + 1 pointer
//! - "Pass X, Y, Z" = template + 3 pointers

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::TemplateId;
use super::entity::EntityId;
use super::player::PlayerId;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use rust_hearts::core::{Action, EntityId, TemplateId};
///
/// let take = Action::new(TemplateId::new(2));
/// let play = Action::with_pointers(TemplateId::new(1), &[EntityId(5)]);
///
/// assert!(take.is_no_arg());
/// assert_eq!(play.pointer_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The action template (type of action).
    pub template: TemplateId,

    /// Card pointers for this action.
    /// SmallVec keeps a full pass selection inline.
    pub pointers: SmallVec<[EntityId; 3]>,
}

impl Action {
    /// Create an action with no pointers.
    #[must_use]
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            pointers: SmallVec::new(),
        }
    }

    /// Create an action with the given pointers.
    #[must_use]
    pub fn with_pointers(template: TemplateId, pointers: &[EntityId]) -> Self {
        Self {
            template,
            pointers: SmallVec::from_slice(pointers),
        }
    }

    /// Add a pointer to this action.
    pub fn push_pointer(&mut self, entity: EntityId) {
        self.pointers.push(entity);
    }

    /// Get the number of pointers.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Check if this action has no pointers.
    #[must_use]
    pub fn is_no_arg(&self) -> bool {
        self.pointers.is_empty()
    }
}

/// A successfully applied action, kept in the round history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Tricks completed before this action.
    pub trick: u32,

    /// Position in the round's history.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, trick: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            trick,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_with_pointers() {
        let action = Action::with_pointers(
            TemplateId::new(0),
            &[EntityId(5), EntityId(10), EntityId(11)],
        );

        assert_eq!(action.template, TemplateId::new(0));
        assert!(!action.is_no_arg());
        assert_eq!(action.pointer_count(), 3);
        assert!(!action.pointers.spilled());
    }

    #[test]
    fn test_action_push_pointer() {
        let mut action = Action::new(TemplateId::new(0));
        action.push_pointer(EntityId(1));
        action.push_pointer(EntityId(2));

        assert_eq!(action.pointers.as_slice(), &[EntityId(1), EntityId(2)]);
    }

    #[test]
    fn test_action_equality() {
        let a1 = Action::with_pointers(TemplateId::new(1), &[EntityId(5)]);
        let a2 = Action::with_pointers(TemplateId::new(1), &[EntityId(5)]);
        let a3 = Action::with_pointers(TemplateId::new(1), &[EntityId(6)]);

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
    }

    #[test]
    fn test_action_record_serialization() {
        let action = Action::with_pointers(TemplateId::new(1), &[EntityId(5)]);
        let record = ActionRecord::new(PlayerId::new(1), action, 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
