//! Error types.
//!
//! - `RestrictionFailure`: an action was rejected by a rule check
//! - `ActionError`: any reason an action didn't apply
//! - `SetupError`: the table can't be set up

use thiserror::Error;

use crate::core::{EntityId, PlayerId, TemplateId};

/// Result type for actions.
pub type ActionResult<T> = Result<T, ActionError>;

/// A rule check rejected an action.
///
/// Displays as the restriction's fixed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RestrictionFailure {
    /// Name of the failing restriction.
    pub restriction: &'static str,
    /// Human-readable rejection message.
    pub message: &'static str,
}

/// Why an action didn't apply. State is unchanged in every case.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A rule check failed
    #[error(transparent)]
    Restriction(#[from] RestrictionFailure),

    /// No action is registered under this template
    #[error("Unknown action template: {0}")]
    UnknownTemplate(TemplateId),

    /// Wrong number of card arguments for a fixed-arity action
    #[error("{action} takes {expected} card(s), got {actual}")]
    WrongArity {
        action: String,
        expected: usize,
        actual: usize,
    },

    /// The acting player isn't seated
    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// A card argument doesn't name a card of this round
    #[error("Unknown card: {0}")]
    UnknownCard(EntityId),

    /// Actions need a dealt round
    #[error("The round has not been set up")]
    NotSetUp,
}

impl ActionError {
    /// The restriction failure, if a rule check caused this error.
    #[must_use]
    pub fn restriction(&self) -> Option<&RestrictionFailure> {
        match self {
            ActionError::Restriction(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Why a table can't be set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Dealing needs at least one player
    #[error("Cannot deal with no players")]
    NoPlayers,

    /// Below the configured minimum
    #[error("Too few players: {0}")]
    TooFewPlayers(usize),

    /// Above the configured maximum
    #[error("Too many players: {0}")]
    TooManyPlayers(usize),

    /// Setup already ran for this round
    #[error("The round has already been set up")]
    AlreadySetUp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restriction_failure_displays_message() {
        let failure = RestrictionFailure {
            restriction: "is_players_turn",
            message: "It's not your turn",
        };
        assert_eq!(failure.to_string(), "It's not your turn");

        let err: ActionError = failure.into();
        assert_eq!(err.to_string(), "It's not your turn");
        assert_eq!(err.restriction(), Some(&failure));
    }

    #[test]
    fn test_argument_errors() {
        let err = ActionError::WrongArity {
            action: "Play card".to_string(),
            expected: 1,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Play card takes 1 card(s), got 2");
        assert!(err.restriction().is_none());
    }

    #[test]
    fn test_only_rule_rejections_carry_a_restriction() {
        let failure = RestrictionFailure {
            restriction: "passing_phase",
            message: "It's not the passing phase",
        };
        let rejected = ActionError::Restriction(failure);
        assert_eq!(rejected.restriction().map(|f| f.message), Some(failure.message));

        let argument_errors = [
            ActionError::UnknownTemplate(TemplateId::new(9)),
            ActionError::UnknownPlayer(PlayerId::new(7)),
            ActionError::UnknownCard(EntityId::new(99)),
            ActionError::NotSetUp,
        ];
        for err in argument_errors {
            assert!(err.restriction().is_none(), "{err}");
        }
    }

    #[test]
    fn test_setup_error_messages() {
        assert_eq!(SetupError::NoPlayers.to_string(), "Cannot deal with no players");
        assert_eq!(SetupError::TooFewPlayers(2).to_string(), "Too few players: 2");
    }
}
