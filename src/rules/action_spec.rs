//! Action specifications: schema + restriction chain + mutation.
//!
//! An `ActionSpec` is the data form of a guarded action. `invoke` checks the
//! whole restriction chain against an immutable borrow of the state before
//! the mutation gets a mutable one, so a rejected action leaves no trace.

use crate::core::config::TemplateConfig;
use crate::error::RestrictionFailure;

use super::restriction::{evaluate_all, Restriction};

/// A guarded action over state `S` with arguments `A`.
pub struct ActionSpec<S: 'static, A: 'static> {
    /// Identity and parameter schema.
    pub template: TemplateConfig,
    /// Checked in order before `apply` runs.
    pub restrictions: &'static [Restriction<S, A>],
    apply: fn(&mut S, &A),
}

impl<S: 'static, A: 'static> ActionSpec<S, A> {
    /// Create an action spec.
    pub fn new(
        template: TemplateConfig,
        restrictions: &'static [Restriction<S, A>],
        apply: fn(&mut S, &A),
    ) -> Self {
        Self {
            template,
            restrictions,
            apply,
        }
    }

    /// Evaluate the restriction chain without mutating anything.
    pub fn check(&self, state: &S, args: &A) -> Result<(), RestrictionFailure> {
        evaluate_all(self.restrictions, state, args)
    }

    /// Check the chain, then apply the mutation.
    pub fn invoke(&self, state: &mut S, args: &A) -> Result<(), RestrictionFailure> {
        self.check(state, args)?;
        (self.apply)(state, args);
        Ok(())
    }
}

impl<S: 'static, A: 'static> std::fmt::Debug for ActionSpec<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionSpec")
            .field("template", &self.template)
            .field("restrictions", &self.restrictions)
            .finish()
    }
}
