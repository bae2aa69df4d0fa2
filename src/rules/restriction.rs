//! Restrictions: named legality predicates.
//!
//! A restriction pairs a pure check with the message reported when the
//! check fails. Chains of restrictions are evaluated in declared order and
//! stop at the first failure.

use crate::error::RestrictionFailure;

/// A named, pure legality predicate over a state `S` and arguments `A`.
pub struct Restriction<S, A> {
    /// Stable name, used in logs and errors.
    pub name: &'static str,
    /// Message reported on failure.
    pub message: &'static str,
    check: fn(&S, &A) -> bool,
}

impl<S, A> Restriction<S, A> {
    /// Create a restriction.
    pub const fn new(name: &'static str, message: &'static str, check: fn(&S, &A) -> bool) -> Self {
        Self {
            name,
            message,
            check,
        }
    }

    /// Run the predicate.
    pub fn holds(&self, state: &S, args: &A) -> bool {
        (self.check)(state, args)
    }

    /// Run the predicate, turning a failure into a `RestrictionFailure`.
    pub fn evaluate(&self, state: &S, args: &A) -> Result<(), RestrictionFailure> {
        if self.holds(state, args) {
            Ok(())
        } else {
            Err(self.failure())
        }
    }

    /// The failure this restriction reports.
    pub fn failure(&self) -> RestrictionFailure {
        RestrictionFailure {
            restriction: self.name,
            message: self.message,
        }
    }
}

impl<S, A> std::fmt::Debug for Restriction<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Restriction")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

/// Evaluate a chain left to right, returning the first failure.
pub fn evaluate_all<S, A>(
    restrictions: &[Restriction<S, A>],
    state: &S,
    args: &A,
) -> Result<(), RestrictionFailure> {
    restrictions.iter().try_for_each(|r| r.evaluate(state, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counter {
        calls: Cell<u32>,
        value: i32,
    }

    fn positive(state: &Counter, _: &()) -> bool {
        state.calls.set(state.calls.get() + 1);
        state.value > 0
    }

    fn even(state: &Counter, _: &()) -> bool {
        state.calls.set(state.calls.get() + 1);
        state.value % 2 == 0
    }

    const CHAIN: &[Restriction<Counter, ()>] = &[
        Restriction::new("positive", "must be positive", positive),
        Restriction::new("even", "must be even", even),
    ];

    #[test]
    fn test_all_pass() {
        let state = Counter { calls: Cell::new(0), value: 4 };
        assert_eq!(evaluate_all(CHAIN, &state, &()), Ok(()));
        assert_eq!(state.calls.get(), 2);
    }

    #[test]
    fn test_first_failure_wins() {
        let state = Counter { calls: Cell::new(0), value: 3 };
        let err = evaluate_all(CHAIN, &state, &()).unwrap_err();
        assert_eq!(err.restriction, "even");
        assert_eq!(err.message, "must be even");
    }

    #[test]
    fn test_short_circuits() {
        let state = Counter { calls: Cell::new(0), value: -2 };
        let err = evaluate_all(CHAIN, &state, &()).unwrap_err();
        assert_eq!(err.restriction, "positive");
        assert_eq!(state.calls.get(), 1);
    }
}
