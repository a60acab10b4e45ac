//! Drop validators and their combinators.
//!
//! A [`Validator`] is a pure admission predicate over the dragged entity and
//! the game state. It answers with a [`Verdict`], optionally explaining a
//! rejection, or fails with a [`RuleError`]. Failures are treated as "not
//! valid" by the resolver and logged there.
//!
//! Validators are cheap to clone (shared function pointer) and carry no
//! mutable state, so one instance can guard any number of zones.
//!
//! ## Example
//!
//! ```
//! use ccg_drop::rules::{combine, either, not, Validator};
//!
//! // entity = card cost, state = mana available
//! let affordable = Validator::from_fn(|cost: &u32, mana: &u32| cost <= mana)
//!     .with_reason("Not enough mana");
//! let free = Validator::from_fn(|cost: &u32, _: &u32| *cost == 0);
//! let expensive = not(affordable.clone());
//!
//! let playable = either([free, affordable.clone()]);
//! assert!(playable.is_valid(&0, &0).unwrap());
//! assert!(!playable.is_valid(&3, &2).unwrap());
//!
//! let strict = combine([affordable, not(expensive)]);
//! assert_eq!(strict.check(&5, &1).unwrap().reason(), Some("Not enough mana"));
//! ```

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::RuleError;

/// Outcome of a validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The drop is allowed.
    Accept,
    /// The drop is refused, with an optional player-facing explanation.
    Reject { reason: Option<String> },
}

impl Verdict {
    /// A rejection without a reason.
    #[must_use]
    pub const fn reject() -> Self {
        Self::Reject { reason: None }
    }

    /// A rejection with a reason.
    pub fn reject_because(reason: impl Into<String>) -> Self {
        Self::Reject {
            reason: Some(reason.into()),
        }
    }

    /// Check if this verdict accepts.
    #[must_use]
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }

    /// Rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accept => None,
            Self::Reject { reason } => reason.as_deref(),
        }
    }
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Self::Accept
        } else {
            Self::reject()
        }
    }
}

type CheckFn<E, S> = dyn Fn(&E, &S) -> Result<Verdict, RuleError>;

/// Shared admission predicate.
pub struct Validator<E, S> {
    check: Rc<CheckFn<E, S>>,
}

impl<E, S> Clone for Validator<E, S> {
    fn clone(&self) -> Self {
        Self {
            check: Rc::clone(&self.check),
        }
    }
}

impl<E, S> std::fmt::Debug for Validator<E, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

impl<E: 'static, S: 'static> Validator<E, S> {
    /// Create a validator from a fallible predicate.
    pub fn new(check: impl Fn(&E, &S) -> Result<bool, RuleError> + 'static) -> Self {
        Self::from_verdict(move |entity, state| check(entity, state).map(Verdict::from))
    }

    /// Create a validator from an infallible predicate.
    pub fn from_fn(check: impl Fn(&E, &S) -> bool + 'static) -> Self {
        Self::from_verdict(move |entity, state| Ok(Verdict::from(check(entity, state))))
    }

    /// Create a validator that produces its own verdicts.
    pub fn from_verdict(check: impl Fn(&E, &S) -> Result<Verdict, RuleError> + 'static) -> Self {
        Self {
            check: Rc::new(check),
        }
    }

    /// Accepts everything.
    #[must_use]
    pub fn always() -> Self {
        Self::from_verdict(|_, _| Ok(Verdict::Accept))
    }

    /// Rejects everything.
    #[must_use]
    pub fn never() -> Self {
        Self::from_verdict(|_, _| Ok(Verdict::reject()))
    }

    /// Replace the reason attached to any rejection from this validator.
    #[must_use]
    pub fn with_reason(self, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::from_verdict(move |entity, state| {
            Ok(match self.check(entity, state)? {
                Verdict::Accept => Verdict::Accept,
                Verdict::Reject { .. } => Verdict::reject_because(reason.clone()),
            })
        })
    }

    /// AND with another validator (builder form of [`combine`]).
    #[must_use]
    pub fn and(self, other: Validator<E, S>) -> Self {
        combine([self, other])
    }

    /// OR with another validator (builder form of [`either`]).
    #[must_use]
    pub fn or(self, other: Validator<E, S>) -> Self {
        either([self, other])
    }

    /// Negate this validator.
    #[must_use]
    pub fn negate(self) -> Self {
        not(self)
    }
}

impl<E, S> Validator<E, S> {
    /// Evaluate the validator.
    pub fn check(&self, entity: &E, state: &S) -> Result<Verdict, RuleError> {
        (self.check)(entity, state)
    }

    /// Evaluate the validator, dropping any rejection reason.
    pub fn is_valid(&self, entity: &E, state: &S) -> Result<bool, RuleError> {
        self.check(entity, state).map(|verdict| verdict.is_accept())
    }
}

/// All validators must accept.
///
/// Evaluated left to right, stopping at the first rejection or error, so
/// put cheap checks first. The first rejection's reason is reported. An
/// empty list accepts.
pub fn combine<E: 'static, S: 'static>(
    validators: impl IntoIterator<Item = Validator<E, S>>,
) -> Validator<E, S> {
    let validators: Vec<_> = validators.into_iter().collect();
    Validator::from_verdict(move |entity, state| {
        for validator in &validators {
            let verdict = validator.check(entity, state)?;
            if !verdict.is_accept() {
                return Ok(verdict);
            }
        }
        Ok(Verdict::Accept)
    })
}

/// At least one validator must accept.
///
/// Stops at the first acceptance. If every validator rejects, the last
/// rejection's reason is reported. An empty list rejects.
pub fn either<E: 'static, S: 'static>(
    validators: impl IntoIterator<Item = Validator<E, S>>,
) -> Validator<E, S> {
    let validators: Vec<_> = validators.into_iter().collect();
    Validator::from_verdict(move |entity, state| {
        let mut last = Verdict::reject();
        for validator in &validators {
            let verdict = validator.check(entity, state)?;
            if verdict.is_accept() {
                return Ok(verdict);
            }
            last = verdict;
        }
        Ok(last)
    })
}

/// Negation. A negated rejection carries no reason.
pub fn not<E: 'static, S: 'static>(validator: Validator<E, S>) -> Validator<E, S> {
    Validator::from_verdict(move |entity, state| {
        Ok(Verdict::from(!validator.is_valid(entity, state)?))
    })
}

/// Branch on `condition`.
///
/// When `condition` rejects and no `otherwise` branch is given the result is
/// [`Verdict::Accept`]: a missing else-branch is permissive.
pub fn conditional<E: 'static, S: 'static>(
    condition: Validator<E, S>,
    then: Validator<E, S>,
    otherwise: Option<Validator<E, S>>,
) -> Validator<E, S> {
    Validator::from_verdict(move |entity, state| {
        if condition.is_valid(entity, state)? {
            then.check(entity, state)
        } else {
            match &otherwise {
                Some(branch) => branch.check(entity, state),
                None => Ok(Verdict::Accept),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn at_least(min: i32) -> Validator<i32, ()> {
        Validator::from_fn(move |value: &i32, _: &()| *value >= min)
    }

    fn failing() -> Validator<i32, ()> {
        Validator::new(|_, _| Err(RuleError::new("lookup failed")))
    }

    #[test]
    fn test_always_never() {
        assert!(Validator::<i32, ()>::always().is_valid(&0, &()).unwrap());
        assert!(!Validator::<i32, ()>::never().is_valid(&0, &()).unwrap());
    }

    #[test]
    fn test_combine_short_circuits() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let counted = Validator::from_fn(move |_: &i32, _: &()| {
            counter.set(counter.get() + 1);
            true
        });

        let all = combine([at_least(5), counted]);
        assert!(!all.is_valid(&1, &()).unwrap());
        assert_eq!(calls.get(), 0);

        assert!(all.is_valid(&7, &()).unwrap());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_combine_stops_before_error() {
        let all = combine([at_least(5), failing()]);
        assert!(!all.is_valid(&1, &()).unwrap());
        assert!(all.is_valid(&6, &()).is_err());
    }

    #[test]
    fn test_combine_empty_accepts() {
        let all = combine(Vec::<Validator<i32, ()>>::new());
        assert!(all.is_valid(&0, &()).unwrap());
    }

    #[test]
    fn test_either() {
        let any = either([at_least(10), at_least(5)]);
        assert!(any.is_valid(&6, &()).unwrap());
        assert!(!any.is_valid(&4, &()).unwrap());

        // Stops at the first acceptance, never reaching the failing validator
        let guarded = either([at_least(0), failing()]);
        assert!(guarded.is_valid(&1, &()).unwrap());

        let empty = either(Vec::<Validator<i32, ()>>::new());
        assert!(!empty.is_valid(&0, &()).unwrap());
    }

    #[test]
    fn test_not() {
        let below = not(at_least(5));
        assert!(below.is_valid(&4, &()).unwrap());
        assert!(!below.is_valid(&5, &()).unwrap());
        assert!(not(failing()).is_valid(&0, &()).is_err());
    }

    #[test]
    fn test_conditional() {
        let branch = conditional(at_least(0), at_least(10), Some(Validator::never()));
        assert!(branch.is_valid(&12, &()).unwrap());
        assert!(!branch.is_valid(&3, &()).unwrap());
        assert!(!branch.is_valid(&-1, &()).unwrap());
    }

    #[test]
    fn test_conditional_without_else_is_permissive() {
        let branch = conditional(at_least(0), at_least(10), None);
        assert!(branch.is_valid(&-5, &()).unwrap());
        assert!(!branch.is_valid(&5, &()).unwrap());
    }

    #[test]
    fn test_reasons() {
        let big = at_least(10).with_reason("Too small");
        let positive = at_least(0).with_reason("Negative");

        let all = combine([positive.clone(), big.clone()]);
        assert_eq!(all.check(&-1, &()).unwrap().reason(), Some("Negative"));
        assert_eq!(all.check(&3, &()).unwrap().reason(), Some("Too small"));
        assert_eq!(all.check(&30, &()).unwrap(), Verdict::Accept);

        let any = either([positive, big.clone()]);
        assert_eq!(any.check(&-1, &()).unwrap().reason(), Some("Too small"));

        assert_eq!(not(big).check(&30, &()).unwrap().reason(), None);
    }

    #[test]
    fn test_builder_methods() {
        let range = at_least(0).and(not(at_least(10)));
        assert!(range.is_valid(&5, &()).unwrap());
        assert!(!range.is_valid(&10, &()).unwrap());

        let outside = at_least(10).or(at_least(0).negate());
        assert!(outside.is_valid(&-1, &()).unwrap());
        assert!(!outside.is_valid(&5, &()).unwrap());
    }

    #[test]
    fn test_shared_across_uses() {
        let shared = at_least(3);
        let a = combine([shared.clone(), Validator::always()]);
        let b = either([shared, Validator::never()]);
        assert_eq!(a.is_valid(&4, &()).unwrap(), b.is_valid(&4, &()).unwrap());
    }
}
