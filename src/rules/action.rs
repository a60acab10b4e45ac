//! Drop actions.
//!
//! A [`DropAction`] is the side effect a zone performs when a card lands on
//! it. Actions get mutable access to the game state and report failure with
//! a [`RuleError`]; the drag session turns that into a failed `DropResult`.

use std::rc::Rc;

use crate::core::RuleError;

type ActionFn<E, S> = dyn Fn(&E, &mut S) -> Result<(), RuleError>;

/// Shared drop side effect.
pub struct DropAction<E, S> {
    run: Rc<ActionFn<E, S>>,
}

impl<E, S> Clone for DropAction<E, S> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<E, S> std::fmt::Debug for DropAction<E, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropAction").finish_non_exhaustive()
    }
}

impl<E: 'static, S: 'static> DropAction<E, S> {
    /// Create an action from a fallible closure.
    pub fn new(run: impl Fn(&E, &mut S) -> Result<(), RuleError> + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Create an action that cannot fail.
    pub fn from_fn(run: impl Fn(&E, &mut S) + 'static) -> Self {
        Self::new(move |entity, state| {
            run(entity, state);
            Ok(())
        })
    }

    /// Does nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_, _| Ok(()))
    }

    /// Run `next` after this action (builder form of [`sequence`]).
    #[must_use]
    pub fn then(self, next: DropAction<E, S>) -> Self {
        sequence([self, next])
    }
}

impl<E, S> DropAction<E, S> {
    /// Run the action.
    pub fn run(&self, entity: &E, state: &mut S) -> Result<(), RuleError> {
        (self.run)(entity, state)
    }
}

/// Run actions in order, stopping at the first failure.
///
/// Steps that already ran are not rolled back.
pub fn sequence<E: 'static, S: 'static>(
    actions: impl IntoIterator<Item = DropAction<E, S>>,
) -> DropAction<E, S> {
    let actions: Vec<_> = actions.into_iter().collect();
    DropAction::new(move |entity, state| {
        for action in &actions {
            action.run(entity, state)?;
        }
        Ok(())
    })
}
