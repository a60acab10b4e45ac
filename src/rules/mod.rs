//! Validator and action library for drop zones.
//!
//! Zones are guarded by a [`Validator`] (may this card land here?) and carry
//! a [`DropAction`] (what happens when it does). Both are built from small
//! closures and composed with combinators:
//!
//! - [`combine`]: AND, left to right, short-circuits on the first rejection
//! - [`either`]: OR, short-circuits on the first acceptance
//! - [`not`]: negation
//! - [`conditional`]: branch, permissive when the else-branch is missing
//! - [`sequence`]: run actions in order, stop at the first failure
//!
//! [`presets`] bundles the rules for the standard challenge and discard zones
//! against the capability traits in [`capability`].
//!
//! Nothing here holds mutable state; combinators are freely shared between
//! zones.

mod action;
pub mod capability;
pub mod presets;
mod validator;

pub use action::{sequence, DropAction};
pub use capability::{CardView, TablePlay, TableView};
pub use validator::{combine, conditional, either, not, Validator, Verdict};
