//! Core types: geometry, identifiers, configuration, errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! validators, renderers or the drag lifecycle.

pub mod geometry;
pub mod config;
pub mod error;

pub use geometry::{Point, Rect};
pub use config::{ZoneId, ZoneKind, RestartPolicy, SessionConfig};
pub use error::{ZoneError, DragError, RuleError};
