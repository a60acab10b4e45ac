//! Error types.
//!
//! Only registration and sequencing mistakes are errors here. A validator
//! saying "no" is ordinary control flow, and a failed drop is reported
//! through `DropResult`, not through `Err`.

use thiserror::Error;

use super::config::ZoneId;

/// Zone registration failed. Existing zones are unaffected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// A zone with this id is already registered.
    #[error("drop zone already registered: {0}")]
    Duplicate(ZoneId),

    /// Bounds have a negative or non-finite component.
    #[error("drop zone {id} has malformed bounds")]
    InvalidBounds { id: ZoneId },

    /// Magnetic radius is negative or non-finite.
    #[error("drop zone {id} has an invalid magnetic radius")]
    InvalidMagneticRadius { id: ZoneId },
}

/// Drag session used out of sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DragError {
    /// `start` while another drag is active under `RestartPolicy::Reject`.
    #[error("a drag operation is already active")]
    AlreadyDragging,

    /// `update` with no active drag.
    #[error("No active drag operation")]
    NotDragging,
}

/// Failure raised by a validator or a drop action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuleError {
    message: String,
}

impl RuleError {
    /// Create a new rule error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for RuleError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for RuleError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
