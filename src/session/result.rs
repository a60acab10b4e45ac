//! Values returned by the drag session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Point, ZoneId};
use crate::resolve::Rejection;

/// Why a drop did not happen.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DropFailure {
    /// No valid zone at the release point.
    ///
    /// `rejection` names the best zone that was in reach but refused the
    /// card, so the UI can explain why.
    #[error("No valid drop zone found")]
    NoZoneFound { rejection: Option<Rejection> },

    /// The winning zone's action failed.
    #[error("{message}")]
    ActionFailed { message: String },

    /// `end` was called with no drag in flight.
    #[error("No active drag operation")]
    NoActiveDrag,
}

/// Outcome of ending a drag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropResult {
    /// The card landed and the zone's action ran.
    Dropped { zone: ZoneId },
    /// The drop did not happen. `zone` is set when an action failed.
    Failed {
        zone: Option<ZoneId>,
        error: DropFailure,
    },
}

impl DropResult {
    /// A successful drop.
    #[must_use]
    pub fn dropped(zone: ZoneId) -> Self {
        Self::Dropped { zone }
    }

    /// A failure not tied to a zone.
    #[must_use]
    pub fn failed(error: DropFailure) -> Self {
        Self::Failed { zone: None, error }
    }

    /// Check if the drop succeeded.
    #[must_use]
    pub fn success(&self) -> bool {
        matches!(self, Self::Dropped { .. })
    }

    /// Zone involved in the drop, if any.
    #[must_use]
    pub fn zone(&self) -> Option<&ZoneId> {
        match self {
            Self::Dropped { zone } => Some(zone),
            Self::Failed { zone, .. } => zone.as_ref(),
        }
    }

    /// Failure details. `Some` exactly when the drop failed.
    #[must_use]
    pub fn error(&self) -> Option<&DropFailure> {
        match self {
            Self::Dropped { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    /// Failure message. `Some` exactly when the drop failed.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

/// The hovered zone changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverChange {
    pub previous: Option<ZoneId>,
    pub current: Option<ZoneId>,
}

/// What one `update` call did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragUpdate {
    /// Position recorded by this call.
    pub position: Point,
    /// Whether hover was recomputed (false when throttled).
    pub processed: bool,
    /// Hover transition, emitted only by processed updates.
    pub hover: Option<HoverChange>,
}

/// Where a magnetic zone wants to pull the card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    pub zone: ZoneId,
    /// Center of the zone's rectangle.
    pub snap_position: Point,
}
