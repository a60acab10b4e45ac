//! Drag lifecycle state.

use std::time::Duration;

use smallvec::SmallVec;

use crate::core::{Point, ZoneId};

/// The single in-flight drag.
#[derive(Clone, Debug)]
pub struct ActiveDrag<E> {
    /// Handle to the dragged entity (a card id, an `Rc`, ...).
    pub(crate) entity: E,

    /// Pointer position at drag start.
    pub(crate) start_position: Point,

    /// Latest pointer position, updated on every call.
    pub(crate) current_position: Point,

    /// Zones whose validator accepted at drag start, ranked by priority
    /// then id.
    pub(crate) valid_zones: SmallVec<[ZoneId; 8]>,

    /// Zone under the pointer as of the last processed update.
    pub(crate) hovered: Option<ZoneId>,

    /// Time of the last processed (non-throttled) update.
    pub(crate) last_processed: Option<Duration>,

    /// Time the drag started.
    pub(crate) started_at: Duration,
}

impl<E> ActiveDrag<E> {
    /// The dragged entity.
    pub fn entity(&self) -> &E {
        &self.entity
    }

    /// Pointer position at drag start.
    #[must_use]
    pub fn start_position(&self) -> Point {
        self.start_position
    }

    /// Latest pointer position.
    #[must_use]
    pub fn current_position(&self) -> Point {
        self.current_position
    }

    /// Zones valid at drag start, highest priority first.
    #[must_use]
    pub fn valid_zones(&self) -> &[ZoneId] {
        &self.valid_zones
    }

    /// Zone currently hovered.
    #[must_use]
    pub fn hovered(&self) -> Option<&ZoneId> {
        self.hovered.as_ref()
    }

    /// Time the drag started.
    #[must_use]
    pub fn started_at(&self) -> Duration {
        self.started_at
    }

    /// How long the drag has been running at `now`.
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }
}

/// Session state: idle, or exactly one drag.
#[derive(Clone, Debug)]
pub enum DragState<E> {
    /// No drag in flight.
    Idle,
    /// A drag is in flight.
    Dragging(ActiveDrag<E>),
}

impl<E> Default for DragState<E> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<E> DragState<E> {
    /// Check if a drag is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active drag, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveDrag<E>> {
        match self {
            Self::Idle => None,
            Self::Dragging(drag) => Some(drag),
        }
    }
}
