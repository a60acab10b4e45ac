//! The renderer capability consumed by the adapter.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect};
use crate::zones::{HighlightId, HighlightStyle};

use super::feedback::FeedbackStep;

/// How a card is drawn at one end of an animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub position: Point,
    pub scale: f32,
    pub opacity: f32,
    /// Shadow depth / z-lift.
    pub elevation: f32,
}

impl VisualState {
    /// A card lying on the table.
    pub fn resting(position: Point) -> Self {
        Self {
            position,
            scale: 1.0,
            opacity: 1.0,
            elevation: 0.0,
        }
    }

    /// A card picked up by the pointer.
    pub fn lifted(position: Point) -> Self {
        Self {
            position,
            scale: 1.1,
            opacity: 0.9,
            elevation: 10.0,
        }
    }

    /// Same look at another position.
    #[must_use]
    pub fn at(self, position: Point) -> Self {
        Self { position, ..self }
    }

    /// Same position, enlarged for the success pulse.
    #[must_use]
    pub fn pulsed(self) -> Self {
        Self {
            scale: self.scale * 1.2,
            opacity: 1.0,
            ..self
        }
    }

    /// Same position, fully transparent.
    #[must_use]
    pub fn faded(self) -> Self {
        Self {
            opacity: 0.0,
            scale: 0.8,
            ..self
        }
    }
}

/// Haptic cues. Only emitted on touch devices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HapticPattern {
    /// Card picked up.
    Pickup,
    /// Drop accepted.
    Success,
    /// Drop refused.
    Error,
}

/// Drawing and timing services provided by the host scene.
///
/// Animations are fire-and-forget: the host reports completion through
/// [`DragAdapter::animation_finished`](super::DragAdapter::animation_finished)
/// with the `step` it was given.
pub trait Renderer<E> {
    /// Monotonic time since any fixed origin.
    fn now(&self) -> Duration;

    /// Draw a zone highlight and return its handle.
    fn draw_highlight(&mut self, bounds: Rect, style: &HighlightStyle) -> HighlightId;

    /// Remove a highlight. Unknown handles must be ignored.
    fn clear_highlight(&mut self, id: HighlightId);

    /// Move the card immediately.
    fn set_position(&mut self, entity: &E, position: Point);

    /// Start an animation of the card from one state to another.
    ///
    /// After a drop the adapter refuses new drags until every post-drop
    /// step has been reported finished. A host that stops an animation
    /// without reporting it must call
    /// [`DragAdapter::unlock`](super::DragAdapter::unlock) instead.
    fn animate(
        &mut self,
        entity: &E,
        from: VisualState,
        to: VisualState,
        duration: Duration,
        step: FeedbackStep,
    );

    /// Play a haptic cue. Hosts without a vibration motor ignore it.
    fn haptic(&mut self, _pattern: HapticPattern) {}
}
