//! Pointer-driven drag adapter.

use std::mem;

use crate::core::{DragError, Point, SessionConfig, ZoneError, ZoneId};
use crate::device::DeviceProfile;
use crate::session::{DragController, DragUpdate, DropResult};
use crate::zones::{DropZone, DropZoneBuilder, ZoneKind};

use super::feedback::{FeedbackChain, FeedbackStep, Keyframe};
use super::pointer::PointerEvent;
use super::renderer::{HapticPattern, Renderer, VisualState};

/// The card under the pointer.
#[derive(Debug)]
struct Carried<E> {
    entity: E,
    /// Where the card lay before it was picked up.
    home: Point,
    /// How the card is currently drawn.
    visual: VisualState,
    /// Magnetic zone the card is pulled into, if any.
    snapped: Option<ZoneId>,
}

#[derive(Debug)]
enum Interaction<E> {
    Ready,
    Dragging(Carried<E>),
    /// A post-drop sequence is playing; new drags are refused.
    Settling(FeedbackChain<E>),
}

/// Connects pointer input and a renderer to a [`DragController`].
///
/// The adapter owns the controller and the renderer. Game state is passed
/// per call, as in the controller. Time comes from [`Renderer::now`].
#[derive(Debug)]
pub struct DragAdapter<E, S, R> {
    controller: DragController<E, S>,
    renderer: R,
    profile: DeviceProfile,
    interaction: Interaction<E>,
}

impl<E, S, R> DragAdapter<E, S, R>
where
    E: Clone,
    R: Renderer<E>,
{
    /// Create an adapter tuned for `profile`.
    pub fn new(renderer: R, profile: DeviceProfile) -> Self {
        let config = profile.session_config();
        Self::with_config(renderer, profile, config)
    }

    /// Create an adapter with an explicit session configuration.
    pub fn with_config(renderer: R, profile: DeviceProfile, config: SessionConfig) -> Self {
        Self {
            controller: DragController::new(config),
            renderer,
            profile,
            interaction: Interaction::Ready,
        }
    }

    // === Accessors ===

    /// The underlying drag controller.
    pub fn controller(&self) -> &DragController<E, S> {
        &self.controller
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The device profile this adapter was tuned for.
    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Is a card being dragged?
    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Dragging(_))
    }

    /// Is a post-drop sequence blocking new drags?
    pub fn is_locked(&self) -> bool {
        matches!(self.interaction, Interaction::Settling(_))
    }

    /// Feedback step currently playing after a drop.
    pub fn feedback_step(&self) -> Option<FeedbackStep> {
        match &self.interaction {
            Interaction::Settling(chain) => Some(chain.playing()),
            _ => None,
        }
    }

    // === Zones ===

    /// Register a zone.
    pub fn add_zone(&mut self, zone: DropZone<E, S>) -> Result<(), ZoneError> {
        self.controller.add_zone(zone)
    }

    /// Remove a zone and clear its highlight. Returns `false` for unknown ids.
    pub fn remove_zone(&mut self, id: &ZoneId) -> bool {
        match self.controller.remove_zone(id) {
            Some(removed) => {
                if let Some(handle) = removed.highlight {
                    self.renderer.clear_highlight(handle);
                }
                true
            }
            None => false,
        }
    }

    // === Pointer input ===

    /// Pick up `entity`.
    ///
    /// Returns `Ok(false)` when the press is ignored because a post-drop
    /// sequence is still playing.
    pub fn pointer_down(
        &mut self,
        entity: E,
        state: &S,
        event: PointerEvent,
    ) -> Result<bool, DragError> {
        if self.is_locked() {
            tracing::debug!(
                position = %event.position,
                "pointer down ignored while feedback plays"
            );
            return Ok(false);
        }

        let now = self.renderer.now();
        let point = event.adjusted(self.profile.touch_offset);
        self.controller.start(entity.clone(), state, point, now)?;

        // A replaced drag leaves highlights behind
        self.release_highlights();

        let resting = VisualState::resting(event.position);
        let lifted = VisualState::lifted(point);
        let lift = self.profile.animation_duration / 2;
        self.renderer.animate(&entity, resting, lifted, lift, FeedbackStep::Lift);
        if self.profile.haptics {
            self.renderer.haptic(HapticPattern::Pickup);
        }

        let valid: Vec<ZoneId> = self.controller.valid_zones().to_vec();
        for id in &valid {
            paint_highlight(&mut self.controller, &mut self.renderer, id, false);
        }

        self.interaction = Interaction::Dragging(Carried {
            entity,
            home: event.position,
            visual: lifted,
            snapped: None,
        });
        Ok(true)
    }

    /// Move the carried card. Returns `None` when no drag is in flight.
    pub fn pointer_move(&mut self, event: PointerEvent) -> Option<DragUpdate> {
        let Interaction::Dragging(carried) = &mut self.interaction else {
            return None;
        };

        let now = self.renderer.now();
        let point = event.adjusted(self.profile.touch_offset);
        let update = match self.controller.update(point, now) {
            Ok(update) => update,
            Err(err) => {
                tracing::warn!(error = %err, "pointer move without a controller drag");
                return None;
            }
        };

        if let Some(change) = &update.hover {
            if let Some(previous) = &change.previous {
                paint_highlight(&mut self.controller, &mut self.renderer, previous, false);
            }
            if let Some(current) = &change.current {
                paint_highlight(&mut self.controller, &mut self.renderer, current, true);
            }
        }

        if update.processed {
            match self.controller.magnetic_snap_target(point) {
                Some(target) => {
                    if carried.snapped.as_ref() != Some(&target.zone) {
                        let to = carried.visual.at(target.snap_position);
                        self.renderer.animate(
                            &carried.entity,
                            carried.visual,
                            to,
                            self.profile.animation_duration / 2,
                            FeedbackStep::Snap,
                        );
                        carried.visual = to;
                        carried.snapped = Some(target.zone);
                    }
                }
                None => carried.snapped = None,
            }
        }

        if carried.snapped.is_none() {
            carried.visual = carried.visual.at(point);
            self.renderer.set_position(&carried.entity, point);
        }
        Some(update)
    }

    /// Release the carried card and play the outcome.
    ///
    /// Success pulses and fades the card out. Failure returns it to where
    /// it was picked up and shakes it. Either way new drags are refused
    /// until the sequence finishes.
    pub fn pointer_up(&mut self, state: &mut S, event: PointerEvent) -> DropResult {
        let point = event.adjusted(self.profile.touch_offset);
        let result = self.controller.end(point, state);
        self.release_highlights();

        let carried = match mem::replace(&mut self.interaction, Interaction::Ready) {
            Interaction::Dragging(carried) => carried,
            other => {
                self.interaction = other;
                return result;
            }
        };

        let duration = self.profile.animation_duration;
        let frames = if result.success() {
            if self.profile.haptics {
                self.renderer.haptic(HapticPattern::Success);
            }
            let pulsed = carried.visual.pulsed();
            vec![
                Keyframe {
                    step: FeedbackStep::SuccessPulse,
                    from: carried.visual,
                    to: pulsed,
                    duration: duration / 2,
                },
                Keyframe {
                    step: FeedbackStep::FadeOut,
                    from: pulsed,
                    to: pulsed.faded(),
                    duration,
                },
            ]
        } else {
            if self.profile.haptics {
                self.renderer.haptic(HapticPattern::Error);
            }
            tracing::debug!(error = ?result.error_message(), "drop refused; returning card");
            let home = VisualState::resting(carried.home);
            vec![
                Keyframe {
                    step: FeedbackStep::ReturnToStart,
                    from: carried.visual,
                    to: home,
                    duration,
                },
                Keyframe {
                    step: FeedbackStep::Shake,
                    from: home,
                    to: home,
                    duration: duration / 2,
                },
            ]
        };

        self.play(carried.entity, frames);
        result
    }

    /// Abort the drag without dropping. The card eases back without the
    /// error cue. Returns the card, or `None` when idle.
    pub fn cancel_drag(&mut self) -> Option<E> {
        let entity = self.controller.cancel()?;
        self.release_highlights();

        let interaction = mem::replace(&mut self.interaction, Interaction::Ready);
        if let Interaction::Dragging(carried) = interaction {
            let frames = vec![Keyframe {
                step: FeedbackStep::ReturnToStart,
                from: carried.visual,
                to: VisualState::resting(carried.home),
                duration: self.profile.animation_duration,
            }];
            self.play(carried.entity, frames);
        }
        Some(entity)
    }

    /// Report that the renderer finished the animation tagged `step`.
    pub fn animation_finished(&mut self, step: FeedbackStep) {
        let Interaction::Settling(chain) = &mut self.interaction else {
            return;
        };
        if chain.advance(&mut self.renderer, step) {
            tracing::debug!(?step, "feedback finished");
            self.interaction = Interaction::Ready;
        }
    }

    /// Abandon a post-drop sequence without waiting for its completions.
    ///
    /// For hosts that stop animations on their own (scene change, tween
    /// killed). Returns the card whose sequence was dropped, or `None` when
    /// nothing was playing.
    pub fn unlock(&mut self) -> Option<E> {
        match mem::replace(&mut self.interaction, Interaction::Ready) {
            Interaction::Settling(chain) => {
                tracing::debug!(step = ?chain.playing(), "feedback abandoned");
                Some(chain.into_entity())
            }
            other => {
                self.interaction = other;
                None
            }
        }
    }

    /// Tear down: drop the drag and every zone, clearing their highlights.
    pub fn destroy(&mut self) {
        for handle in self.controller.destroy() {
            self.renderer.clear_highlight(handle);
        }
        self.interaction = Interaction::Ready;
    }

    fn play(&mut self, entity: E, frames: Vec<Keyframe>) {
        self.interaction = match FeedbackChain::start(&mut self.renderer, entity, frames) {
            Some(chain) => Interaction::Settling(chain),
            None => Interaction::Ready,
        };
    }

    fn release_highlights(&mut self) {
        for handle in self.controller.zones_mut().take_all_highlights() {
            self.renderer.clear_highlight(handle);
        }
    }
}

impl<E, S, R> DragAdapter<E, S, R>
where
    E: Clone + 'static,
    S: 'static,
    R: Renderer<E>,
{
    /// Zone builder preloaded with the device's snap distance.
    pub fn zone_builder(&self, id: impl Into<ZoneId>, kind: ZoneKind) -> DropZoneBuilder<E, S> {
        DropZone::builder(id, kind).magnetic_radius(self.profile.snap_distance)
    }
}

/// Draw a zone's available or hover highlight, replacing the old one.
fn paint_highlight<E, S, R: Renderer<E>>(
    controller: &mut DragController<E, S>,
    renderer: &mut R,
    id: &ZoneId,
    hover: bool,
) {
    let Some(zone) = controller.zones().get(id) else {
        return;
    };
    let bounds = zone.bounds();
    let hints = zone.hints();
    let style = if hover { hints.hover } else { hints.available };

    let handle = renderer.draw_highlight(bounds, &style);
    if let Some(stale) = controller.zones_mut().set_highlight(id, handle) {
        renderer.clear_highlight(stale);
    }
}
