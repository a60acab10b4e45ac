//! The drag controller: registry plus the drag state machine.

use std::time::Duration;

use smallvec::SmallVec;

use crate::core::{DragError, Point, RestartPolicy, SessionConfig, ZoneError, ZoneId};
use crate::resolve::{by_rank, rank_in_reach, resolve_detailed};
use crate::zones::{DropZone, HighlightId, RemovedZone, ZoneRegistry};

use super::result::{DragUpdate, DropFailure, DropResult, HoverChange, SnapTarget};
use super::state::{ActiveDrag, DragState};
use super::stats::SessionStats;

/// Owns the zone registry and the drag session.
///
/// `E` is a handle to the dragged entity; the controller keeps a clone of it
/// for the duration of the drag. `S` is the game state, only ever borrowed.
///
/// Time is passed in by the caller (`now`, any monotonic origin), which
/// keeps throttling deterministic under test.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use ccg_drop::core::{Point, Rect, SessionConfig, ZoneKind};
/// use ccg_drop::session::DragController;
/// use ccg_drop::zones::DropZone;
///
/// let mut controller = DragController::<u32, ()>::new(SessionConfig::default());
/// controller
///     .add_zone(
///         DropZone::builder("discard", ZoneKind::Discard)
///             .bounds(Rect::new(200.0, 50.0, 100.0, 100.0))
///             .build()
///             .unwrap(),
///     )
///     .unwrap();
///
/// controller.start(7, &(), Point::new(0.0, 0.0), Duration::ZERO).unwrap();
/// let update = controller.update(Point::new(250.0, 100.0), Duration::from_millis(20)).unwrap();
/// assert_eq!(update.hover.unwrap().current.unwrap().as_str(), "discard");
///
/// let result = controller.end(Point::new(250.0, 100.0), &mut ());
/// assert!(result.success());
/// assert!(!controller.is_dragging());
/// ```
#[derive(Debug)]
pub struct DragController<E, S> {
    registry: ZoneRegistry<E, S>,
    session: DragState<E>,
    config: SessionConfig,
    stats: SessionStats,
}

impl<E, S> Default for DragController<E, S> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<E, S> DragController<E, S> {
    /// Create a controller with an empty registry.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            registry: ZoneRegistry::new(),
            session: DragState::Idle,
            config,
            stats: SessionStats::new(),
        }
    }

    // === Registration ===

    /// Register a zone.
    pub fn add_zone(&mut self, zone: DropZone<E, S>) -> Result<(), ZoneError> {
        self.registry.add(zone)
    }

    /// Remove a zone. Unknown ids are ignored.
    ///
    /// An in-flight drag keeps the id in its snapshot; lookups skip it.
    pub fn remove_zone(&mut self, id: &ZoneId) -> Option<RemovedZone<E, S>> {
        self.registry.remove(id)
    }

    /// The zone registry.
    #[must_use]
    pub fn zones(&self) -> &ZoneRegistry<E, S> {
        &self.registry
    }

    /// Mutable access to the registry (highlight bookkeeping).
    pub fn zones_mut(&mut self) -> &mut ZoneRegistry<E, S> {
        &mut self.registry
    }

    // === Accessors ===

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Session statistics.
    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Reset session statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &DragState<E> {
        &self.session
    }

    /// Check if a drag is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// The active drag, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveDrag<E>> {
        self.session.active()
    }

    /// Zone hovered as of the last processed update.
    #[must_use]
    pub fn hovered_zone(&self) -> Option<&ZoneId> {
        self.active().and_then(ActiveDrag::hovered)
    }

    /// Latest recorded pointer position.
    #[must_use]
    pub fn current_position(&self) -> Option<Point> {
        self.active().map(ActiveDrag::current_position)
    }

    /// Zones valid at drag start, highest priority first.
    #[must_use]
    pub fn valid_zones(&self) -> &[ZoneId] {
        self.active().map_or(&[], ActiveDrag::valid_zones)
    }

    // === Lifecycle ===

    /// `Idle -> Dragging`.
    ///
    /// Validates every registered zone once (geometry ignored) and keeps
    /// the accepting ones for cheap reuse during the drag.
    pub fn start(
        &mut self,
        entity: E,
        state: &S,
        point: Point,
        now: Duration,
    ) -> Result<(), DragError> {
        if self.session.is_dragging() {
            match self.config.restart_policy {
                RestartPolicy::Reject => {
                    tracing::warn!(%point, "drag start rejected: a drag is already active");
                    return Err(DragError::AlreadyDragging);
                }
                RestartPolicy::Replace => {
                    tracing::warn!(%point, "drag start replaces the active drag");
                }
            }
        }

        let mut accepted: Vec<&DropZone<E, S>> = Vec::new();
        for zone in self.registry.iter() {
            match zone.check(&entity, state) {
                Ok(verdict) if verdict.is_accept() => accepted.push(zone),
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(
                        zone = %zone.id(),
                        error = %err,
                        "drop zone validator failed; treating zone as invalid"
                    );
                    self.stats.validator_errors = self.stats.validator_errors.saturating_add(1);
                }
            }
        }
        accepted.sort_by(|a, b| by_rank(*a, *b));
        let valid_zones: SmallVec<[ZoneId; 8]> =
            accepted.iter().map(|zone| zone.id().clone()).collect();

        tracing::debug!(%point, valid = valid_zones.len(), "drag started");

        self.session = DragState::Dragging(ActiveDrag {
            entity,
            start_position: point,
            current_position: point,
            valid_zones,
            hovered: None,
            last_processed: None,
            started_at: now,
        });
        self.stats.drags_started += 1;
        Ok(())
    }

    /// `Dragging -> Dragging`, rate-limited.
    ///
    /// The position is always recorded. Hover is recomputed against the
    /// start-of-drag snapshot only if `throttle_interval` has passed since
    /// the last processed update; the first update after `start` is always
    /// processed. Snapshot zones were validated by `start` and are only
    /// ranked here, so no validator runs and no game state is needed.
    pub fn update(&mut self, point: Point, now: Duration) -> Result<DragUpdate, DragError> {
        let DragState::Dragging(drag) = &mut self.session else {
            return Err(DragError::NotDragging);
        };

        self.stats.updates_received += 1;
        drag.current_position = point;

        if let Some(last) = drag.last_processed {
            if now.saturating_sub(last) < self.config.throttle_interval {
                return Ok(DragUpdate {
                    position: point,
                    processed: false,
                    hover: None,
                });
            }
        }
        drag.last_processed = Some(now);
        self.stats.updates_processed += 1;

        let registry = &self.registry;
        let candidates = drag.valid_zones.iter().filter_map(|id| registry.get(id));
        let current = rank_in_reach(point, candidates).map(|zone| zone.id().clone());
        let hover = if current != drag.hovered {
            let change = HoverChange {
                previous: drag.hovered.take(),
                current: current.clone(),
            };
            tracing::debug!(
                previous = ?change.previous,
                current = ?change.current,
                "hover changed"
            );
            drag.hovered = current;
            self.stats.hover_changes += 1;
            Some(change)
        } else {
            None
        };

        Ok(DragUpdate {
            position: point,
            processed: true,
            hover,
        })
    }

    /// `Dragging -> Idle`.
    ///
    /// Resolves against the live registry and state, never the snapshot and
    /// never throttled. Runs the winning zone's action exactly once. The
    /// session is idle afterwards whatever the outcome.
    pub fn end(&mut self, point: Point, state: &mut S) -> DropResult {
        let DragState::Dragging(drag) = std::mem::replace(&mut self.session, DragState::Idle) else {
            tracing::warn!(%point, "drag end without an active drag");
            self.stats.drops_failed += 1;
            return DropResult::failed(DropFailure::NoActiveDrag);
        };

        let report = resolve_detailed(point, &drag.entity, &*state, self.registry.iter());
        let errors = u32::try_from(report.validator_errors).unwrap_or(u32::MAX);
        self.stats.validator_errors = self.stats.validator_errors.saturating_add(errors);

        let Some(zone) = report.winner else {
            tracing::debug!(%point, "drop missed every valid zone");
            self.stats.drops_failed += 1;
            return DropResult::failed(DropFailure::NoZoneFound {
                rejection: report.rejection,
            });
        };

        match zone.perform_drop(&drag.entity, state) {
            Ok(()) => {
                tracing::debug!(zone = %zone.id(), %point, "drop succeeded");
                self.stats.drops_succeeded += 1;
                DropResult::dropped(zone.id().clone())
            }
            Err(err) => {
                tracing::warn!(zone = %zone.id(), error = %err, "drop action failed");
                self.stats.drops_failed += 1;
                DropResult::Failed {
                    zone: Some(zone.id().clone()),
                    error: DropFailure::ActionFailed {
                        message: err.message().to_string(),
                    },
                }
            }
        }
    }

    /// Abort the drag without resolving it. Returns the dragged entity.
    pub fn cancel(&mut self) -> Option<E> {
        match std::mem::replace(&mut self.session, DragState::Idle) {
            DragState::Idle => None,
            DragState::Dragging(drag) => {
                tracing::debug!(position = %drag.current_position, "drag cancelled");
                Some(drag.entity)
            }
        }
    }

    /// First zone in the start-of-drag snapshot whose center is within its
    /// magnetic radius of `point`.
    ///
    /// Not re-validated and not throttled. Zones are scanned highest
    /// priority first.
    #[must_use]
    pub fn magnetic_snap_target(&self, point: Point) -> Option<SnapTarget> {
        let drag = self.active()?;
        drag.valid_zones
            .iter()
            .filter_map(|id| self.registry.get(id))
            .find(|zone| zone.bounds().distance_to_center(point) <= zone.magnetic_radius())
            .map(|zone| SnapTarget {
                zone: zone.id().clone(),
                snap_position: zone.bounds().center(),
            })
    }

    /// Tear down: reset the session and remove every zone.
    ///
    /// Returns the highlight handles the caller must clear. Calling it again
    /// returns nothing.
    pub fn destroy(&mut self) -> Vec<HighlightId> {
        self.session = DragState::Idle;
        self.registry.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rect, RuleError, ZoneKind};
    use crate::rules::{DropAction, Validator};

    type Controller = DragController<u32, Vec<u32>>;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn zone(id: &str, bounds: Rect, priority: i32) -> DropZone<u32, Vec<u32>> {
        DropZone::builder(id, ZoneKind::Special)
            .bounds(bounds)
            .priority(priority)
            .action(DropAction::from_fn(|card: &u32, pile: &mut Vec<u32>| pile.push(*card)))
            .build()
            .unwrap()
    }

    fn controller() -> Controller {
        let mut controller = Controller::new(SessionConfig::default());
        controller.add_zone(zone("left", Rect::new(0.0, 0.0, 100.0, 100.0), 0)).unwrap();
        controller.add_zone(zone("right", Rect::new(200.0, 0.0, 100.0, 100.0), 0)).unwrap();
        controller
    }

    #[test]
    fn test_start_snapshots_valid_zones() {
        let mut controller = controller();
        controller
            .add_zone(
                DropZone::builder("locked", ZoneKind::Special)
                    .bounds(Rect::new(400.0, 0.0, 10.0, 10.0))
                    .priority(9)
                    .validator(Validator::never())
                    .build()
                    .unwrap(),
            )
            .unwrap();

        controller.start(1, &Vec::new(), Point::new(5.0, 5.0), ms(0)).unwrap();

        assert!(controller.is_dragging());
        assert_eq!(controller.valid_zones(), &[ZoneId::new("left"), ZoneId::new("right")]);
        assert_eq!(controller.hovered_zone(), None);
        assert_eq!(controller.current_position(), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_restart_rejected_by_default() {
        let mut controller = controller();
        controller.start(1, &Vec::new(), Point::new(0.0, 0.0), ms(0)).unwrap();

        let err = controller.start(2, &Vec::new(), Point::new(9.0, 9.0), ms(1)).unwrap_err();
        assert_eq!(err, DragError::AlreadyDragging);
        assert_eq!(controller.active().unwrap().entity(), &1);
    }

    #[test]
    fn test_restart_replaces_when_configured() {
        let mut controller = Controller::new(
            SessionConfig::default().with_restart_policy(RestartPolicy::Replace),
        );
        controller.start(1, &Vec::new(), Point::new(0.0, 0.0), ms(0)).unwrap();
        controller.start(2, &Vec::new(), Point::new(9.0, 9.0), ms(1)).unwrap();

        let drag = controller.active().unwrap();
        assert_eq!(drag.entity(), &2);
        assert_eq!(drag.start_position(), Point::new(9.0, 9.0));
    }

    #[test]
    fn test_update_without_drag() {
        let mut controller = controller();
        let err = controller.update(Point::new(0.0, 0.0), ms(0)).unwrap_err();
        assert_eq!(err, DragError::NotDragging);
    }

    #[test]
    fn test_hover_transitions() {
        let mut controller = controller();
        let pile = Vec::new();
        controller.start(1, &pile, Point::new(150.0, 50.0), ms(0)).unwrap();

        let first = controller.update(Point::new(50.0, 50.0), ms(0)).unwrap();
        assert_eq!(
            first.hover,
            Some(HoverChange {
                previous: None,
                current: Some(ZoneId::new("left")),
            })
        );

        // Same zone, no transition
        let same = controller.update(Point::new(60.0, 50.0), ms(20)).unwrap();
        assert!(same.processed);
        assert_eq!(same.hover, None);

        let moved = controller.update(Point::new(250.0, 50.0), ms(40)).unwrap();
        assert_eq!(
            moved.hover,
            Some(HoverChange {
                previous: Some(ZoneId::new("left")),
                current: Some(ZoneId::new("right")),
            })
        );

        let gap = controller.update(Point::new(150.0, 50.0), ms(60)).unwrap();
        assert_eq!(
            gap.hover,
            Some(HoverChange {
                previous: Some(ZoneId::new("right")),
                current: None,
            })
        );
        assert_eq!(controller.stats().hover_changes, 3);
    }

    #[test]
    fn test_throttle_skips_recomputation() {
        let mut controller = controller();
        let pile = Vec::new();
        controller.start(1, &pile, Point::new(0.0, 0.0), ms(0)).unwrap();

        assert!(controller.update(Point::new(150.0, 50.0), ms(0)).unwrap().processed);

        // Inside the interval: position tracked, hover untouched
        let skipped = controller.update(Point::new(50.0, 50.0), ms(10)).unwrap();
        assert!(!skipped.processed);
        assert_eq!(skipped.hover, None);
        assert_eq!(controller.current_position(), Some(Point::new(50.0, 50.0)));
        assert_eq!(controller.hovered_zone(), None);

        let processed = controller.update(Point::new(50.0, 50.0), ms(16)).unwrap();
        assert!(processed.processed);
        assert_eq!(controller.hovered_zone(), Some(&ZoneId::new("left")));

        assert_eq!(controller.stats().updates_received, 3);
        assert_eq!(controller.stats().updates_processed, 2);
    }

    #[test]
    fn test_end_runs_action_and_resets() {
        let mut controller = controller();
        let mut pile = Vec::new();
        controller.start(42, &pile, Point::new(0.0, 0.0), ms(0)).unwrap();

        let result = controller.end(Point::new(250.0, 50.0), &mut pile);
        assert_eq!(result, DropResult::dropped(ZoneId::new("right")));
        assert_eq!(pile, vec![42]);
        assert!(!controller.is_dragging());
        assert!(controller.active().is_none());
    }

    #[test]
    fn test_end_without_drag() {
        let mut controller = controller();
        let result = controller.end(Point::new(0.0, 0.0), &mut Vec::new());
        assert_eq!(result, DropResult::failed(DropFailure::NoActiveDrag));
        assert_eq!(result.error_message().as_deref(), Some("No active drag operation"));
    }

    #[test]
    fn test_end_action_failure_resets() {
        let mut controller = Controller::default();
        controller
            .add_zone(
                DropZone::builder("bomb", ZoneKind::Special)
                    .bounds(Rect::new(0.0, 0.0, 100.0, 100.0))
                    .action(DropAction::new(|_: &u32, _: &mut Vec<u32>| {
                        Err(RuleError::new("boom"))
                    }))
                    .build()
                    .unwrap(),
            )
            .unwrap();

        controller.start(1, &Vec::new(), Point::new(0.0, 0.0), ms(0)).unwrap();
        let result = controller.end(Point::new(50.0, 50.0), &mut Vec::new());

        assert!(!result.success());
        assert_eq!(result.zone(), Some(&ZoneId::new("bomb")));
        assert_eq!(result.error_message().as_deref(), Some("boom"));
        assert!(!controller.is_dragging());
        assert_eq!(controller.stats().drops_failed, 1);
    }

    #[test]
    fn test_cancel() {
        let mut controller = controller();
        let mut pile = Vec::new();
        controller.start(5, &pile, Point::new(0.0, 0.0), ms(0)).unwrap();

        assert_eq!(controller.cancel(), Some(5));
        assert_eq!(controller.cancel(), None);
        assert!(!controller.is_dragging());

        // Nothing was dropped
        let result = controller.end(Point::new(50.0, 50.0), &mut pile);
        assert_eq!(result.error(), Some(&DropFailure::NoActiveDrag));
        assert!(pile.is_empty());
    }

    #[test]
    fn test_removed_zone_skipped_mid_drag() {
        let mut controller = controller();
        let pile = Vec::new();
        controller.start(1, &pile, Point::new(0.0, 0.0), ms(0)).unwrap();

        controller.remove_zone(&ZoneId::new("left"));
        let update = controller.update(Point::new(50.0, 50.0), ms(0)).unwrap();
        assert_eq!(update.hover, None);
        assert!(controller.magnetic_snap_target(Point::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_destroy() {
        let mut controller = controller();
        controller.start(1, &Vec::new(), Point::new(0.0, 0.0), ms(0)).unwrap();
        let _ = controller.zones_mut().set_highlight(&ZoneId::new("left"), HighlightId::new(3));

        assert_eq!(controller.destroy(), vec![HighlightId::new(3)]);
        assert!(!controller.is_dragging());
        assert!(controller.zones().is_empty());
        assert!(controller.destroy().is_empty());
    }
}
