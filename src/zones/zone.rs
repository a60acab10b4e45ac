//! Drop zone definitions.

use serde::{Deserialize, Serialize};

use crate::core::{Rect, RuleError, ZoneError, ZoneId, ZoneKind};
use crate::rules::{DropAction, Validator, Verdict};

/// Renderer-assigned handle for a drawn highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightId(pub u64);

impl HighlightId {
    /// Create a new highlight handle.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// How a highlight is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighlightStyle {
    /// Fill/stroke color as `0xRRGGBB`.
    pub color: u32,
    /// Fill opacity in `[0, 1]`.
    pub alpha: f32,
    /// Stroke width in screen units.
    pub line_width: f32,
}

impl HighlightStyle {
    /// Create a new style.
    #[must_use]
    pub const fn new(color: u32, alpha: f32, line_width: f32) -> Self {
        Self {
            color,
            alpha,
            line_width,
        }
    }
}

/// Styles handed to the renderer. No effect on resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualHints {
    /// Shown on every zone that accepts the dragged card.
    pub available: HighlightStyle,
    /// Shown on the zone under the pointer.
    pub hover: HighlightStyle,
}

impl VisualHints {
    /// Default hints for a zone kind.
    #[must_use]
    pub const fn for_kind(kind: ZoneKind) -> Self {
        let color = match kind {
            ZoneKind::Challenge => 0xff_d7_00,
            ZoneKind::Discard => 0xff_6b_6b,
            ZoneKind::Special => 0x9b_59_b6,
        };
        Self {
            available: HighlightStyle::new(color, 0.2, 2.0),
            hover: HighlightStyle::new(color, 0.45, 4.0),
        }
    }
}

/// A registered target region.
///
/// Immutable once built. The registry owns the zone's highlight handle, not
/// the zone itself.
pub struct DropZone<E, S> {
    id: ZoneId,
    kind: ZoneKind,
    bounds: Rect,
    priority: i32,
    magnetic_radius: f32,
    validator: Validator<E, S>,
    action: DropAction<E, S>,
    hints: Option<VisualHints>,
}

impl<E, S> std::fmt::Debug for DropZone<E, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropZone")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("bounds", &self.bounds)
            .field("priority", &self.priority)
            .field("magnetic_radius", &self.magnetic_radius)
            .finish_non_exhaustive()
    }
}

impl<E: 'static, S: 'static> DropZone<E, S> {
    /// Start building a zone.
    pub fn builder(id: impl Into<ZoneId>, kind: ZoneKind) -> DropZoneBuilder<E, S> {
        DropZoneBuilder::new(id.into(), kind)
    }
}

impl<E, S> DropZone<E, S> {
    /// Zone identifier.
    #[must_use]
    pub fn id(&self) -> &ZoneId {
        &self.id
    }

    /// Zone kind tag.
    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    /// Screen-space rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Higher wins among valid candidates.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Attraction radius around the rectangle's center.
    #[must_use]
    pub fn magnetic_radius(&self) -> f32 {
        self.magnetic_radius
    }

    /// Visual hints, falling back to the defaults for the zone kind.
    #[must_use]
    pub fn hints(&self) -> VisualHints {
        self.hints.unwrap_or(VisualHints::for_kind(self.kind))
    }

    /// Run the zone's validator.
    pub fn check(&self, entity: &E, state: &S) -> Result<Verdict, RuleError> {
        self.validator.check(entity, state)
    }

    /// Run the zone's drop action.
    pub fn perform_drop(&self, entity: &E, state: &mut S) -> Result<(), RuleError> {
        self.action.run(entity, state)
    }
}

/// Builder for [`DropZone`].
#[derive(Debug)]
pub struct DropZoneBuilder<E, S> {
    id: ZoneId,
    kind: ZoneKind,
    bounds: Rect,
    priority: i32,
    magnetic_radius: f32,
    validator: Validator<E, S>,
    action: DropAction<E, S>,
    hints: Option<VisualHints>,
}

impl<E: 'static, S: 'static> DropZoneBuilder<E, S> {
    /// Create a builder with an empty rectangle, priority 0, no magnetism,
    /// an always-valid validator and a no-op action.
    pub fn new(id: ZoneId, kind: ZoneKind) -> Self {
        Self {
            id,
            kind,
            bounds: Rect::default(),
            priority: 0,
            magnetic_radius: 0.0,
            validator: Validator::always(),
            action: DropAction::noop(),
            hints: None,
        }
    }

    /// Set the rectangle.
    #[must_use]
    pub fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the magnetic radius.
    #[must_use]
    pub fn magnetic_radius(mut self, radius: f32) -> Self {
        self.magnetic_radius = radius;
        self
    }

    /// Set the validator.
    #[must_use]
    pub fn validator(mut self, validator: Validator<E, S>) -> Self {
        self.validator = validator;
        self
    }

    /// Set the drop action.
    #[must_use]
    pub fn action(mut self, action: DropAction<E, S>) -> Self {
        self.action = action;
        self
    }

    /// Set custom visual hints.
    #[must_use]
    pub fn hints(mut self, hints: VisualHints) -> Self {
        self.hints = Some(hints);
        self
    }

    /// Validate geometry and build the zone.
    pub fn build(self) -> Result<DropZone<E, S>, ZoneError> {
        if !self.bounds.is_well_formed() {
            return Err(ZoneError::InvalidBounds { id: self.id });
        }
        if !self.magnetic_radius.is_finite() || self.magnetic_radius < 0.0 {
            return Err(ZoneError::InvalidMagneticRadius { id: self.id });
        }

        Ok(DropZone {
            id: self.id,
            kind: self.kind,
            bounds: self.bounds,
            priority: self.priority,
            magnetic_radius: self.magnetic_radius,
            validator: self.validator,
            action: self.action,
            hints: self.hints,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let zone = DropZone::<(), ()>::builder("discard", ZoneKind::Discard)
            .bounds(Rect::new(200.0, 50.0, 100.0, 100.0))
            .priority(5)
            .build()
            .unwrap();

        assert_eq!(zone.id(), &ZoneId::new("discard"));
        assert_eq!(zone.kind(), ZoneKind::Discard);
        assert_eq!(zone.priority(), 5);
        assert_eq!(zone.magnetic_radius(), 0.0);
        assert!(zone.check(&(), &()).unwrap().is_accept());
        assert!(zone.perform_drop(&(), &mut ()).is_ok());
        assert_eq!(zone.hints(), VisualHints::for_kind(ZoneKind::Discard));
    }

    #[test]
    fn test_builder_rejects_bad_geometry() {
        let bad_bounds = DropZone::<(), ()>::builder("a", ZoneKind::Special)
            .bounds(Rect::new(0.0, 0.0, -10.0, 10.0))
            .build();
        assert_eq!(
            bad_bounds.unwrap_err(),
            ZoneError::InvalidBounds { id: ZoneId::new("a") }
        );

        let bad_radius = DropZone::<(), ()>::builder("b", ZoneKind::Special)
            .magnetic_radius(-1.0)
            .build();
        assert_eq!(
            bad_radius.unwrap_err(),
            ZoneError::InvalidMagneticRadius { id: ZoneId::new("b") }
        );

        let nan_radius = DropZone::<(), ()>::builder("c", ZoneKind::Special)
            .magnetic_radius(f32::NAN)
            .build();
        assert!(nan_radius.is_err());
    }

    #[test]
    fn test_custom_hints() {
        let hints = VisualHints {
            available: HighlightStyle::new(0x00ff00, 0.1, 1.0),
            hover: HighlightStyle::new(0x00ff00, 0.5, 3.0),
        };
        let zone = DropZone::<(), ()>::builder("x", ZoneKind::Challenge)
            .hints(hints)
            .build()
            .unwrap();
        assert_eq!(zone.hints(), hints);
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(VisualHints::for_kind(ZoneKind::Challenge).available.color, 0xffd700);
        assert_eq!(VisualHints::for_kind(ZoneKind::Discard).hover.color, 0xff6b6b);
        assert_eq!(VisualHints::for_kind(ZoneKind::Special).available.color, 0x9b59b6);
    }

    #[test]
    fn test_hints_serialization() {
        let hints = VisualHints::for_kind(ZoneKind::Challenge);
        let json = serde_json::to_string(&hints).unwrap();
        let deserialized: VisualHints = serde_json::from_str(&json).unwrap();
        assert_eq!(hints, deserialized);
    }
}
