//! Drop zone registry.
//!
//! The `ZoneRegistry` maps zone ids to zones and owns the highlight handle
//! drawn for each zone. It supports:
//! - Registration with duplicate detection
//! - Idempotent removal (UI teardown order is not guaranteed)
//! - O(1) snapshots that stay valid while the registry changes
//! - Handing back highlight handles exactly once for the renderer to clear

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::core::{ZoneError, ZoneId};

use super::zone::{DropZone, HighlightId};

/// Immutable view of the registry at one point in time.
///
/// Backed by a persistent map, so taking one is O(1) and later registry
/// mutations never affect it.
pub struct ZoneSnapshot<E, S> {
    zones: im::HashMap<ZoneId, Rc<DropZone<E, S>>>,
}

impl<E, S> Clone for ZoneSnapshot<E, S> {
    fn clone(&self) -> Self {
        Self {
            zones: self.zones.clone(),
        }
    }
}

impl<E, S> std::fmt::Debug for ZoneSnapshot<E, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.zones.keys()).finish()
    }
}

impl<E, S> ZoneSnapshot<E, S> {
    /// Get a zone by ID.
    #[must_use]
    pub fn get(&self, id: &ZoneId) -> Option<&DropZone<E, S>> {
        self.zones.get(id).map(Rc::as_ref)
    }

    /// Iterate over the zones. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &DropZone<E, S>> {
        self.zones.values().map(Rc::as_ref)
    }

    /// Number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Check if the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// A zone taken out of the registry, with the highlight it still had.
#[derive(Debug)]
pub struct RemovedZone<E, S> {
    pub zone: Rc<DropZone<E, S>>,
    /// Highlight the caller must clear on the renderer.
    pub highlight: Option<HighlightId>,
}

/// Registry of drop zones.
///
/// ## Example
///
/// ```
/// use ccg_drop::core::{Rect, ZoneId, ZoneKind};
/// use ccg_drop::zones::{DropZone, ZoneRegistry};
///
/// let mut registry = ZoneRegistry::<(), ()>::new();
/// let discard = DropZone::builder("discard", ZoneKind::Discard)
///     .bounds(Rect::new(200.0, 50.0, 100.0, 100.0))
///     .build()
///     .unwrap();
///
/// registry.add(discard).unwrap();
/// assert!(registry.contains(&ZoneId::new("discard")));
///
/// // Removal is idempotent
/// assert!(registry.remove(&ZoneId::new("discard")).is_some());
/// assert!(registry.remove(&ZoneId::new("discard")).is_none());
/// ```
pub struct ZoneRegistry<E, S> {
    zones: im::HashMap<ZoneId, Rc<DropZone<E, S>>>,
    highlights: FxHashMap<ZoneId, HighlightId>,
}

impl<E, S> Default for ZoneRegistry<E, S> {
    fn default() -> Self {
        Self {
            zones: im::HashMap::new(),
            highlights: FxHashMap::default(),
        }
    }
}

impl<E, S> std::fmt::Debug for ZoneRegistry<E, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneRegistry")
            .field("zones", &self.zones.keys().collect::<Vec<_>>())
            .field("highlights", &self.highlights)
            .finish()
    }
}

impl<E, S> ZoneRegistry<E, S> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone.
    ///
    /// Fails with [`ZoneError::Duplicate`] if the id is taken; the existing
    /// zone is left in place.
    pub fn add(&mut self, zone: DropZone<E, S>) -> Result<(), ZoneError> {
        if self.zones.contains_key(zone.id()) {
            return Err(ZoneError::Duplicate(zone.id().clone()));
        }
        self.zones.insert(zone.id().clone(), Rc::new(zone));
        Ok(())
    }

    /// Remove a zone. Returns `None` if it was not registered.
    pub fn remove(&mut self, id: &ZoneId) -> Option<RemovedZone<E, S>> {
        let zone = self.zones.remove(id)?;
        let highlight = self.highlights.remove(id);
        Some(RemovedZone { zone, highlight })
    }

    /// Get a zone by ID.
    #[must_use]
    pub fn get(&self, id: &ZoneId) -> Option<&DropZone<E, S>> {
        self.zones.get(id).map(Rc::as_ref)
    }

    /// Check if a zone is registered.
    #[must_use]
    pub fn contains(&self, id: &ZoneId) -> bool {
        self.zones.contains_key(id)
    }

    /// Number of registered zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterate over the zones. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &DropZone<E, S>> {
        self.zones.values().map(Rc::as_ref)
    }

    /// Take an O(1) snapshot of all zones.
    #[must_use]
    pub fn snapshot(&self) -> ZoneSnapshot<E, S> {
        ZoneSnapshot {
            zones: self.zones.clone(),
        }
    }

    /// Remove every zone. Returns the highlights the caller must clear.
    pub fn clear(&mut self) -> Vec<HighlightId> {
        self.zones.clear();
        self.take_all_highlights()
    }

    // === Highlight handles ===

    /// Attach a highlight handle to a zone.
    ///
    /// Returns the handle the caller must release: the one it replaced, or
    /// `handle` itself when the zone is not registered.
    #[must_use]
    pub fn set_highlight(&mut self, id: &ZoneId, handle: HighlightId) -> Option<HighlightId> {
        if !self.zones.contains_key(id) {
            return Some(handle);
        }
        self.highlights.insert(id.clone(), handle)
    }

    /// Current highlight handle of a zone.
    #[must_use]
    pub fn highlight(&self, id: &ZoneId) -> Option<HighlightId> {
        self.highlights.get(id).copied()
    }

    /// Detach a zone's highlight handle. A second call returns `None`.
    pub fn take_highlight(&mut self, id: &ZoneId) -> Option<HighlightId> {
        self.highlights.remove(id)
    }

    /// Detach every highlight handle.
    pub fn take_all_highlights(&mut self) -> Vec<HighlightId> {
        self.highlights.drain().map(|(_, handle)| handle).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rect, ZoneKind};

    fn zone(id: &str) -> DropZone<(), ()> {
        DropZone::builder(id, ZoneKind::Special)
            .bounds(Rect::new(0.0, 0.0, 10.0, 10.0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut registry = ZoneRegistry::new();
        registry.add(zone("a")).unwrap();
        registry.add(zone("b")).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.get(&ZoneId::new("a")).is_some());
        assert!(registry.get(&ZoneId::new("zz")).is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = ZoneRegistry::new();
        registry.add(zone("a")).unwrap();

        let err = registry.add(zone("a")).unwrap_err();
        assert_eq!(err, ZoneError::Duplicate(ZoneId::new("a")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_idempotent() {
        let mut registry = ZoneRegistry::new();
        registry.add(zone("a")).unwrap();

        assert!(registry.remove(&ZoneId::new("a")).is_some());
        assert!(registry.remove(&ZoneId::new("a")).is_none());
        assert!(registry.remove(&ZoneId::new("never")).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_snapshot_isolated_from_mutation() {
        let mut registry = ZoneRegistry::new();
        registry.add(zone("a")).unwrap();
        registry.add(zone("b")).unwrap();

        let snapshot = registry.snapshot();
        registry.remove(&ZoneId::new("a"));
        registry.add(zone("c")).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.get(&ZoneId::new("a")).is_some());
        assert!(snapshot.get(&ZoneId::new("c")).is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_highlight_released_once() {
        let mut registry = ZoneRegistry::new();
        registry.add(zone("a")).unwrap();
        let id = ZoneId::new("a");

        assert_eq!(registry.set_highlight(&id, HighlightId::new(1)), None);
        assert_eq!(registry.set_highlight(&id, HighlightId::new(2)), Some(HighlightId::new(1)));
        assert_eq!(registry.highlight(&id), Some(HighlightId::new(2)));

        let removed = registry.remove(&id).unwrap();
        assert_eq!(removed.highlight, Some(HighlightId::new(2)));
        assert_eq!(registry.take_highlight(&id), None);
    }

    #[test]
    fn test_highlight_for_unknown_zone_handed_back() {
        let mut registry = ZoneRegistry::<(), ()>::new();
        let handle = HighlightId::new(7);
        assert_eq!(registry.set_highlight(&ZoneId::new("ghost"), handle), Some(handle));
    }

    #[test]
    fn test_clear_returns_highlights() {
        let mut registry = ZoneRegistry::new();
        registry.add(zone("a")).unwrap();
        registry.add(zone("b")).unwrap();
        let _ = registry.set_highlight(&ZoneId::new("a"), HighlightId::new(1));
        let _ = registry.set_highlight(&ZoneId::new("b"), HighlightId::new(2));

        let mut released = registry.clear();
        released.sort_by_key(|h| h.raw());
        assert_eq!(released, vec![HighlightId::new(1), HighlightId::new(2)]);
        assert!(registry.is_empty());

        // Clearing again releases nothing
        assert!(registry.clear().is_empty());
    }
}
