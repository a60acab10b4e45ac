//! Drop zones and their registry.
//!
//! Zones are **scene-configured**: scene setup code builds them with
//! [`DropZone::builder`] and registers them at initialization time. A zone
//! lives until the scene tears it down or removes it explicitly.
//!
//! ## Key Types
//!
//! - `ZoneId`: String key, unique per registry (from `core::config`)
//! - `DropZone`: Bounds, priority, magnetism, validator, action, visuals
//! - `ZoneRegistry`: Id-keyed storage with O(1) snapshots
//! - `HighlightId`: Renderer handle for a zone's highlight

mod registry;
mod zone;

pub use registry::{RemovedZone, ZoneRegistry, ZoneSnapshot};
pub use zone::{DropZone, DropZoneBuilder, HighlightId, HighlightStyle, VisualHints};

// Re-export zone types from core for convenience
pub use crate::core::config::{ZoneId, ZoneKind};
