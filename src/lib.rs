//! # ccg-drop
//!
//! Drag-and-drop resolution for card game tables.
//!
//! ## Design Principles
//!
//! 1. **Scene-Configured Zones**: No hardcoded zones. Scenes register
//!    rectangles with a priority, a magnetic radius, a validator and an
//!    action at startup.
//!
//! 2. **Opaque Entities and State**: The core never inspects the dragged
//!    card or the game state. Both are generic parameters, passed by
//!    reference to validators and actions.
//!
//! 3. **Failures Are Values**: Validator errors, failed actions and misuse
//!    come back as `DropResult`/`DragError`. Nothing leaves the session
//!    stuck mid-drag.
//!
//! ## Architecture
//!
//! - **Start-of-drag snapshot**: Validators run once per zone when the drag
//!   starts; hover tracking reuses that verdict.
//!
//! - **Throttled hover**: Position is recorded on every update, hover is
//!   recomputed at most once per throttle interval.
//!
//! - **Authoritative drop**: `end` re-validates against the live registry
//!   and state before running an action.
//!
//! - **Persistent Data Structures**: O(1) registry snapshots via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: Geometry, identifiers, configuration, errors
//! - `zones`: Drop zones and the zone registry
//! - `rules`: Validators, actions, combinators and presets
//! - `resolve`: Hit testing with priority and magnetism
//! - `session`: The drag state machine
//! - `device`: Device detection and tuning constants
//! - `adapter`: Pointer input and renderer feedback
//! - `games`: Reference table fixture

pub mod core;
pub mod zones;
pub mod rules;
pub mod resolve;
pub mod session;
pub mod device;
pub mod adapter;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Point, Rect,
    ZoneId, ZoneKind,
    RestartPolicy, SessionConfig,
    ZoneError, DragError, RuleError,
};

pub use crate::zones::{
    DropZone, DropZoneBuilder, ZoneRegistry, ZoneSnapshot, RemovedZone,
    HighlightId, HighlightStyle, VisualHints,
};

pub use crate::rules::{
    Validator, Verdict, DropAction,
    combine, either, not, conditional, sequence,
    CardView, TableView, TablePlay,
};

pub use crate::resolve::{resolve, resolve_detailed, HitReport, Rejection};

pub use crate::session::{
    DragController, DragState, ActiveDrag,
    DragUpdate, HoverChange, SnapTarget,
    DropResult, DropFailure, SessionStats,
};

pub use crate::device::{DeviceCapabilities, DeviceClass, DeviceProfile};

pub use crate::adapter::{
    DragAdapter, Renderer, PointerEvent, PointerKind,
    VisualState, FeedbackStep, HapticPattern,
};
