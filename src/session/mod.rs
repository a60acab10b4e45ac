//! The drag session.
//!
//! ## Overview
//!
//! A [`DragController`] owns a zone registry and at most one in-flight drag.
//! The lifecycle is `Idle -> Dragging -> Idle`:
//!
//! - **start**: validate every zone once and snapshot the accepting ones
//! - **update**: track the pointer; recompute hover at most once per
//!   throttle interval, against the snapshot only
//! - **end**: resolve against the live registry and state, run the winning
//!   zone's action, always return to `Idle`
//!
//! Misuse (`update`/`end` while idle, `start` while dragging) is reported
//! through [`DragError`](crate::core::DragError) and
//! [`DropFailure`], never by panicking.

mod controller;
mod result;
mod state;
mod stats;

pub use controller::DragController;
pub use result::{DragUpdate, DropFailure, DropResult, HoverChange, SnapTarget};
pub use state::{ActiveDrag, DragState};
pub use stats::SessionStats;
