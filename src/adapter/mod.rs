//! Integration adapter: pointer input in, renderer callbacks out.
//!
//! ## Overview
//!
//! [`DragAdapter`] turns press/move/release events into controller calls
//! and drives the visual side of a drag through a host-provided
//! [`Renderer`]:
//!
//! - **press**: lift the card, pulse haptics on touch devices, highlight
//!   every zone that accepts the card
//! - **move**: shift touch input by the device's touch offset, swap hover
//!   highlights, pull the card into magnetic zones
//! - **release**: success pulses and fades the card; failure returns it to
//!   its start position and shakes it
//!
//! Post-drop sequences run on the renderer's timeline. The host reports
//! each finished animation through [`DragAdapter::animation_finished`];
//! until the last one finishes, new presses are ignored.

mod drag;
mod feedback;
mod pointer;
mod renderer;

pub use drag::DragAdapter;
pub use feedback::{FeedbackChain, FeedbackStep, Keyframe};
pub use pointer::{PointerEvent, PointerKind};
pub use renderer::{HapticPattern, Renderer, VisualState};
