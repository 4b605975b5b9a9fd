//! Viewport transitions: flying the camera onto a target that may move.
//!
//! A transition has two phases. The [`PrimaryAnimation`] covers most of
//! the distance toward the target's first position; a catch-up animator
//! then converges on wherever the target has moved to. [`ViewportTransition`]
//! sequences the phases and [`ViewportController`] keeps at most one
//! transition running.

mod controller;
mod primary;
mod target;
mod transition;

pub use controller::{ViewportController, ViewportStatus};
pub use primary::{EaseAnimation, PrimaryAnimation};
pub use target::{MovingTarget, TargetHandler, TargetStream};
pub use transition::ViewportTransition;
