//! Camera animators and the interpolation they share.
//!
//! Animators are created inactive through [`CameraAnimations`], started by
//! their owner and then ticked once per frame by
//! [`CameraAnimations::update`].

mod animator;
mod catch_up;
mod ease;
mod easing;
pub mod interpolation;
mod registry;

pub use animator::{
    AnimatorId, AnimatorObserver, AnimatorState, CameraAnimator, Completion,
};
pub use catch_up::CatchUpAnimator;
pub use ease::EaseAnimator;
pub use easing::EasingFunction;
pub use interpolation::{interpolate, Interpolate};
pub use registry::CameraAnimations;
