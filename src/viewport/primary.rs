//! The primary-phase animation capability.

use web_time::Duration;

use crate::animation::{CameraAnimations, Completion, EasingFunction};
use crate::camera::CameraOptions;
use crate::cancelable::CancelableHandle;

/// Animates the camera toward a fixed target within a time budget.
///
/// The first phase of a viewport transition delegates to this. An
/// implementation must report through `completion` exactly once: `true`
/// when it arrives, `false` when interrupted, including when the returned
/// token is cancelled. Reporting from inside `animate` itself is allowed;
/// a viewport transition holds such an outcome until the next frame.
pub trait PrimaryAnimation {
    /// Start animating toward `target`, taking at most `max_duration`.
    fn animate(
        &self,
        target: &CameraOptions,
        max_duration: Duration,
        completion: Completion,
    ) -> CancelableHandle;
}

/// Eased flight over the full time budget.
#[derive(Debug, Clone)]
pub struct EaseAnimation {
    animations: CameraAnimations,
    easing: EasingFunction,
}

impl EaseAnimation {
    /// Ease with `easing`, using animators from `animations`.
    #[must_use]
    pub fn new(animations: CameraAnimations, easing: EasingFunction) -> Self {
        Self { animations, easing }
    }
}

impl PrimaryAnimation for EaseAnimation {
    fn animate(
        &self,
        target: &CameraOptions,
        max_duration: Duration,
        completion: Completion,
    ) -> CancelableHandle {
        let animator = self.animations.make_ease_animator(
            *target,
            max_duration,
            self.easing,
        );
        animator.set_completion(completion);
        animator.start();
        animator
    }
}
