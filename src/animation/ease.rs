//! Eased animation from a start snapshot to a fixed target.

use std::cell::Cell;
use std::rc::Rc;

use web_time::Duration;

use super::animator::{
    AnimatorId, AnimatorObserver, AnimatorState, CameraAnimator, Completion,
    Lifecycle,
};
use super::easing::EasingFunction;
use super::interpolation::interpolate;
use crate::camera::{CameraOptions, CameraSurface};
use crate::cancelable::Cancelable;
use crate::util::Clock;

/// Moves the camera along an easing curve toward a fixed target.
///
/// Unlike [`CatchUpAnimator`](super::CatchUpAnimator), the source is
/// frozen when the animation starts, so the curve shape is preserved from
/// the first frame to the last.
pub struct EaseAnimator {
    lifecycle: Lifecycle,
    from: Cell<CameraOptions>,
    target: CameraOptions,
    duration: Duration,
    easing: EasingFunction,
    camera: Rc<dyn CameraSurface>,
    clock: Rc<dyn Clock>,
}

impl EaseAnimator {
    /// Inactive animator toward `target`.
    pub fn new(
        id: AnimatorId,
        target: CameraOptions,
        duration: Duration,
        easing: EasingFunction,
        camera: Rc<dyn CameraSurface>,
        clock: Rc<dyn Clock>,
        observer: Rc<dyn AnimatorObserver>,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::new(id, observer),
            from: Cell::new(CameraOptions::new()),
            target,
            duration,
            easing,
            camera,
            clock,
        }
    }

    /// Target this animator moves toward.
    #[must_use]
    pub fn target(&self) -> CameraOptions {
        self.target
    }

    /// Install the completion callback, replacing any previous one.
    pub fn set_completion(&self, completion: impl FnOnce(bool) + 'static) {
        let completion: Completion = Box::new(completion);
        self.lifecycle.set_completion(completion);
    }

    /// Snapshot the camera and go active.
    ///
    /// # Panics
    ///
    /// Panics if called a second time.
    pub fn start(&self) {
        let from = CameraOptions::from(&self.camera.camera_state());
        if self.lifecycle.start(self.clock.now()) {
            self.from.set(from);
        }
    }
}

impl Cancelable for EaseAnimator {
    fn cancel(&self) {
        self.lifecycle.finish(false);
    }
}

impl CameraAnimator for EaseAnimator {
    fn id(&self) -> AnimatorId {
        self.lifecycle.id()
    }

    fn state(&self) -> AnimatorState {
        self.lifecycle.state()
    }

    fn update(&self) {
        let Some(started_at) = self.lifecycle.running_since() else {
            return;
        };

        let raw_t = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed =
                self.clock.now().saturating_duration_since(started_at);
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        let eased_t = self.easing.evaluate(raw_t);

        let from = self.from.get();
        self.camera
            .set_camera(&interpolate(&from, &self.target, eased_t));

        if raw_t >= 1.0 {
            self.lifecycle.finish(true);
        }
    }
}

impl std::fmt::Debug for EaseAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EaseAnimator")
            .field("id", &self.lifecycle.id())
            .field("state", &self.lifecycle.state())
            .field("target", &self.target)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
