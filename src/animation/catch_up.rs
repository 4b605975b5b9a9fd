//! Short convergence animation toward a target that may keep moving.

use std::cell::Cell;
use std::rc::Rc;

use web_time::Duration;

use super::animator::{
    AnimatorId, AnimatorObserver, AnimatorState, CameraAnimator, Completion,
    Lifecycle,
};
use super::interpolation::interpolate;
use crate::camera::{CameraOptions, CameraSurface};
use crate::cancelable::Cancelable;
use crate::util::Clock;

/// Converges the camera onto a live, replaceable target.
///
/// Each frame re-reads the camera as the interpolation source and moves it
/// `elapsed / duration` of the way toward the current target. Reading the
/// live camera rather than a snapshot means the animation corrects itself
/// when something else nudges the camera between frames, and replacing the
/// target mid-flight never restarts the timer.
///
/// Lifecycle: `Inactive --start()--> Active --(finish | cancel)--> Inactive`.
/// The completion fires exactly once: `true` when elapsed time reaches the
/// duration, `false` on cancel.
pub struct CatchUpAnimator {
    lifecycle: Lifecycle,
    target: Cell<CameraOptions>,
    duration: Duration,
    camera: Rc<dyn CameraSurface>,
    clock: Rc<dyn Clock>,
}

impl CatchUpAnimator {
    /// Inactive animator aimed at `target`.
    ///
    /// Usually built through
    /// [`CameraAnimations::make_catch_up_animator`](super::CameraAnimations::make_catch_up_animator),
    /// which also ticks it.
    pub fn new(
        id: AnimatorId,
        target: CameraOptions,
        duration: Duration,
        camera: Rc<dyn CameraSurface>,
        clock: Rc<dyn Clock>,
        observer: Rc<dyn AnimatorObserver>,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::new(id, observer),
            target: Cell::new(target),
            duration,
            camera,
            clock,
        }
    }

    /// Current target.
    #[must_use]
    pub fn target(&self) -> CameraOptions {
        self.target.get()
    }

    /// Replace the target. Takes effect on the next frame.
    pub fn set_target(&self, target: CameraOptions) {
        self.target.set(target);
    }

    /// Configured duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Install the completion callback, replacing any previous one.
    pub fn set_completion(&self, completion: impl FnOnce(bool) + 'static) {
        let completion: Completion = Box::new(completion);
        self.lifecycle.set_completion(completion);
    }

    /// Whether a completion is still waiting to fire.
    #[must_use]
    pub fn has_pending_completion(&self) -> bool {
        self.lifecycle.has_completion()
    }

    /// Record the start instant and begin animating on the next frame.
    ///
    /// # Panics
    ///
    /// Panics if called a second time.
    pub fn start(&self) {
        let _started = self.lifecycle.start(self.clock.now());
    }
}

impl Cancelable for CatchUpAnimator {
    fn cancel(&self) {
        self.lifecycle.finish(false);
    }
}

impl CameraAnimator for CatchUpAnimator {
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

        let percent = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed =
                self.clock.now().saturating_duration_since(started_at);
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };

        let from = CameraOptions::from(&self.camera.camera_state());
        let to = self.target.get();
        self.camera.set_camera(&interpolate(&from, &to, percent));
        log::trace!("catch-up {:?} at {percent:.3}", self.lifecycle.id());

        if percent >= 1.0 {
            self.lifecycle.finish(true);
        }
    }
}

impl std::fmt::Debug for CatchUpAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatchUpAnimator")
            .field("id", &self.lifecycle.id())
            .field("state", &self.lifecycle.state())
            .field("target", &self.target.get())
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}
