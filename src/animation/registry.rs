//! Animator registry: creation, per-frame ticking and running-state
//! bookkeeping.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use rustc_hash::FxHashSet;
use web_time::Duration;

use super::animator::{AnimatorId, AnimatorObserver, CameraAnimator};
use super::catch_up::CatchUpAnimator;
use super::ease::EaseAnimator;
use super::easing::EasingFunction;
use crate::camera::{CameraOptions, CameraSurface};
use crate::cancelable::Cancelable;
use crate::util::Clock;

/// Ids of animators currently between start and stop.
#[derive(Default)]
struct RunningSet {
    ids: RefCell<FxHashSet<AnimatorId>>,
}

impl AnimatorObserver for RunningSet {
    fn animator_started(&self, id: AnimatorId) {
        let _ = self.ids.borrow_mut().insert(id);
    }

    fn animator_stopped(&self, id: AnimatorId) {
        let _ = self.ids.borrow_mut().remove(&id);
    }
}

struct Registry {
    camera: Rc<dyn CameraSurface>,
    clock: Rc<dyn Clock>,
    animators: RefCell<Vec<(AnimatorId, Weak<dyn CameraAnimator>)>>,
    running: Rc<RunningSet>,
    next_id: Cell<u64>,
    /// Callbacks to run at the start of the next tick.
    deferred: RefCell<Vec<Box<dyn FnOnce()>>>,
}

/// Creates camera animators and drives them from the frame loop.
///
/// The registry only holds animators weakly: whoever started an animation
/// owns it, and dropping the last strong handle retires it. Call
/// [`update`](Self::update) once per frame to advance every live animator.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone)]
pub struct CameraAnimations {
    inner: Rc<Registry>,
}

impl CameraAnimations {
    /// Registry animating `camera` against `clock`.
    pub fn new(camera: Rc<dyn CameraSurface>, clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(Registry {
                camera,
                clock,
                animators: RefCell::new(Vec::new()),
                running: Rc::new(RunningSet::default()),
                next_id: Cell::new(0),
                deferred: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Camera surface animators write to.
    #[must_use]
    pub fn camera(&self) -> &Rc<dyn CameraSurface> {
        &self.inner.camera
    }

    /// Clock animators measure time against.
    #[must_use]
    pub fn clock(&self) -> &Rc<dyn Clock> {
        &self.inner.clock
    }

    /// New inactive catch-up animator, ticked by this registry once
    /// started.
    #[must_use]
    pub fn make_catch_up_animator(
        &self,
        target: CameraOptions,
        duration: Duration,
    ) -> Rc<CatchUpAnimator> {
        let animator = Rc::new(CatchUpAnimator::new(
            self.next_id(),
            target,
            duration,
            self.inner.camera.clone(),
            self.inner.clock.clone(),
            self.inner.running.clone(),
        ));
        let weak = Rc::downgrade(&animator);
        self.register(animator.id(), weak);
        animator
    }

    /// New inactive eased animator, ticked by this registry once started.
    #[must_use]
    pub fn make_ease_animator(
        &self,
        target: CameraOptions,
        duration: Duration,
        easing: EasingFunction,
    ) -> Rc<EaseAnimator> {
        let animator = Rc::new(EaseAnimator::new(
            self.next_id(),
            target,
            duration,
            easing,
            self.inner.camera.clone(),
            self.inner.clock.clone(),
            self.inner.running.clone(),
        ));
        let weak = Rc::downgrade(&animator);
        self.register(animator.id(), weak);
        animator
    }

    /// Run `task` at the start of the next [`update`](Self::update), before
    /// any animator advances.
    pub fn defer(&self, task: impl FnOnce() + 'static) {
        self.inner.deferred.borrow_mut().push(Box::new(task));
    }

    /// Run deferred callbacks, then advance every live animator by one
    /// frame, in creation order.
    ///
    /// Animators created and callbacks deferred from inside a callback
    /// during this tick are first handled on the next one.
    pub fn update(&self) {
        let deferred = std::mem::take(&mut *self.inner.deferred.borrow_mut());
        for task in deferred {
            task();
        }
        for animator in self.live() {
            animator.update();
        }
    }

    /// Cancel every live animator.
    pub fn cancel_all(&self) {
        for animator in self.live() {
            animator.cancel();
        }
    }

    /// Whether any animator is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.inner.running.ids.borrow().is_empty()
    }

    /// Number of running animators.
    #[must_use]
    pub fn running_count(&self) -> usize {
        self.inner.running.ids.borrow().len()
    }

    fn next_id(&self) -> AnimatorId {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        AnimatorId(id)
    }

    fn register(&self, id: AnimatorId, animator: Weak<dyn CameraAnimator>) {
        self.inner.animators.borrow_mut().push((id, animator));
    }

    /// Strong handles to every animator still alive, pruning the rest.
    ///
    /// The list borrow ends before the handles are returned, so callbacks
    /// fired by the caller may create new animators freely.
    fn live(&self) -> Vec<Rc<dyn CameraAnimator>> {
        let mut animators = self.inner.animators.borrow_mut();
        let mut live = Vec::with_capacity(animators.len());
        animators.retain(|(id, weak)| {
            if let Some(animator) = weak.upgrade() {
                live.push(animator);
                true
            } else {
                // dropped without stopping
                let _ = self.inner.running.ids.borrow_mut().remove(id);
                false
            }
        });
        live
    }
}

impl std::fmt::Debug for CameraAnimations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraAnimations")
            .field("registered", &self.inner.animators.borrow().len())
            .field("running", &self.running_count())
            .field("deferred", &self.inner.deferred.borrow().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimatorState;
    use crate::camera::{Camera, CameraState};
    use crate::util::ManualClock;

    fn registry() -> (Rc<Camera>, Rc<ManualClock>, CameraAnimations) {
        let camera = Rc::new(Camera::new(CameraState::default()));
        let clock = Rc::new(ManualClock::new());
        let animations = CameraAnimations::new(camera.clone(), clock.clone());
        (camera, clock, animations)
    }

    #[test]
    fn tracks_running_animators() {
        let (_camera, clock, animations) = registry();
        let first = animations.make_catch_up_animator(
            CameraOptions::new().with_zoom(3.0),
            Duration::from_millis(100),
        );
        let second = animations.make_catch_up_animator(
            CameraOptions::new().with_pitch(10.0),
            Duration::from_millis(300),
        );
        assert_ne!(first.id(), second.id());
        assert!(!animations.is_animating());

        first.start();
        second.start();
        assert_eq!(animations.running_count(), 2);

        clock.advance(Duration::from_millis(150));
        animations.update();
        assert_eq!(first.state(), AnimatorState::Inactive);
        assert_eq!(animations.running_count(), 1);

        second.cancel();
        assert!(!animations.is_animating());
    }

    #[test]
    fn update_drives_the_camera() {
        let (camera, clock, animations) = registry();
        let animator = animations.make_ease_animator(
            CameraOptions::new().with_zoom(6.0),
            Duration::from_millis(100),
            EasingFunction::Linear,
        );
        animator.start();
        clock.advance(Duration::from_millis(50));
        animations.update();
        assert!((camera.camera_state().zoom - 3.0).abs() < 1e-9);
    }

    #[test]
    fn dropped_animators_are_pruned() {
        let (_camera, _clock, animations) = registry();
        let animator = animations.make_catch_up_animator(
            CameraOptions::new(),
            Duration::from_millis(100),
        );
        animator.start();
        assert_eq!(animations.running_count(), 1);
        drop(animator);
        animations.update();
        assert_eq!(animations.running_count(), 0);
    }

    #[test]
    fn cancel_all_stops_everything() {
        let (_camera, _clock, animations) = registry();
        let a = animations.make_catch_up_animator(
            CameraOptions::new(),
            Duration::from_secs(1),
        );
        let b = animations.make_ease_animator(
            CameraOptions::new(),
            Duration::from_secs(1),
            EasingFunction::Linear,
        );
        a.start();
        b.start();
        animations.cancel_all();
        assert!(!animations.is_animating());
        assert_eq!(a.state(), AnimatorState::Inactive);
        assert_eq!(b.state(), AnimatorState::Inactive);
    }

    #[test]
    fn deferred_tasks_run_once_on_the_next_tick() {
        let (_camera, _clock, animations) = registry();
        let ran = Rc::new(RefCell::new(Vec::new()));
        {
            let ran = ran.clone();
            let again = animations.clone();
            animations.defer(move || {
                ran.borrow_mut().push("first");
                let ran = ran.clone();
                again.defer(move || ran.borrow_mut().push("second"));
            });
        }
        assert!(ran.borrow().is_empty());

        animations.update();
        assert_eq!(*ran.borrow(), vec!["first"]);
        animations.update();
        assert_eq!(*ran.borrow(), vec!["first", "second"]);
        animations.update();
        assert_eq!(ran.borrow().len(), 2);
    }

    #[test]
    fn animator_created_during_update_waits_a_frame() {
        let (camera, clock, animations) = registry();
        let spawned: Rc<RefCell<Option<Rc<CatchUpAnimator>>>> =
            Rc::new(RefCell::new(None));
        let first = animations.make_catch_up_animator(
            CameraOptions::new().with_zoom(1.0),
            Duration::ZERO,
        );
        {
            let animations = animations.clone();
            let spawned = spawned.clone();
            first.set_completion(move |_| {
                let next = animations.make_catch_up_animator(
                    CameraOptions::new().with_zoom(5.0),
                    Duration::ZERO,
                );
                next.start();
                *spawned.borrow_mut() = Some(next);
            });
        }
        first.start();
        clock.advance(Duration::from_millis(16));
        animations.update();
        assert_eq!(camera.camera_state().zoom, 1.0);
        assert_eq!(animations.running_count(), 1);

        animations.update();
        assert_eq!(camera.camera_state().zoom, 5.0);
        assert!(spawned.borrow().is_some());
    }
}
