//! Two-phase transition toward a target that may keep moving.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::Duration;

use super::primary::{EaseAnimation, PrimaryAnimation};
use super::target::TargetStream;
use crate::animation::{CameraAnimations, Completion, EasingFunction};
use crate::camera::CameraOptions;
use crate::cancelable::{Cancelable, CompositeCancelable, FnCancelable};
use crate::options::TransitionOptions;

/// Share of the maximum duration given to the primary phase.
const PRIMARY_SHARE: f64 = 0.8;
/// Share of the maximum duration given to the catch-up phase.
const CATCH_UP_SHARE: f64 = 0.2;

/// The caller's completion, fired at most once from whichever path gets
/// there first.
///
/// Until [`release`](Self::release) runs, an outcome is only held, so a
/// primary capability that reports synchronously cannot reach the caller
/// from inside `run()`.
struct CompletionSlot {
    completion: RefCell<Option<Completion>>,
    held: Cell<Option<bool>>,
    in_run: Cell<bool>,
}

impl CompletionSlot {
    fn new(completion: Completion) -> Rc<Self> {
        Rc::new(Self {
            completion: RefCell::new(Some(completion)),
            held: Cell::new(None),
            in_run: Cell::new(true),
        })
    }

    fn fire(&self, finished: bool) {
        if self.in_run.get() {
            if self.held.get().is_none() {
                self.held.set(Some(finished));
            }
            return;
        }
        let completion = self.completion.borrow_mut().take();
        if let Some(completion) = completion {
            completion(finished);
        }
    }

    /// Leave `run()`; a held outcome is delivered on the next tick.
    fn release(self: &Rc<Self>, animations: &CameraAnimations) {
        self.in_run.set(false);
        if let Some(finished) = self.held.take() {
            log::debug!("viewport transition: outcome deferred to next tick");
            let slot = Rc::clone(self);
            animations.defer(move || slot.fire(finished));
        }
    }
}

/// State shared by the callbacks of one `run()`.
struct Run {
    target: Rc<dyn TargetStream>,
    primary: Rc<dyn PrimaryAnimation>,
    animations: CameraAnimations,
    /// Every live piece of this run: subscriptions and animations.
    phases: Rc<CompositeCancelable>,
    slot: Rc<CompletionSlot>,
    primary_duration: Duration,
    catch_up_duration: Duration,
}

impl Run {
    fn begin_primary(self: &Rc<Self>, seed: CameraOptions) {
        log::debug!("viewport transition: primary phase toward {seed:?}");
        let run = Rc::clone(self);
        let cancelable = self.primary.animate(
            &seed,
            self.primary_duration,
            Box::new(move |finished| run.primary_finished(seed, finished)),
        );
        self.phases.add(cancelable);
    }

    fn primary_finished(&self, seed: CameraOptions, finished: bool) {
        if !finished {
            log::debug!("viewport transition: primary phase interrupted");
            self.slot.fire(false);
            return;
        }
        if self.phases.is_cancelled() {
            return;
        }
        self.begin_catch_up(seed);
    }

    fn begin_catch_up(&self, seed: CameraOptions) {
        log::debug!("viewport transition: catch-up phase");
        let animator = self
            .animations
            .make_catch_up_animator(seed, self.catch_up_duration);

        let follow = {
            let animator = Rc::clone(&animator);
            self.target.observe(Box::new(move |options: &CameraOptions| {
                animator.set_target(*options);
                true
            }))
        };
        self.phases.add(Rc::clone(&follow));

        let slot = Rc::clone(&self.slot);
        animator.set_completion(move |finished| {
            follow.cancel();
            log::debug!("viewport transition finished: {finished}");
            slot.fire(finished);
        });
        animator.start();
        self.phases.add(animator);
    }
}

/// Moves the camera onto a target stream in two phases.
///
/// 1. **Primary**: on the stream's first value, the [`PrimaryAnimation`]
///    flies toward it within 80% of the maximum duration. Movement during
///    this phase is ignored.
/// 2. **Catch-up**: a [`CatchUpAnimator`](crate::animation::CatchUpAnimator)
///    converges on the stream's live value over the remaining 20%,
///    retargeting on every emission.
///
/// [`run`](Self::run) returns a token that tears down whichever pieces are
/// live. The completion passed to `run` fires exactly once: `true` after
/// the catch-up phase lands, `false` if any phase is interrupted or the
/// token is cancelled first. It never fires from inside `run` itself.
pub struct ViewportTransition {
    /// Read at the start of every run; changes apply to the next one.
    pub options: TransitionOptions,
    primary: Rc<dyn PrimaryAnimation>,
    animations: CameraAnimations,
}

impl ViewportTransition {
    /// Transition using `primary` for the first phase and `animations` for
    /// the catch-up phase.
    #[must_use]
    pub fn new(
        options: TransitionOptions,
        primary: Rc<dyn PrimaryAnimation>,
        animations: CameraAnimations,
    ) -> Self {
        Self {
            options,
            primary,
            animations,
        }
    }

    /// Transition whose primary phase is an [`EaseAnimation`].
    #[must_use]
    pub fn eased(
        options: TransitionOptions,
        easing: EasingFunction,
        animations: CameraAnimations,
    ) -> Self {
        let primary = Rc::new(EaseAnimation::new(animations.clone(), easing));
        Self::new(options, primary, animations)
    }

    /// Start a transition onto `target`.
    ///
    /// Returns immediately. An outcome reached while `run` is still on the
    /// stack (a primary capability reporting synchronously) is delivered at
    /// the start of the next [`CameraAnimations::update`]. Cancelling the
    /// returned token synchronously
    /// unsubscribes from `target`, stops any running animation and fires
    /// `completion(false)` if it has not fired yet. Dropping the token
    /// leaves the transition running.
    #[must_use]
    pub fn run(
        &self,
        target: Rc<dyn TargetStream>,
        completion: impl FnOnce(bool) + 'static,
    ) -> Rc<CompositeCancelable> {
        let max_duration = self.options.max_duration();
        let slot = CompletionSlot::new(Box::new(completion));
        let phases = Rc::new(CompositeCancelable::new());

        // Tear the phases down first, then make sure the caller hears back
        // even if the primary capability stays silent on cancel.
        let handle = Rc::new(CompositeCancelable::new());
        handle.add(phases.clone());
        handle.add(Rc::new(FnCancelable::new({
            let slot = Rc::clone(&slot);
            move || slot.fire(false)
        })));

        let run = Rc::new(Run {
            target,
            primary: Rc::clone(&self.primary),
            animations: self.animations.clone(),
            phases: Rc::clone(&phases),
            slot: Rc::clone(&slot),
            primary_duration: max_duration.mul_f64(PRIMARY_SHARE),
            catch_up_duration: max_duration.mul_f64(CATCH_UP_SHARE),
        });

        let stream = Rc::clone(&run.target);
        let first = stream.observe(Box::new(move |options: &CameraOptions| {
            run.begin_primary(*options);
            false
        }));
        phases.add(first);
        slot.release(&self.animations);
        handle
    }
}

impl std::fmt::Debug for ViewportTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportTransition")
            .field("options", &self.options)
            .field("animations", &self.animations)
            .finish_non_exhaustive()
    }
}
