//! Lifecycle contract shared by frame-driven camera animators.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::Instant;

use crate::cancelable::Cancelable;

/// Single-shot completion callback. `true` means the animation reached its
/// natural end, `false` that it was interrupted.
pub type Completion = Box<dyn FnOnce(bool)>;

/// Identifies one animator within its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimatorId(pub(crate) u64);

/// Whether an animator is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorState {
    /// Not started, finished, or cancelled.
    #[default]
    Inactive,
    /// Started and ticking.
    Active,
}

/// Receives start/stop notifications from animators.
///
/// Animators hold the observer; it holds nothing of theirs.
pub trait AnimatorObserver {
    /// The animator went from inactive to active.
    fn animator_started(&self, id: AnimatorId);
    /// The animator went from active to inactive.
    fn animator_stopped(&self, id: AnimatorId);
}

/// A camera animation advanced once per frame by an external clock.
pub trait CameraAnimator: Cancelable {
    /// Registry-assigned identifier.
    fn id(&self) -> AnimatorId;

    /// Current lifecycle state.
    fn state(&self) -> AnimatorState;

    /// Advance one frame. No-op unless active.
    fn update(&self);
}

/// Start/stop bookkeeping and the single-shot completion slot.
///
/// Animators compose this and only add their own per-frame math.
pub(crate) struct Lifecycle {
    id: AnimatorId,
    started_at: Cell<Option<Instant>>,
    state: Cell<AnimatorState>,
    cancelled_before_start: Cell<bool>,
    completion: RefCell<Option<Completion>>,
    observer: Rc<dyn AnimatorObserver>,
}

impl Lifecycle {
    pub(crate) fn new(
        id: AnimatorId,
        observer: Rc<dyn AnimatorObserver>,
    ) -> Self {
        Self {
            id,
            started_at: Cell::new(None),
            state: Cell::new(AnimatorState::Inactive),
            cancelled_before_start: Cell::new(false),
            completion: RefCell::new(None),
            observer,
        }
    }

    pub(crate) fn id(&self) -> AnimatorId {
        self.id
    }

    pub(crate) fn state(&self) -> AnimatorState {
        self.state.get()
    }

    pub(crate) fn set_completion(&self, completion: Completion) {
        *self.completion.borrow_mut() = Some(completion);
    }

    pub(crate) fn has_completion(&self) -> bool {
        self.completion.borrow().is_some()
    }

    /// Record the start instant and go active.
    ///
    /// Returns `false` when the animator was cancelled before it ever
    /// started; it then stays inactive.
    ///
    /// # Panics
    ///
    /// Starting an animator twice is a caller bug and aborts.
    pub(crate) fn start(&self, now: Instant) -> bool {
        assert!(
            self.started_at.get().is_none(),
            "camera animator {:?} started twice",
            self.id
        );
        if self.cancelled_before_start.get() {
            log::debug!("animator {:?} cancelled before start", self.id);
            return false;
        }
        self.started_at.set(Some(now));
        self.state.set(AnimatorState::Active);
        self.observer.animator_started(self.id);
        true
    }

    /// Start instant, only while active.
    pub(crate) fn running_since(&self) -> Option<Instant> {
        match self.state.get() {
            AnimatorState::Active => self.started_at.get(),
            AnimatorState::Inactive => None,
        }
    }

    /// Go inactive and fire the completion at most once.
    pub(crate) fn finish(&self, finished: bool) {
        let was = self.state.replace(AnimatorState::Inactive);
        if was == AnimatorState::Active {
            self.observer.animator_stopped(self.id);
        } else if self.started_at.get().is_none() {
            self.cancelled_before_start.set(true);
        }
        // The slot is emptied before the call; a callback that re-enters
        // the animator finds nothing left to fire.
        let completion = self.completion.borrow_mut().take();
        if let Some(completion) = completion {
            completion(finished);
        }
    }
}
