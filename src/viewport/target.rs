//! Push-based sources of desired camera options.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::camera::CameraOptions;
use crate::cancelable::{Cancelable, CancelableHandle};

/// Handler receiving each emitted target. Returning `false` ends delivery
/// on that registration.
pub type TargetHandler = Box<dyn FnMut(&CameraOptions) -> bool>;

/// A stream of successive camera targets, e.g. following a moving subject.
pub trait TargetStream {
    /// Register `handler` for future targets.
    ///
    /// The returned token unregisters it; cancelling after the handler has
    /// already returned `false` is a no-op.
    fn observe(&self, handler: TargetHandler) -> CancelableHandle;
}

type SharedHandler = Rc<RefCell<TargetHandler>>;

#[derive(Default)]
struct Hub {
    latest: Cell<Option<CameraOptions>>,
    observers: RefCell<Vec<(u64, SharedHandler)>>,
    next_id: Cell<u64>,
}

impl Hub {
    fn is_registered(&self, id: u64) -> bool {
        self.observers.borrow().iter().any(|(i, _)| *i == id)
    }

    fn remove(&self, id: u64) {
        self.observers.borrow_mut().retain(|(i, _)| *i != id);
    }
}

/// Registration token handed out by [`MovingTarget::observe`].
struct Subscription {
    hub: Weak<Hub>,
    id: u64,
}

impl Cancelable for Subscription {
    fn cancel(&self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.remove(self.id);
        }
    }
}

/// In-process target stream.
///
/// [`push`](Self::push) records the value as the latest target and
/// delivers it to every registered handler in registration order. New
/// observers are replayed the latest target synchronously from inside
/// `observe`, so a subscriber never waits for the next movement to learn
/// where the subject is.
///
/// Handlers may cancel any subscription, including their own, during
/// delivery. A handler that pushes from inside its own callback does not
/// see that nested value.
///
/// Cloning yields another handle to the same stream.
#[derive(Clone, Default)]
pub struct MovingTarget {
    hub: Rc<Hub>,
}

impl MovingTarget {
    /// Stream with no latest value and no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream whose first observer immediately receives `initial`.
    #[must_use]
    pub fn starting_at(initial: CameraOptions) -> Self {
        let target = Self::new();
        target.hub.latest.set(Some(initial));
        target
    }

    /// Most recently pushed target.
    #[must_use]
    pub fn latest(&self) -> Option<CameraOptions> {
        self.hub.latest.get()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.hub.observers.borrow().len()
    }

    /// Publish a new target.
    pub fn push(&self, target: CameraOptions) {
        self.hub.latest.set(Some(target));
        let snapshot = self.hub.observers.borrow().clone();
        for (id, handler) in snapshot {
            if !self.hub.is_registered(id) {
                continue;
            }
            let keep_going = match handler.try_borrow_mut() {
                Ok(mut handler) => (*handler)(&target),
                Err(_) => continue,
            };
            if !keep_going {
                self.hub.remove(id);
            }
        }
    }
}

impl TargetStream for MovingTarget {
    fn observe(&self, mut handler: TargetHandler) -> CancelableHandle {
        if let Some(latest) = self.hub.latest.get() {
            if !handler(&latest) {
                return Rc::new(Subscription {
                    hub: Weak::new(),
                    id: 0,
                });
            }
        }
        let id = self.hub.next_id.get();
        self.hub.next_id.set(id + 1);
        self.hub
            .observers
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(handler))));
        Rc::new(Subscription {
            hub: Rc::downgrade(&self.hub),
            id,
        })
    }
}

impl std::fmt::Debug for MovingTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovingTarget")
            .field("latest", &self.latest())
            .field("observers", &self.observer_count())
            .finish()
    }
}
