//! Idempotent cancellation tokens and their composition.
//!
//! Everything here runs on one thread. Tokens are shared as
//! [`CancelableHandle`]s and use interior mutability, so `cancel()` takes
//! `&self` and may be reached from several owners. Every implementation
//! guarantees that a second `cancel()` has no additional effect.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// An in-flight operation that can be stopped early.
pub trait Cancelable {
    /// Stop the operation. Idempotent.
    fn cancel(&self);
}

/// Shared, type-erased cancellation token.
pub type CancelableHandle = Rc<dyn Cancelable>;

/// Runs a closure on the first `cancel()` and never again.
pub struct FnCancelable {
    action: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl FnCancelable {
    /// Token running `action` when cancelled.
    pub fn new(action: impl FnOnce() + 'static) -> Self {
        Self {
            action: RefCell::new(Some(Box::new(action))),
        }
    }

    /// Whether the action has already run.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.action.borrow().is_none()
    }
}

impl Cancelable for FnCancelable {
    fn cancel(&self) {
        let action = self.action.borrow_mut().take();
        if let Some(action) = action {
            action();
        }
    }
}

impl std::fmt::Debug for FnCancelable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCancelable")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Fans cancellation out to an ordered set of children.
///
/// Children are cancelled in the order they were added. Once the composite
/// has been cancelled, any child added afterwards is cancelled on the spot
/// instead of being stored, so nothing registered late outlives the
/// teardown.
#[derive(Default)]
pub struct CompositeCancelable {
    children: RefCell<Vec<CancelableHandle>>,
    cancelled: Cell<bool>,
}

impl CompositeCancelable {
    /// Empty composite.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a child, or cancel it right away if this composite is
    /// already cancelled.
    pub fn add(&self, child: CancelableHandle) {
        if self.cancelled.get() {
            child.cancel();
            return;
        }
        self.children.borrow_mut().push(child);
    }

    /// Whether `cancel()` has run.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Number of children currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    /// Whether no children are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }
}

impl Cancelable for CompositeCancelable {
    fn cancel(&self) {
        self.cancelled.set(true);
        // Children may add to this composite while cancelling.
        let children = std::mem::take(&mut *self.children.borrow_mut());
        for child in children {
            child.cancel();
        }
    }
}

impl std::fmt::Debug for CompositeCancelable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeCancelable")
            .field("children", &self.len())
            .field("cancelled", &self.cancelled.get())
            .finish()
    }
}

/// Holds one replaceable token.
///
/// `replace` swaps the held token without cancelling the old one, so the
/// owner decides what happens to it; `cancel` cancels and drops whatever is
/// currently held.
#[derive(Default)]
pub struct CancelableContainer {
    current: RefCell<Option<CancelableHandle>>,
}

impl CancelableContainer {
    /// Empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `next`, returning the previously held token.
    pub fn replace(&self, next: CancelableHandle) -> Option<CancelableHandle> {
        self.current.borrow_mut().replace(next)
    }

    /// Remove and return the held token without cancelling it.
    pub fn take(&self) -> Option<CancelableHandle> {
        self.current.borrow_mut().take()
    }

    /// Whether a token is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.borrow().is_none()
    }
}

impl Cancelable for CancelableContainer {
    fn cancel(&self) {
        let current = self.current.borrow_mut().take();
        if let Some(current) = current {
            current.cancel();
        }
    }
}

impl std::fmt::Debug for CancelableContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelableContainer")
            .field("empty", &self.is_empty())
            .finish()
    }
}
