//! Owner of the active viewport transition.

use std::cell::Cell;
use std::rc::Rc;

use super::target::TargetStream;
use super::transition::ViewportTransition;
use crate::animation::CameraAnimations;
use crate::cancelable::{Cancelable, CancelableContainer};
use crate::options::Options;

/// Whether the controller is currently moving the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportStatus {
    /// No transition running.
    #[default]
    Idle,
    /// A transition is running.
    Transitioning,
}

/// Runs at most one viewport transition at a time.
///
/// Starting a new transition cancels the previous one first, so its
/// completion reports `false` before the new one begins.
pub struct ViewportController {
    transition: ViewportTransition,
    current: CancelableContainer,
    status: Rc<Cell<ViewportStatus>>,
    /// Bumped per transition so a stale completion cannot flip the status.
    generation: Rc<Cell<u64>>,
}

impl ViewportController {
    /// Controller driving `transition`.
    #[must_use]
    pub fn new(transition: ViewportTransition) -> Self {
        Self {
            transition,
            current: CancelableContainer::new(),
            status: Rc::new(Cell::new(ViewportStatus::Idle)),
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Controller configured from `options`, flying eased primaries with
    /// `options.animation.easing`.
    #[must_use]
    pub fn from_options(options: &Options, animations: CameraAnimations) -> Self {
        Self::new(ViewportTransition::eased(
            options.transition.clone(),
            options.animation.easing,
            animations,
        ))
    }

    /// The transition runner.
    #[must_use]
    pub fn transition(&self) -> &ViewportTransition {
        &self.transition
    }

    /// Mutable transition runner; option changes apply from the next
    /// transition on.
    pub fn transition_mut(&mut self) -> &mut ViewportTransition {
        &mut self.transition
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> ViewportStatus {
        self.status.get()
    }

    /// Cancel any running transition and start one toward `target`.
    pub fn transition_to(
        &self,
        target: Rc<dyn TargetStream>,
        completion: impl FnOnce(bool) + 'static,
    ) {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.status.set(ViewportStatus::Transitioning);
        log::debug!("viewport transition #{generation} started");

        let status = Rc::clone(&self.status);
        let current_generation = Rc::clone(&self.generation);
        let handle = self.transition.run(target, move |finished| {
            if current_generation.get() == generation {
                status.set(ViewportStatus::Idle);
            }
            completion(finished);
        });

        // a completion fired above may have started a transition of its own
        if let Some(stale) = self.current.replace(handle) {
            stale.cancel();
        }
    }

    /// Cancel the running transition, if any.
    pub fn idle(&self) {
        self.current.cancel();
        self.status.set(ViewportStatus::Idle);
    }
}

impl Drop for ViewportController {
    fn drop(&mut self) {
        self.current.cancel();
    }
}

impl std::fmt::Debug for ViewportController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportController")
            .field("transition", &self.transition)
            .field("status", &self.status.get())
            .field("generation", &self.generation.get())
            .finish_non_exhaustive()
    }
}
