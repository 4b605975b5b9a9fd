// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Two-phase camera viewport transitions toward moving targets.
//!
//! Glidepath flies a camera onto a target that may keep moving while the
//! flight is under way: a primary animation covers most of the distance,
//! then a short catch-up animation converges on the target's live
//! position. Everything is single-threaded and driven by an external
//! frame loop.
//!
//! # Key entry points
//!
//! - [`viewport::ViewportTransition`] - runs one two-phase transition
//! - [`viewport::ViewportController`] - keeps at most one transition alive
//! - [`animation::CameraAnimations`] - creates and ticks camera animators
//! - [`camera::CameraSurface`] - the camera accessor animators write to
//! - [`cancelable`] - idempotent cancellation tokens
//! - [`options::Options`] - transition and animation settings (TOML)
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use glidepath::animation::CameraAnimations;
//! use glidepath::camera::{Camera, CameraOptions, CameraSurface};
//! use glidepath::options::Options;
//! use glidepath::util::ManualClock;
//! use glidepath::viewport::{MovingTarget, ViewportTransition};
//! use web_time::Duration;
//!
//! let camera = Rc::new(Camera::default());
//! let clock = Rc::new(ManualClock::new());
//! let animations = CameraAnimations::new(camera.clone(), clock.clone());
//! let options = Options::default();
//! let transition = ViewportTransition::eased(
//!     options.transition.clone(),
//!     options.animation.easing,
//!     animations.clone(),
//! );
//!
//! let subject = MovingTarget::starting_at(CameraOptions::new().with_zoom(9.0));
//! let _handle = transition.run(Rc::new(subject.clone()), |finished| {
//!     assert!(finished);
//! });
//!
//! for _ in 0..240 {
//!     clock.advance(Duration::from_millis(16));
//!     animations.update();
//! }
//! assert!((camera.camera_state().zoom - 9.0).abs() < 1e-9);
//! ```

pub mod animation;
pub mod camera;
pub mod cancelable;
pub mod error;
pub mod options;
pub mod util;
pub mod viewport;

pub use error::GlidepathError;
