//! Headless demo: fly a camera onto a subject drifting east.
//!
//! Usage: `glidepath [options.toml]`. Run with `RUST_LOG=debug` to see the
//! transition phases.

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use glidepath::animation::CameraAnimations;
use glidepath::camera::{Camera, CameraOptions, CameraSurface, Coordinate};
use glidepath::options::Options;
use glidepath::util::ManualClock;
use glidepath::viewport::{MovingTarget, ViewportController, ViewportStatus};

/// Degrees of longitude the subject moves per frame.
const DRIFT_PER_FRAME: f64 = 0.002;

fn subject_at(frame: u32) -> CameraOptions {
    CameraOptions::new()
        .with_center(Coordinate::new(
            37.77,
            -122.42 + f64::from(frame) * DRIFT_PER_FRAME,
        ))
        .with_zoom(15.0)
        .with_bearing(330.0)
        .with_pitch(45.0)
}

fn load_options() -> Options {
    match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    }
}

fn main() {
    env_logger::init();

    let options = load_options();
    let frame_interval = options.animation.frame_interval();
    let frame_cap = (options.transition.max_duration_secs.max(0.0)
        * f64::from(options.animation.frame_rate)
        * 2.0) as u32
        + 2;

    let camera = Rc::new(Camera::default());
    let clock = Rc::new(ManualClock::new());
    let animations = CameraAnimations::new(camera.clone(), clock.clone());
    let controller =
        ViewportController::from_options(&options, animations.clone());

    let subject = MovingTarget::starting_at(subject_at(0));
    let outcome = Rc::new(Cell::new(None));
    {
        let outcome = Rc::clone(&outcome);
        controller.transition_to(Rc::new(subject.clone()), move |finished| {
            outcome.set(Some(finished));
        });
    }

    let mut frame = 0;
    while controller.status() == ViewportStatus::Transitioning {
        if frame == frame_cap {
            log::warn!("giving up after {frame_cap} frames");
            controller.idle();
            break;
        }
        frame += 1;
        subject.push(subject_at(frame));
        clock.advance(frame_interval);
        animations.update();
    }

    let state = camera.camera_state();
    log::info!(
        "transition {} after {frame} frames",
        match outcome.get() {
            Some(true) => "finished",
            Some(false) => "interrupted",
            None => "pending",
        }
    );
    log::info!(
        "camera at ({:.5}, {:.5}) zoom {:.2} bearing {:.1} pitch {:.1}",
        state.center.latitude,
        state.center.longitude,
        state.zoom,
        state.bearing,
        state.pitch
    );
}
