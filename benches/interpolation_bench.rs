//! Interpolation and frame-tick benchmarks.

use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glidepath::animation::interpolation::{lerp_circular, BEARING_RANGE};
use glidepath::animation::{interpolate, CameraAnimations, EasingFunction};
use glidepath::camera::{Camera, CameraOptions, Coordinate, EdgeInsets};
use glidepath::util::ManualClock;
use web_time::Duration;

fn full_options(zoom: f64, bearing: f64, longitude: f64) -> CameraOptions {
    CameraOptions::new()
        .with_center(Coordinate::new(40.0, longitude))
        .with_padding(EdgeInsets::uniform(20.0))
        .with_zoom(zoom)
        .with_bearing(bearing)
        .with_pitch(30.0)
}

fn circular_benchmark(c: &mut Criterion) {
    c.bench_function("lerp_circular_bearing", |b| {
        b.iter(|| {
            black_box(lerp_circular(
                black_box(10.0),
                black_box(350.0),
                black_box(0.5),
                &BEARING_RANGE,
            ))
        })
    });
}

fn composite_benchmark(c: &mut Criterion) {
    let from = full_options(3.0, 10.0, 170.0);
    let to = full_options(14.0, 350.0, -170.0);
    c.bench_function("camera_options_interpolate", |b| {
        b.iter(|| black_box(interpolate(&from, &to, black_box(0.5))))
    });
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_update");

    for count in [1, 10, 100] {
        let camera = Rc::new(Camera::default());
        let clock = Rc::new(ManualClock::new());
        let animations = CameraAnimations::new(camera, clock.clone());
        let animators: Vec<_> = (0..count)
            .map(|i| {
                let animator = animations.make_ease_animator(
                    full_options(f64::from(i), 90.0, 0.0),
                    Duration::from_secs(3600),
                    EasingFunction::DEFAULT,
                );
                animator.start();
                animator
            })
            .collect();

        group.bench_function(format!("{count}_animators"), |b| {
            b.iter(|| {
                clock.advance(Duration::from_micros(16));
                animations.update();
            })
        });
        drop(animators);
    }
    group.finish();
}

criterion_group!(
    benches,
    circular_benchmark,
    composite_benchmark,
    tick_benchmark
);
criterion_main!(benches);
