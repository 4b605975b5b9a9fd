//! Centralized interpolation utilities for camera animation.
//!
//! Percent is never clamped here. Values outside [0, 1] extrapolate, and
//! callers decide what "finished" means.

use std::ops::Range;

use crate::camera::{CameraOptions, Coordinate, EdgeInsets, Point};

/// Circular domain of bearings, in degrees.
pub const BEARING_RANGE: Range<f64> = 0.0..360.0;

/// Circular domain of longitudes, in degrees.
pub const LONGITUDE_RANGE: Range<f64> = -180.0..180.0;

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp(from: f64, to: f64, percent: f64) -> f64 {
    from + (to - from) * percent
}

/// Wrap `value` into the half-open `range`.
#[must_use]
pub fn wrap(value: f64, range: &Range<f64>) -> f64 {
    let length = range.end - range.start;
    let mut offset = (value - range.start).rem_euclid(length);
    // rem_euclid can round up to `length` for tiny negative inputs
    if offset >= length {
        offset -= length;
    }
    range.start + offset
}

/// Shortest-arc interpolation within a circular `range`.
///
/// Both endpoints are wrapped into the range first; the travelled
/// difference is then folded so it never exceeds half the range length,
/// and the result is wrapped back into the range.
#[must_use]
pub fn lerp_circular(
    from: f64,
    to: f64,
    percent: f64,
    range: &Range<f64>,
) -> f64 {
    let length = range.end - range.start;
    let from = wrap(from, range);
    let mut delta = wrap(to, range) - from;
    if delta.abs() > length / 2.0 {
        delta -= length.copysign(delta);
    }
    wrap(lerp(from, from + delta, percent), range)
}

/// Field-wise interpolation for composite geometric values.
pub trait Interpolate: Copy {
    /// Value `percent` of the way from `self` to `to`.
    #[must_use]
    fn interpolate(self, to: Self, percent: f64) -> Self;
}

/// Latitude is linear; longitude takes the short way around the
/// antimeridian.
impl Interpolate for Coordinate {
    fn interpolate(self, to: Self, percent: f64) -> Self {
        Self {
            latitude: lerp(self.latitude, to.latitude, percent),
            longitude: lerp_circular(
                self.longitude,
                to.longitude,
                percent,
                &LONGITUDE_RANGE,
            ),
        }
    }
}

impl Interpolate for EdgeInsets {
    fn interpolate(self, to: Self, percent: f64) -> Self {
        Self {
            top: lerp(self.top, to.top, percent),
            left: lerp(self.left, to.left, percent),
            bottom: lerp(self.bottom, to.bottom, percent),
            right: lerp(self.right, to.right, percent),
        }
    }
}

impl Interpolate for Point {
    fn interpolate(self, to: Self, percent: f64) -> Self {
        self.lerp(to, percent)
    }
}

/// Interpolate every field of two partial option sets.
///
/// Per field: when both sides are present the matching interpolator runs;
/// otherwise the destination wins as-is, absent included. A field only
/// present on `from` therefore comes out absent.
#[must_use]
pub fn interpolate(
    from: &CameraOptions,
    to: &CameraOptions,
    percent: f64,
) -> CameraOptions {
    CameraOptions {
        center: merge(from.center, to.center, |a, b| {
            a.interpolate(b, percent)
        }),
        padding: merge(from.padding, to.padding, |a, b| {
            a.interpolate(b, percent)
        }),
        anchor: merge(from.anchor, to.anchor, |a, b| {
            a.interpolate(b, percent)
        }),
        zoom: merge(from.zoom, to.zoom, |a, b| lerp(a, b, percent)),
        bearing: merge(from.bearing, to.bearing, |a, b| {
            lerp_circular(a, b, percent, &BEARING_RANGE)
        }),
        pitch: merge(from.pitch, to.pitch, |a, b| lerp(a, b, percent)),
    }
}

#[inline]
fn merge<T>(
    from: Option<T>,
    to: Option<T>,
    f: impl FnOnce(T, T) -> T,
) -> Option<T> {
    match (from, to) {
        (Some(from), Some(to)) => Some(f(from, to)),
        (_, to) => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    /// Distance between two angles on the bearing circle.
    fn arc_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    fn full(zoom: f64, bearing: f64) -> CameraOptions {
        CameraOptions::new()
            .with_center(Coordinate::new(10.0, 170.0))
            .with_padding(EdgeInsets::new(1.0, 2.0, 3.0, 4.0))
            .with_anchor(Point::new(100.0, 200.0))
            .with_zoom(zoom)
            .with_bearing(bearing)
            .with_pitch(0.0)
    }

    #[test]
    fn test_lerp_is_unclamped() {
        assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < EPS);
        assert!((lerp(0.0, 10.0, 1.5) - 15.0).abs() < EPS);
        assert!((lerp(0.0, 10.0, -0.5) + 5.0).abs() < EPS);
    }

    #[test]
    fn test_circular_takes_short_arc() {
        let mid = lerp_circular(10.0, 350.0, 0.5, &BEARING_RANGE);
        assert!(arc_distance(mid, 0.0) < EPS, "got {mid}");

        let quarter = lerp_circular(10.0, 350.0, 0.75, &BEARING_RANGE);
        assert!((quarter - 355.0).abs() < EPS, "got {quarter}");

        // Short arc already linear: same as lerp
        let plain = lerp_circular(90.0, 180.0, 0.5, &BEARING_RANGE);
        assert!((plain - 135.0).abs() < EPS);
    }

    #[test]
    fn test_circular_endpoints() {
        let start = lerp_circular(10.0, 350.0, 0.0, &BEARING_RANGE);
        let end = lerp_circular(10.0, 350.0, 1.0, &BEARING_RANGE);
        assert!((start - 10.0).abs() < EPS);
        assert!((end - 350.0).abs() < EPS);
    }

    #[test]
    fn test_longitude_crosses_antimeridian() {
        let from = Coordinate::new(0.0, 170.0);
        let to = Coordinate::new(20.0, -170.0);
        let mid = from.interpolate(to, 0.5);
        assert!((mid.latitude - 10.0).abs() < EPS);
        // 180 wraps to the range start
        assert!((mid.longitude + 180.0).abs() < EPS, "got {}", mid.longitude);
    }

    #[test]
    fn test_wrap_stays_half_open() {
        assert_eq!(wrap(360.0, &BEARING_RANGE), 0.0);
        assert!((wrap(-90.0, &BEARING_RANGE) - 270.0).abs() < EPS);
        assert!(wrap(-1e-18, &BEARING_RANGE) < 360.0);
        assert!((wrap(190.0, &LONGITUDE_RANGE) + 170.0).abs() < EPS);
    }

    #[test]
    fn test_insets_and_points_are_per_axis() {
        let insets = EdgeInsets::ZERO
            .interpolate(EdgeInsets::new(10.0, 20.0, 30.0, 40.0), 0.5);
        assert_eq!(insets, EdgeInsets::new(5.0, 10.0, 15.0, 20.0));

        let point =
            Point::new(0.0, 10.0).interpolate(Point::new(10.0, 0.0), 0.3);
        assert!((point.x - 3.0).abs() < EPS);
        assert!((point.y - 7.0).abs() < EPS);
    }

    #[test]
    fn test_composite_endpoints() {
        let from = full(2.0, 30.0);
        let to = full(8.0, 300.0);
        assert_eq!(interpolate(&from, &to, 0.0), from);

        let end = interpolate(&from, &to, 1.0);
        assert!((end.zoom.unwrap() - 8.0).abs() < EPS);
        assert!((end.bearing.unwrap() - 300.0).abs() < EPS);
        assert_eq!(end.center, to.center);
        assert_eq!(end.padding, to.padding);
        assert_eq!(end.anchor, to.anchor);
    }

    #[test]
    fn test_destination_only_field_is_untouched_by_percent() {
        let from = CameraOptions::new();
        let to = CameraOptions::new().with_zoom(12.0).with_bearing(45.0);
        for percent in [0.0, 0.25, 0.5, 1.0] {
            let result = interpolate(&from, &to, percent);
            assert_eq!(result, to);
        }
    }

    #[test]
    fn test_source_only_field_comes_out_absent() {
        let from = CameraOptions::new().with_zoom(3.0).with_pitch(40.0);
        let to = CameraOptions::new().with_zoom(5.0);
        let result = interpolate(&from, &to, 0.5);
        assert_eq!(result.zoom, Some(4.0));
        assert!(result.pitch.is_none());
    }

    #[test]
    fn test_composite_bearing_short_arc() {
        let from = CameraOptions::new().with_bearing(10.0);
        let to = CameraOptions::new().with_bearing(350.0);
        let mid = interpolate(&from, &to, 0.5).bearing.unwrap();
        assert!(arc_distance(mid, 0.0) < EPS, "got {mid}");
    }
}
