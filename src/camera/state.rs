//! Complete camera state and the accessor contract animators drive.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use super::geometry::{Coordinate, EdgeInsets};
use super::options::CameraOptions;

/// Every camera parameter, all present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraState {
    /// Geographic point at the center of the viewport.
    pub center: Coordinate,
    /// Insets shrinking the area the center refers to.
    pub padding: EdgeInsets,
    /// Zoom level.
    pub zoom: f64,
    /// Heading in degrees, in [0, 360).
    pub bearing: f64,
    /// Tilt in degrees.
    pub pitch: f64,
}

impl CameraState {
    /// Copy of this state with every present field of `options` applied.
    ///
    /// Bearing is normalized into [0, 360). The anchor only affects how a
    /// renderer pivots, so it has no slot here and is ignored.
    #[must_use]
    pub fn merged(&self, options: &CameraOptions) -> Self {
        Self {
            center: options.center.unwrap_or(self.center),
            padding: options.padding.unwrap_or(self.padding),
            zoom: options.zoom.unwrap_or(self.zoom),
            bearing: options
                .bearing
                .map_or(self.bearing, |b| b.rem_euclid(360.0)),
            pitch: options.pitch.unwrap_or(self.pitch),
        }
    }
}

/// Synchronous read/write access to whatever surface the camera controls.
///
/// Both methods take `&self`: the surface is shared between the
/// orchestrator, its animators and the caller on a single thread, so
/// implementations use interior mutability.
pub trait CameraSurface {
    /// Current camera state.
    fn camera_state(&self) -> CameraState;

    /// Unconditionally apply every present field of `options`.
    fn set_camera(&self, options: &CameraOptions);
}

/// In-memory camera surface.
#[derive(Debug, Default)]
pub struct Camera {
    state: RefCell<CameraState>,
}

impl Camera {
    /// Camera starting at `state`.
    #[must_use]
    pub fn new(state: CameraState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }
}

impl CameraSurface for Camera {
    fn camera_state(&self) -> CameraState {
        *self.state.borrow()
    }

    fn set_camera(&self, options: &CameraOptions) {
        let mut state = self.state.borrow_mut();
        *state = state.merged(options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_camera_only_touches_present_fields() {
        let camera = Camera::new(CameraState {
            zoom: 5.0,
            pitch: 20.0,
            ..CameraState::default()
        });
        camera.set_camera(&CameraOptions::new().with_zoom(9.0));
        let state = camera.camera_state();
        assert_eq!(state.zoom, 9.0);
        assert_eq!(state.pitch, 20.0);
    }

    #[test]
    fn bearing_is_normalized() {
        let camera = Camera::default();
        camera.set_camera(&CameraOptions::new().with_bearing(-10.0));
        assert!((camera.camera_state().bearing - 350.0).abs() < 1e-9);
        camera.set_camera(&CameraOptions::new().with_bearing(725.0));
        assert!((camera.camera_state().bearing - 5.0).abs() < 1e-9);
    }
}
