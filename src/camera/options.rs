//! Partial camera options: the fields a transition should move.

use serde::{Deserialize, Serialize};

use super::geometry::{Coordinate, EdgeInsets, Point};
use super::state::CameraState;

/// A partial set of camera parameters.
///
/// Every field is independently optional. `None` means "no change requested
/// for this field": applying the options to a camera leaves that parameter
/// where it is, and interpolation toward them leaves it unset.
///
/// Built with chained setters:
///
/// ```
/// use glidepath::camera::{CameraOptions, Coordinate};
///
/// let target = CameraOptions::new()
///     .with_center(Coordinate::new(48.85, 2.35))
///     .with_zoom(14.0)
///     .with_bearing(90.0);
/// assert_eq!(target.zoom, Some(14.0));
/// assert!(target.pitch.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    /// Geographic point at the center of the viewport.
    pub center: Option<Coordinate>,
    /// Insets shrinking the area the center refers to.
    pub padding: Option<EdgeInsets>,
    /// Screen point that zoom, bearing and pitch changes pivot around.
    pub anchor: Option<Point>,
    /// Zoom level.
    pub zoom: Option<f64>,
    /// Heading in degrees clockwise from north, circular over [0, 360).
    pub bearing: Option<f64>,
    /// Tilt in degrees away from straight down.
    pub pitch: Option<f64>,
}

impl CameraOptions {
    /// Options with every field absent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            center: None,
            padding: None,
            anchor: None,
            zoom: None,
            bearing: None,
            pitch: None,
        }
    }

    /// Set the center.
    #[must_use]
    pub const fn with_center(mut self, center: Coordinate) -> Self {
        self.center = Some(center);
        self
    }

    /// Set the padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the anchor.
    #[must_use]
    pub const fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Set the zoom.
    #[must_use]
    pub const fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Set the bearing.
    #[must_use]
    pub const fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = Some(bearing);
        self
    }

    /// Set the pitch.
    #[must_use]
    pub const fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Whether no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }
}

/// Full snapshot of a camera as options. The anchor is a gesture-time
/// parameter rather than camera state, so it is left absent.
impl From<&CameraState> for CameraOptions {
    fn from(state: &CameraState) -> Self {
        Self {
            center: Some(state.center),
            padding: Some(state.padding),
            anchor: None,
            zoom: Some(state.zoom),
            bearing: Some(state.bearing),
            pitch: Some(state.pitch),
        }
    }
}

impl From<CameraState> for CameraOptions {
    fn from(state: CameraState) -> Self {
        Self::from(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        assert!(CameraOptions::new().is_empty());
        assert!(!CameraOptions::new().with_pitch(30.0).is_empty());
    }

    #[test]
    fn from_state_fills_everything_but_anchor() {
        let state = CameraState {
            center: Coordinate::new(10.0, 20.0),
            padding: EdgeInsets::uniform(4.0),
            zoom: 3.0,
            bearing: 45.0,
            pitch: 15.0,
        };
        let options = CameraOptions::from(&state);
        assert_eq!(options.center, Some(Coordinate::new(10.0, 20.0)));
        assert_eq!(options.padding, Some(EdgeInsets::uniform(4.0)));
        assert_eq!(options.zoom, Some(3.0));
        assert_eq!(options.bearing, Some(45.0));
        assert_eq!(options.pitch, Some(15.0));
        assert!(options.anchor.is_none());
    }

    #[test]
    fn partial_toml_leaves_missing_fields_absent() {
        let options: CameraOptions = toml::from_str("zoom = 12.5").unwrap();
        assert_eq!(options, CameraOptions::new().with_zoom(12.5));
    }
}
