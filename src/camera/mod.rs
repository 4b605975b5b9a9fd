//! Camera data model.
//!
//! [`CameraOptions`] is the partial record transitions move toward,
//! [`CameraState`] the complete record a surface reports, and
//! [`CameraSurface`] the accessor contract animators read and write through.

/// Coordinate, inset and point value types.
pub mod geometry;
/// Partial camera options.
pub mod options;
/// Complete camera state and the camera accessor contract.
pub mod state;

pub use geometry::{Coordinate, EdgeInsets, Point};
pub use options::CameraOptions;
pub use state::{Camera, CameraState, CameraSurface};
