//! Camera pose model.

use serde::{Deserialize, Serialize};

/// A full camera pose on the scene surface.
///
/// The overview pose and the fly-to approach parameters are configuration
/// (`config::CameraConfig`); this struct is just the wire shape handed to
/// the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Degrees, wrapped to [-180, 180]
    pub longitude: f64,
    /// Degrees
    pub latitude: f64,
    /// Camera height above the ellipsoid (meters)
    pub elevation_m: f64,
    /// Degrees from nadir
    pub tilt: f64,
    /// Degrees clockwise from north
    pub heading: f64,
}

impl CameraPose {
    /// Returns the pose with `delta` degrees added to the longitude,
    /// wrapped into [-180, 180]. Used by the idle-rotation tick.
    pub fn rotated_by(&self, delta: f64) -> Self {
        let mut longitude = self.longitude + delta;
        while longitude > 180.0 {
            longitude -= 360.0;
        }
        while longitude < -180.0 {
            longitude += 360.0;
        }
        Self { longitude, ..*self }
    }
}
