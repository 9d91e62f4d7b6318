//! Scene rendering surface port.
//!
//! Boundary to the external 3D renderer: camera pose get/set, the
//! asynchronous "animate to pose" operation, marker highlight
//! acquire/release keyed by record rank, the docked detail panel, and a
//! server-side definition filter so rendered markers track the list
//! without a refetch.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::GlobeError;
use crate::models::camera::CameraPose;
use crate::models::event::CareerEvent;

/// External rendering surface.
///
/// `animate_camera` is the only suspending operation with a meaningful
/// failure mode: it resolves on arrival and returns
/// [`GlobeError::AnimationInterrupted`] if the animation is superseded or
/// the surface is torn down mid-flight. Callers must treat that as
/// non-fatal.
#[async_trait]
pub trait SceneSurface: Send + Sync {
    /// Current camera pose.
    async fn camera_pose(&self) -> CameraPose;

    /// Set the camera pose instantly (idle-rotation ticks).
    async fn set_camera_pose(&self, pose: CameraPose);

    /// Animate the camera to `pose` over `duration`.
    async fn animate_camera(&self, pose: CameraPose, duration: Duration)
        -> Result<(), GlobeError>;

    /// Visually emphasize the marker for the record with this rank.
    async fn acquire_highlight(&self, rank: i64);

    /// Remove the emphasis for the record with this rank.
    async fn release_highlight(&self, rank: i64);

    /// Open the docked detail panel for this record.
    async fn show_detail(&self, event: &CareerEvent);

    /// Close the detail panel if open.
    async fn close_detail(&self);

    /// Push a boolean predicate over `country`/`career_phase` down to the
    /// data layer so rendered markers match the filtered list.
    async fn set_definition_filter(&self, expression: &str);
}
